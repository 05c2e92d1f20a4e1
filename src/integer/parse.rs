// ============================================================================
// String Parsing
// Arbitrary-base digit strings via Horner's method over BigInteger
// ============================================================================

use super::{BigInteger, Sign};
use crate::numeric::{NumericError, NumericResult};

/// Digits per block such that every block parses as an exact native integer
/// (below 2^53).
fn block_size(radix: u32) -> usize {
    let size = (53.0 * std::f64::consts::LN_2 / f64::from(radix).ln()).floor() as usize;
    size.max(1)
}

fn parse_block(digits: &str, radix: u32) -> NumericResult<BigInteger> {
    u64::from_str_radix(digits, radix)
        .map(BigInteger::from)
        .map_err(|_| NumericError::InvalidInput)
}

impl BigInteger {
    /// Parse a digit string in `radix` (2 to 36), with an optional sign.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an unsupported radix, an empty digit string
    /// or a digit outside the radix.
    ///
    /// # Example
    /// ```
    /// use numeric_tower::BigInteger;
    ///
    /// let n = BigInteger::from_str_radix("-ff", 16).unwrap();
    /// assert_eq!(n.to_string(), "-255");
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> NumericResult<Self> {
        if !(2..=36).contains(&radix) {
            return Err(NumericError::InvalidInput);
        }

        let s = s.trim();
        let (sign, digits) = if let Some(rest) = s.strip_prefix('-') {
            (Sign::Minus, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Sign::Plus, rest)
        } else {
            (Sign::Plus, s)
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(NumericError::InvalidInput);
        }

        // Digits are ASCII from here on, so byte slicing is safe
        let block = block_size(radix);
        let factor = BigInteger::from(u64::from(radix).pow(block as u32));
        let head = match digits.len() % block {
            0 => block,
            r => r,
        };

        let mut result = parse_block(&digits[..head], radix)?;
        let mut start = head;
        while start < digits.len() {
            let end = start + block;
            result = result
                .times(&factor)
                .plus(&parse_block(&digits[start..end], radix)?);
            start = end;
        }

        Ok(BigInteger::from_magnitude(sign, result.limbs))
    }
}

impl std::str::FromStr for BigInteger {
    type Err = NumericError;

    /// Parse a decimal string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(10), 15);
        assert_eq!(block_size(16), 13);
        assert_eq!(block_size(36), 10);
        assert!(block_size(2) >= 52);
    }

    #[test]
    fn test_parse_decimal() {
        let n: BigInteger = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(n.to_string(), "123456789012345678901234567890");

        let neg: BigInteger = "-42".parse().unwrap();
        assert!(neg.is_negative());
        assert_eq!(neg.to_string(), "-42");

        let plus: BigInteger = "+7".parse().unwrap();
        assert_eq!(plus, BigInteger::from(7));
    }

    #[test]
    fn test_parse_block_boundaries() {
        // Exactly one and exactly two full blocks
        let one = "999999999999999";
        let two = "100000000000000000000000000000";
        assert_eq!(one.parse::<BigInteger>().unwrap().to_string(), one);
        assert_eq!(two.parse::<BigInteger>().unwrap().to_string(), two);
    }

    #[test]
    fn test_parse_radix() {
        let n = BigInteger::from_str_radix("zz", 36).unwrap();
        assert_eq!(n, BigInteger::from(35 * 36 + 35));

        let bits = "1".repeat(100);
        let n = BigInteger::from_str_radix(&bits, 2).unwrap();
        let expected = BigInteger::from(2).pow_abs(&BigInteger::from(100)).minus(&BigInteger::one());
        assert_eq!(n, expected);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<BigInteger>(), Err(NumericError::InvalidInput));
        assert_eq!("-".parse::<BigInteger>(), Err(NumericError::InvalidInput));
        assert_eq!("12a".parse::<BigInteger>(), Err(NumericError::InvalidInput));
        assert_eq!("1-2".parse::<BigInteger>(), Err(NumericError::InvalidInput));
        assert_eq!(
            BigInteger::from_str_radix("12", 1),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_negative_zero_string_is_canonical() {
        let z: BigInteger = "-0".parse().unwrap();
        assert_eq!(z.sign(), Sign::Plus);
        assert!(z.is_zero());
    }
}
