// ============================================================================
// Schoolbook Division
// Long division of magnitudes after Hasselström, "Fast Division of Large
// Integers" (Algorithms 3.1 and 3.2)
// ============================================================================

use super::limbs::{self, Limbs, BASE, HALF_BASE, LIMB_BITS};
use smallvec::smallvec;
use std::cmp::Ordering;

/// `(a / b, a % b)` over magnitudes. `b` must be non-zero.
pub(super) fn divrem_magnitudes(a: &[u32], b: &[u32]) -> (Limbs, Limbs) {
    let b = &b[..limbs::significant_len(b)];
    debug_assert!(!b.is_empty(), "division by a zero magnitude");

    // Scale by a power of two so the divisor's top limb is at least BASE/2.
    // The limb count of the divisor does not change.
    let top = b[b.len() - 1];
    let shift = if top < HALF_BASE {
        (LIMB_BITS - 1) - (31 - top.leading_zeros())
    } else {
        0
    };

    if shift == 0 {
        return schoolbook(a, b);
    }

    let a = limbs::shl_bits(a, shift);
    let b = limbs::shl_bits(b, shift);
    let (quotient, remainder) = schoolbook(&a, &b);
    (quotient, limbs::shr_bits(&remainder, shift))
}

/// Algorithm 3.2. `b` must be normalized.
fn schoolbook(a: &[u32], b: &[u32]) -> (Limbs, Limbs) {
    let a = &a[..limbs::significant_len(a).max(1)];
    let m = a.len() - 1;
    let n = b.len() - 1;

    if m < n {
        return (limbs::zero(), a.into());
    }

    if m == n {
        return match limbs::cmp(a, b) {
            Ordering::Less => (limbs::zero(), a.into()),
            _ => (limbs::one(), limbs::sub(a, b)),
        };
    }

    if m == n + 1 {
        return subroutine(a, b);
    }

    // A = high * BASE^low_len + low, where high has n + 2 limbs
    let low_len = m - n - 1;
    let (low, high) = a.split_at(low_len);
    let (high_quotient, high_remainder) = subroutine(high, b);

    let mut combined: Limbs = low.into();
    combined.extend_from_slice(&high_remainder);
    let (mut quotient, remainder) = schoolbook(&combined, b);

    // The low quotient is below BASE^low_len, so it occupies exactly
    // low_len limbs once padded.
    quotient.resize(low_len, 0);
    quotient.extend_from_slice(&high_quotient);

    (limbs::trim(quotient), remainder)
}

/// Algorithm 3.1. `a` has exactly one limb more than the normalized `b`.
fn subroutine(a: &[u32], b: &[u32]) -> (Limbs, Limbs) {
    let n = b.len();
    let b_shifted = limbs::shift_limbs(b, 1);

    // Quotient digit would overflow one limb: peel off BASE * b first
    if limbs::cmp(a, &b_shifted) != Ordering::Less {
        let reduced = limbs::sub(a, &b_shifted);
        let (quotient, remainder) = schoolbook(&reduced, b);
        return (limbs::add(&quotient, &[0, 1]), remainder);
    }

    let top = u64::from(a[n]) * u64::from(BASE) + u64::from(a[n - 1]);
    let mut q = (top / u64::from(b[n - 1])).min(u64::from(BASE) - 1) as u32;
    let mut trial = limbs::mul_small(b, q);

    // The estimate exceeds the true digit by at most two
    let mut corrections = 0;
    while limbs::cmp(&trial, a) == Ordering::Greater {
        q -= 1;
        trial = limbs::sub(&trial, b);
        corrections += 1;
    }
    debug_assert!(corrections <= 2);

    (smallvec![q], limbs::sub(a, &trial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::limbs::{from_u128, to_u128};

    fn check(a: u128, b: u128) {
        let (q, r) = divrem_magnitudes(&from_u128(a), &from_u128(b));
        assert_eq!(to_u128(&q), Some(a / b), "quotient of {} / {}", a, b);
        assert_eq!(to_u128(&r), Some(a % b), "remainder of {} / {}", a, b);
    }

    #[test]
    fn test_single_limb() {
        check(7, 2);
        check(0, 5);
        check(3, 5);
        check(5, 5);
    }

    #[test]
    fn test_unnormalized_divisor() {
        check(1 << 100, 3);
        check(u128::MAX, 1);
        check(u128::MAX, 10_000_000);
    }

    #[test]
    fn test_one_limb_longer() {
        // 2 limbs / 1 limb with a normalized divisor
        check((1 << 51) + 12345, (1 << 25) + 1);
        // Dividend top limb >= divisor top limb takes the peel-off path
        check((BASE as u128 - 1) * (1 << 26) + 5, (1 << 25) + 7);
    }

    #[test]
    fn test_general_case() {
        check(u128::MAX, (1 << 60) + 987_654_321);
        check(u128::MAX - 12_345, 0x1234_5678_9abc);
        check(121_932_631_112_635_269, 987_654_321);
        check(1 << 127, (1 << 64) - 1);
    }

    #[test]
    fn test_quotient_with_inner_zero_limbs() {
        // Quotient 2^60 + 1 has zero limbs in the middle
        let b: u128 = (1 << 40) + 3;
        let q: u128 = (1 << 60) + 1;
        check(b * q + 17, b);
    }
}
