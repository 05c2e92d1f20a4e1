// ============================================================================
// Limb Store
// Unsigned magnitudes in radix 2^26, least-significant limb first
// ============================================================================
//
// Every function here is total over well-formed input (limbs < BASE) and
// returns a freshly allocated, trimmed magnitude. Inputs are never mutated.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// Bits per limb
pub const LIMB_BITS: u32 = 26;

/// Radix of the limb representation (2^26)
pub const BASE: u32 = 1 << LIMB_BITS;

/// Half the radix; a normalized divisor has its top limb at or above this
pub const HALF_BASE: u32 = BASE / 2;

const MASK: u32 = BASE - 1;

/// Magnitude storage. Four limbs (104 bits) stay inline.
pub type Limbs = SmallVec<[u32; 4]>;

#[inline]
pub fn zero() -> Limbs {
    smallvec![0]
}

#[inline]
pub fn one() -> Limbs {
    smallvec![1]
}

/// Number of limbs up to and including the most significant non-zero one.
#[inline]
pub fn significant_len(a: &[u32]) -> usize {
    a.iter().rposition(|&l| l != 0).map_or(0, |i| i + 1)
}

/// Drop trailing zero limbs, keeping at least one.
pub fn trim(mut limbs: Limbs) -> Limbs {
    limbs.truncate(significant_len(&limbs));
    if limbs.is_empty() {
        limbs.push(0);
    }
    limbs
}

#[inline]
pub fn is_zero(a: &[u32]) -> bool {
    significant_len(a) == 0
}

#[inline]
pub fn is_odd(a: &[u32]) -> bool {
    a.first().map_or(false, |&l| l & 1 == 1)
}

/// Compare magnitudes: longer wins, then limbs from the most significant down.
pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    let la = significant_len(a);
    let lb = significant_len(b);
    la.cmp(&lb)
        .then_with(|| a[..la].iter().rev().cmp(b[..lb].iter().rev()))
}

/// `a + b`
pub fn add(a: &[u32], b: &[u32]) -> Limbs {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Limbs::with_capacity(long.len() + 1);
    let mut carry = 0u32;

    for (i, &limb) in long.iter().enumerate() {
        let sum = limb + short.get(i).copied().unwrap_or(0) + carry;
        out.push(sum & MASK);
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        out.push(carry);
    }

    trim(out)
}

/// `a - b`, requires `a >= b`.
pub fn sub(a: &[u32], b: &[u32]) -> Limbs {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");

    let mut out = Limbs::with_capacity(a.len());
    let mut borrow = 0u32;

    for (i, &limb) in a.iter().enumerate() {
        let subtrahend = b.get(i).copied().unwrap_or(0) + borrow;
        if limb >= subtrahend {
            out.push(limb - subtrahend);
            borrow = 0;
        } else {
            out.push(limb + BASE - subtrahend);
            borrow = 1;
        }
    }

    trim(out)
}

/// `a * b` by naive convolution followed by a single carry pass.
pub fn mul(a: &[u32], b: &[u32]) -> Limbs {
    if is_zero(a) || is_zero(b) {
        return zero();
    }

    // u128 slots: each product is < 2^52, so no slot can overflow
    let mut acc = vec![0u128; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            acc[i + j] += u128::from(x) * u128::from(y);
        }
    }

    let mut out = Limbs::with_capacity(acc.len());
    let mut carry = 0u128;
    for slot in acc {
        let total = slot + carry;
        out.push((total & u128::from(MASK)) as u32);
        carry = total >> LIMB_BITS;
    }
    debug_assert_eq!(carry, 0);

    trim(out)
}

/// `a * m` for a single limb `m`.
pub fn mul_small(a: &[u32], m: u32) -> Limbs {
    let mut out = Limbs::with_capacity(a.len() + 1);
    let mut carry = 0u64;

    for &limb in a {
        let total = u64::from(limb) * u64::from(m) + carry;
        out.push((total & u64::from(MASK)) as u32);
        carry = total >> LIMB_BITS;
    }
    while carry != 0 {
        out.push((carry & u64::from(MASK)) as u32);
        carry >>= LIMB_BITS;
    }

    trim(out)
}

/// `(a / d, a % d)` for a single non-zero limb `d`.
pub fn div_small(a: &[u32], d: u32) -> (Limbs, u32) {
    debug_assert!(d != 0);

    let mut quotient: Limbs = smallvec![0; a.len()];
    let mut rem = 0u64;

    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | u64::from(a[i]);
        quotient[i] = (cur / u64::from(d)) as u32;
        rem = cur % u64::from(d);
    }

    (trim(quotient), rem as u32)
}

/// `a * 2^bits` for `bits < LIMB_BITS`.
#[inline]
pub fn shl_bits(a: &[u32], bits: u32) -> Limbs {
    debug_assert!(bits < LIMB_BITS);
    mul_small(a, 1 << bits)
}

/// `a / 2^bits` (truncating) for `bits < LIMB_BITS`.
pub fn shr_bits(a: &[u32], bits: u32) -> Limbs {
    debug_assert!(bits < LIMB_BITS);
    if bits == 0 {
        return trim(a.into());
    }

    let low_mask = (1u64 << bits) - 1;
    let mut out: Limbs = smallvec![0; a.len()];
    let mut carry = 0u64;

    for i in (0..a.len()).rev() {
        let cur = (carry << LIMB_BITS) | u64::from(a[i]);
        out[i] = (cur >> bits) as u32;
        carry = u64::from(a[i]) & low_mask;
    }

    trim(out)
}

/// `a / 2^bits` (truncating) for any shift.
pub fn shr(a: &[u32], bits: u64) -> Limbs {
    let whole = bits / u64::from(LIMB_BITS);
    if whole >= significant_len(a) as u64 {
        return zero();
    }
    shr_bits(&a[whole as usize..], (bits % u64::from(LIMB_BITS)) as u32)
}

/// `a / 2`, truncating.
#[inline]
pub fn halve(a: &[u32]) -> Limbs {
    shr_bits(a, 1)
}

/// `a * BASE^count`: prepend `count` zero limbs.
pub fn shift_limbs(a: &[u32], count: usize) -> Limbs {
    if is_zero(a) {
        return zero();
    }
    let mut out: Limbs = smallvec![0; count];
    out.extend_from_slice(&a[..significant_len(a)]);
    out
}

/// `2^k`
pub fn pow2(k: u32) -> Limbs {
    let mut out: Limbs = smallvec![0; (k / LIMB_BITS) as usize];
    out.push(1 << (k % LIMB_BITS));
    out
}

/// Number of significant bits.
pub fn bit_length(a: &[u32]) -> u64 {
    let len = significant_len(a);
    if len == 0 {
        return 0;
    }
    let top = a[len - 1];
    (len as u64 - 1) * u64::from(LIMB_BITS) + u64::from(32 - top.leading_zeros())
}

/// Number of trailing zero bits (0 for a zero magnitude).
pub fn trailing_zero_bits(a: &[u32]) -> u64 {
    match a.iter().position(|&l| l != 0) {
        Some(i) => i as u64 * u64::from(LIMB_BITS) + u64::from(a[i].trailing_zeros()),
        None => 0,
    }
}

/// Nearest double, rounding half to even.
///
/// The top 64 bits are converted in one step with every lower bit folded
/// into a sticky bit, so the result is rounded once.
pub fn to_f64(a: &[u32]) -> f64 {
    let bits = bit_length(a);
    if bits > 1024 {
        return f64::INFINITY;
    }

    let shift = bits.saturating_sub(64);
    let mut top = to_u128(&shr(a, shift)).map_or(0, |t| t as u64);
    if trailing_zero_bits(a) < shift {
        top |= 1;
    }
    top as f64 * 2f64.powi(shift as i32)
}

/// The exact double value of `a`, if one exists.
pub fn to_f64_exact(a: &[u32]) -> Option<f64> {
    let bits = bit_length(a);
    if bits > 1024 || bits.saturating_sub(trailing_zero_bits(a)) > 53 {
        return None;
    }
    Some(to_f64(a))
}

/// Magnitude as u128, if it fits.
pub fn to_u128(a: &[u32]) -> Option<u128> {
    if bit_length(a) > 128 {
        return None;
    }
    Some(
        a[..significant_len(a)]
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | u128::from(limb)),
    )
}

/// Split an unsigned integer into limbs.
pub fn from_u128(mut n: u128) -> Limbs {
    if n == 0 {
        return zero();
    }
    let mut out = Limbs::new();
    while n != 0 {
        out.push((n & u128::from(MASK)) as u32);
        n >>= LIMB_BITS;
    }
    out
}
