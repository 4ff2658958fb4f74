//! Two's-complement encoding over [`LimbStorage`], plus the sign-magnitude
//! helpers multiplication, division and decimal conversion work with.
//!
//! A two's-complement value is read least-significant limb first with its sign
//! in the top bit of the last limb. A magnitude is an unsigned limb sequence
//! with no leading zero limbs, except that zero is the single limb `0`.

use std::cmp::Ordering;

use crate::big_num_constants::*;
use crate::limb_storage::LimbStorage;

const SIGN_SHIFT: u32 = LIMB_BITS - 1;

pub fn is_negative(x: &[Limb]) -> bool {
    x.last().map_or(false, |top| top >> SIGN_SHIFT == 1)
}

pub fn is_zero(x: &[Limb]) -> bool {
    x.len() == 1 && x[0] == 0
}

/// The limb that extends `x` to a wider width without changing its value.
pub fn sign_extension(x: &[Limb]) -> Limb {
    if is_negative(x) { LIMB_MAX } else { 0 }
}

pub fn logical_complement(x: &mut LimbStorage) {
    for limb in x.iter_mut() {
        *limb = !*limb;
    }
}

/// `x = -x` in place. Widens by one limb when `x` is the most negative value of
/// its width.
pub fn negate(x: &mut LimbStorage) {
    debug_assert!(!x.is_empty());
    let was_negative = is_negative(x);
    logical_complement(x);
    for limb in x.iter_mut() {
        let (sum, carry) = limb.overflowing_add(1);
        *limb = sum;
        if !carry {
            break;
        }
    }
    if was_negative && is_negative(x) {
        x.push(0);
    }
}

/// Drops top limbs that only repeat the sign of the limb below them.
pub fn normalize(x: &mut LimbStorage) {
    while x.len() > 1 {
        let top = x[x.len() - 1];
        let below = x[x.len() - 2];
        let extension = if below >> SIGN_SHIFT == 1 { LIMB_MAX } else { 0 };
        if top != extension {
            break;
        }
        x.pop();
    }
}

/// Turns a magnitude into a two's-complement value, negated when `negative`.
pub fn to_twos_complement(x: &mut LimbStorage, negative: bool) {
    if is_negative(x) {
        x.push(0);
    }
    if negative {
        negate(x);
    }
}

/// Turns a two's-complement value into its magnitude.
pub fn to_sign_magnitude(x: &mut LimbStorage) {
    if is_negative(x) {
        negate(x);
    }
    trim_magnitude(x);
}

pub fn trim_magnitude(x: &mut LimbStorage) {
    while x.len() > 1 && x[x.len() - 1] == 0 {
        x.pop();
    }
}

pub fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// `x = x * factor + addend` on a magnitude, growing by a limb on carry-out.
pub fn mul_add_limb(x: &mut LimbStorage, factor: Limb, addend: Limb) {
    let mut carry = addend as DoubleLimb;
    for limb in x.iter_mut() {
        let product = (*limb as DoubleLimb) * (factor as DoubleLimb) + carry;
        *limb = product as Limb;
        carry = product >> LIMB_BITS;
    }
    if carry != 0 {
        x.push(carry as Limb);
    }
}

/// `x = x / divisor` on a magnitude, returning the remainder.
pub fn div_limb(x: &mut LimbStorage, divisor: Limb) -> Limb {
    debug_assert!(divisor != 0);
    let divisor = divisor as DoubleLimb;
    let mut remainder: DoubleLimb = 0;
    for limb in x.iter_mut().rev() {
        let window = (remainder << LIMB_BITS) | *limb as DoubleLimb;
        *limb = (window / divisor) as Limb;
        remainder = window % divisor;
    }
    trim_magnitude(x);
    remainder as Limb
}

/// `x << shift` for `shift < LIMB_BITS`, keeping the bits shifted out of the
/// top in an extra limb when `keep_overflow`.
pub fn shl_limbs(x: &[Limb], shift: u32, keep_overflow: bool) -> LimbStorage {
    debug_assert!(shift < LIMB_BITS);
    let mut shifted = LimbStorage::with_capacity(x.len() + 1);
    let mut carry: Limb = 0;
    for &limb in x {
        shifted.push((limb << shift) | carry);
        carry = if shift == 0 { 0 } else { limb >> (LIMB_BITS - shift) };
    }
    if keep_overflow {
        shifted.push(carry);
    }
    shifted
}

/// Logical `x >> shift` for `shift < LIMB_BITS`.
pub fn shr_limbs(x: &[Limb], shift: u32) -> LimbStorage {
    debug_assert!(shift < LIMB_BITS);
    let mut shifted = LimbStorage::with_capacity(x.len());
    for i in 0..x.len() {
        let high = match x.get(i + 1) {
            Some(&next) if shift != 0 => next << (LIMB_BITS - shift),
            _ => 0,
        };
        shifted.push((x[i] >> shift) | high);
    }
    shifted
}

/// Applies `op` limb by limb over the longer operand, padding the shorter one
/// with its sign extension.
pub fn bit_operation<F>(lhs: &[Limb], rhs: &[Limb], op: F) -> LimbStorage
where
    F: Fn(Limb, Limb) -> Limb,
{
    let (lhs_ext, rhs_ext) = (sign_extension(lhs), sign_extension(rhs));
    let len = lhs.len().max(rhs.len());
    let mut result = LimbStorage::with_capacity(len);
    for i in 0..len {
        let a = lhs.get(i).copied().unwrap_or(lhs_ext);
        let b = rhs.get(i).copied().unwrap_or(rhs_ext);
        result.push(op(a, b));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(limbs: &[Limb]) -> LimbStorage {
        LimbStorage::from_slice(limbs)
    }

    #[test]
    fn sign_of_top_limb() {
        assert!(!is_negative(&[0]));
        assert!(is_negative(&[0x8000_0000]));
        assert!(!is_negative(&[0xffff_ffff, 0]));
        assert!(is_zero(&[0]));
        assert!(!is_zero(&[0, 0]));
    }

    #[test]
    fn normalize_keeps_sign() {
        let mut x = storage(&[5, 0, 0]);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[5]);

        let mut x = storage(&[0x8000_0000, 0]);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[0x8000_0000, 0]);

        let mut x = storage(&[0xffff_fffe, LIMB_MAX, LIMB_MAX]);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[0xffff_fffe]);

        let mut x = storage(&[1, LIMB_MAX]);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[1, LIMB_MAX]);

        let mut x = storage(&[0]);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[0]);
    }

    #[test]
    fn negate_most_negative_widens() {
        let mut x = storage(&[0x8000_0000]);
        negate(&mut x);
        assert_eq!(x.as_slice(), &[0x8000_0000, 0]);

        let mut x = storage(&[0]);
        negate(&mut x);
        assert_eq!(x.as_slice(), &[0]);

        let mut x = storage(&[1]);
        negate(&mut x);
        assert_eq!(x.as_slice(), &[LIMB_MAX]);
    }

    #[test]
    fn sign_magnitude_round_trip() {
        let mut x = storage(&[0x8000_0000]);
        to_sign_magnitude(&mut x);
        assert_eq!(x.as_slice(), &[0x8000_0000]);
        to_twos_complement(&mut x, true);
        normalize(&mut x);
        assert_eq!(x.as_slice(), &[0x8000_0000]);

        let mut x = storage(&[0x8000_0000]);
        to_twos_complement(&mut x, false);
        assert_eq!(x.as_slice(), &[0x8000_0000, 0]);
    }

    #[test]
    fn small_multiply_and_divide() {
        let mut x = storage(&[LIMB_MAX]);
        mul_add_limb(&mut x, 2, 3);
        assert_eq!(x.as_slice(), &[1, 2]);
        assert_eq!(div_limb(&mut x, 2), 1);
        assert_eq!(x.as_slice(), &[0, 1]);
        assert_eq!(div_limb(&mut x, 0x8000_0000), 0);
        assert_eq!(x.as_slice(), &[2]);
        assert_eq!(div_limb(&mut x, 3), 2);
        assert_eq!(x.as_slice(), &[0]);
    }

    #[test]
    fn magnitude_order() {
        assert_eq!(cmp_magnitude(&[1, 2], &[5]), Ordering::Greater);
        assert_eq!(cmp_magnitude(&[1, 2], &[2, 2]), Ordering::Less);
        assert_eq!(cmp_magnitude(&[7], &[7]), Ordering::Equal);
    }

    #[test]
    fn limb_shifts() {
        let x = shl_limbs(&[0x8000_0001, 0x4000_0000], 1, true);
        assert_eq!(x.as_slice(), &[2, 0x8000_0001, 0]);
        let y = shr_limbs(&x[..2], 1);
        assert_eq!(y.as_slice(), &[0x8000_0001, 0x4000_0000]);
        assert_eq!(shl_limbs(&[3], 0, false).as_slice(), &[3]);
    }

    #[test]
    fn bit_operation_sign_extends() {
        let r = bit_operation(&[0xf0], &[LIMB_MAX], |a, b| a & b);
        assert_eq!(r.as_slice(), &[0xf0]);
        let r = bit_operation(&[1, 1], &[LIMB_MAX], |a, b| a & b);
        assert_eq!(r.as_slice(), &[1, 1]);
        let r = bit_operation(&[1, 1], &[0x7fff_ffff], |a, b| a & b);
        assert_eq!(r.as_slice(), &[1, 0]);
    }
}
