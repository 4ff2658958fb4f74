//! # BigInt
//! Arbitrary-precision signed integers stored in two's-complement notation.
//! Small values live inline; large values share their limbs between clones
//! until one of the clones is modified.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a & b = {}", &a & &b);
//! println!("a << 10 = {}", &a << 10);
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use log::trace;
use num_traits::{One, Zero};

use crate::big_int_repr::*;
use crate::big_num_constants::*;
use crate::big_num_error::BigIntError;
use crate::limb_storage::LimbStorage;

/// Arbitrary-precision signed integer.
///
/// Limbs are kept normalized, so two equal values always have identical limbs.
/// Cloning is O(1) for heap-resident values. A `BigInt` is neither `Send` nor
/// `Sync`: clones share a non-atomic reference count.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    limbs: LimbStorage,
}

// 构造
impl BigInt {
    pub(crate) fn from_limbs(mut limbs: LimbStorage) -> BigInt {
        normalize(&mut limbs);
        BigInt { limbs }
    }

    pub(crate) fn into_limbs(self) -> LimbStorage {
        self.limbs
    }

    fn from_i64(val: i64) -> BigInt {
        let limbs = [val as Limb, (val >> LIMB_BITS) as Limb];
        BigInt::from_limbs(LimbStorage::from_slice(&limbs))
    }

    fn from_u64(val: u64) -> BigInt {
        let limbs = [val as Limb, (val >> LIMB_BITS) as Limb, 0];
        BigInt::from_limbs(LimbStorage::from_slice(&limbs))
    }
}

impl From<i32> for BigInt {
    fn from(val: i32) -> Self {
        BigInt { limbs: LimbStorage::from_elem(1, val as Limb) }
    }
}

macro_rules! impl_narrow_to_big_int {
    ($($t: ty),*) => {
    $(
    impl From<$t> for BigInt {
        fn from(val: $t) -> Self {
            BigInt::from(val as i32)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i64(val as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u64(val as u64)
        }
    }
    )*
    };
}
impl_narrow_to_big_int!(i8, i16, u8, u16);
impl_signed_to_big_int!(i64, isize);
impl_unsigned_to_big_int!(u32, u64, usize);

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::from(0)
    }

    fn is_zero(&self) -> bool {
        is_zero(&self.limbs)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::from(1)
    }
}

// 查询
impl BigInt {
    pub fn is_zero(&self) -> bool {
        is_zero(&self.limbs)
    }

    pub fn is_negative(&self) -> bool {
        is_negative(&self.limbs)
    }

    /// Number of 32-bit limbs in the normalized two's-complement encoding.
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// The two's-complement limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn abs(&self) -> BigInt {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Exchanges the values of `self` and `other` without copying limbs.
    pub fn swap(&mut self, other: &mut BigInt) {
        self.limbs.swap(&mut other.limbs);
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.limbs, &other.limbs);
        match (is_negative(a), is_negative(b)) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            // same sign and width: unsigned limb order is value order
            (negative, _) => match Ord::cmp(&a.len(), &b.len()) {
                Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
                wider if negative => wider.reverse(),
                wider => wider,
            },
        }
    }
}

// 实现加法
impl BigInt {
    fn add_twos_complement(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        let (long, short) = if lhs.limbs.len() >= rhs.limbs.len() {
            (&lhs.limbs, &rhs.limbs)
        } else {
            (&rhs.limbs, &lhs.limbs)
        };
        let short_ext = sign_extension(short);

        let mut sum = LimbStorage::with_capacity(long.len() + 1);
        let mut carry = false;
        for (i, &x) in long.iter().enumerate() {
            let y = short.get(i).copied().unwrap_or(short_ext);
            let (s, c1) = x.overflowing_add(y);
            let (s, c2) = s.overflowing_add(carry as Limb);
            sum.push(s);
            carry = c1 || c2;
        }
        // equal signs may overflow into the next limb; the extension is that sign
        if lhs.is_negative() == rhs.is_negative() {
            sum.push(sign_extension(long));
        }
        BigInt::from_limbs(sum)
    }

    fn sub_twos_complement(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        BigInt::add_twos_complement(lhs, &-rhs)
    }
}

// 实现自增自减
impl BigInt {
    /// `self += 1`, returning `self` for chaining.
    pub fn increment(&mut self) -> &mut Self {
        let was_negative = self.is_negative();
        for limb in self.limbs.iter_mut() {
            let (sum, carry) = limb.overflowing_add(1);
            *limb = sum;
            if !carry {
                break;
            }
        }
        if !was_negative && self.is_negative() {
            self.limbs.push(0);
        }
        normalize(&mut self.limbs);
        self
    }

    /// `self -= 1`, returning `self` for chaining.
    pub fn decrement(&mut self) -> &mut Self {
        let was_negative = self.is_negative();
        for limb in self.limbs.iter_mut() {
            let (difference, borrow) = limb.overflowing_sub(1);
            *limb = difference;
            if !borrow {
                break;
            }
        }
        if was_negative && !self.is_negative() {
            self.limbs.push(LIMB_MAX);
        }
        normalize(&mut self.limbs);
        self
    }

    /// Increments `self` and returns the value it had before.
    pub fn post_increment(&mut self) -> BigInt {
        let old = self.clone();
        self.increment();
        old
    }

    /// Decrements `self` and returns the value it had before.
    pub fn post_decrement(&mut self) -> BigInt {
        let old = self.clone();
        self.decrement();
        old
    }
}

// 实现取反
impl BigInt {
    fn negated(&self) -> BigInt {
        let mut limbs = self.limbs.clone();
        negate(&mut limbs);
        BigInt::from_limbs(limbs)
    }

    fn complemented(&self) -> BigInt {
        let mut limbs = self.limbs.clone();
        logical_complement(&mut limbs);
        BigInt::from_limbs(limbs)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.complemented()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.complemented()
    }
}

// 实现乘法
impl BigInt {
    fn mul_schoolbook(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        if lhs.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let negative = lhs.is_negative() != rhs.is_negative();
        let mut x = lhs.limbs.clone();
        let mut y = rhs.limbs.clone();
        to_sign_magnitude(&mut x);
        to_sign_magnitude(&mut y);
        if x.len() < y.len() {
            x.swap(&mut y);
        }

        let mut product = LimbStorage::from_elem(x.len() + y.len(), 0);
        for (i, &multiplier) in y.iter().enumerate() {
            let mut carry: DoubleLimb = 0;
            for (j, &limb) in x.iter().enumerate() {
                let t = (limb as DoubleLimb) * (multiplier as DoubleLimb)
                      + product[i + j] as DoubleLimb
                      + carry;
                product[i + j] = t as Limb;
                carry = t >> LIMB_BITS;
            }
            product[i + x.len()] = carry as Limb;
        }
        trim_magnitude(&mut product);
        to_twos_complement(&mut product, negative);
        BigInt::from_limbs(product)
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division returning `(quotient, remainder)`. The remainder has
    /// the sign of `self`, so `quotient * rhs + remainder == self`.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient_negative = self.is_negative() != rhs.is_negative();
        let remainder_negative = self.is_negative();
        let mut u = self.limbs.clone();
        let mut v = rhs.limbs.clone();
        to_sign_magnitude(&mut u);
        to_sign_magnitude(&mut v);

        let (mut q, mut r) = BigInt::divide_magnitude(u, &v);
        to_twos_complement(&mut q, quotient_negative);
        to_twos_complement(&mut r, remainder_negative);
        Ok((BigInt::from_limbs(q), BigInt::from_limbs(r)))
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    fn divide_magnitude(u: LimbStorage, v: &[Limb]) -> (LimbStorage, LimbStorage) {
        if cmp_magnitude(&u, v) == Ordering::Less {
            return (LimbStorage::from_elem(1, 0), u);
        }
        if v.len() == 1 {
            return BigInt::divide_one_word(u, v[0]);
        }
        BigInt::divide_knuth(&u, v)
    }

    fn divide_one_word(mut u: LimbStorage, v: Limb) -> (LimbStorage, LimbStorage) {
        let r = div_limb(&mut u, v);
        (u, LimbStorage::from_elem(1, r))
    }

    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
    /// `u >= v`, `v` has at least two limbs, both are trimmed magnitudes.
    fn divide_knuth(u: &[Limb], v: &[Limb]) -> (LimbStorage, LimbStorage) {
        let n = v.len();
        let m = u.len() - n;

        // D1 normalize: shift so the top limb of v is at least b / 2
        let shift = v[n - 1].leading_zeros();
        let vn = shl_limbs(v, shift, false);
        let mut un = shl_limbs(u, shift, true);
        trace!("knuth division: {} by {} limbs, normalization shift {}", u.len(), n, shift);

        let base: DoubleLimb = 1 << LIMB_BITS;
        let v_top = vn[n - 1] as DoubleLimb;
        let v_next = vn[n - 2] as DoubleLimb;
        let mut q = LimbStorage::from_elem(m + 1, 0);

        for j in (0..=m).rev() {
            // D3 estimate qhat from the top two limbs of the window
            let window = ((un[j + n] as DoubleLimb) << LIMB_BITS) | un[j + n - 1] as DoubleLimb;
            let mut qhat = window / v_top;
            let mut rhat = window % v_top;
            while qhat >= base
                || qhat * v_next > ((rhat << LIMB_BITS) | un[j + n - 2] as DoubleLimb)
            {
                qhat -= 1;
                rhat += v_top;
                trace!("knuth division: digit {} corrected to {:#x}", j, qhat);
                if rhat >= base {
                    break;
                }
            }

            // D4 multiply and subtract
            let mut mul_carry: DoubleLimb = 0;
            let mut borrow = false;
            for i in 0..n {
                let product = qhat * vn[i] as DoubleLimb + mul_carry;
                mul_carry = product >> LIMB_BITS;
                let (d, b1) = un[i + j].overflowing_sub(product as Limb);
                let (d, b2) = d.overflowing_sub(borrow as Limb);
                un[i + j] = d;
                borrow = b1 || b2;
            }
            let (d, b1) = un[j + n].overflowing_sub(mul_carry as Limb);
            let (d, b2) = d.overflowing_sub(borrow as Limb);
            un[j + n] = d;

            // D5, D6 qhat was one too large: add v back
            let mut digit = qhat as Limb;
            if b1 || b2 {
                trace!("knuth division: add back at digit {}", j);
                digit -= 1;
                let mut carry = false;
                for i in 0..n {
                    let (s, c1) = un[i + j].overflowing_add(vn[i]);
                    let (s, c2) = s.overflowing_add(carry as Limb);
                    un[i + j] = s;
                    carry = c1 || c2;
                }
                un[j + n] = un[j + n].wrapping_add(carry as Limb);
            }
            q[j] = digit;
        }

        // D8 unnormalize the remainder
        let mut r = shr_limbs(&un[..n], shift);
        trim_magnitude(&mut q);
        trim_magnitude(&mut r);
        (q, r)
    }

    fn div_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        match lhs.checked_div(rhs) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    fn rem_or_panic(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        match lhs.checked_rem(rhs) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

// 实现位运算
impl BigInt {
    fn and(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        BigInt::from_limbs(bit_operation(&lhs.limbs, &rhs.limbs, |a, b| a & b))
    }

    fn or(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        BigInt::from_limbs(bit_operation(&lhs.limbs, &rhs.limbs, |a, b| a | b))
    }

    fn xor(lhs: &BigInt, rhs: &BigInt) -> BigInt {
        BigInt::from_limbs(bit_operation(&lhs.limbs, &rhs.limbs, |a, b| a ^ b))
    }
}

// 实现移位
impl BigInt {
    fn shift_left(&self, n: u32) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let skip = (n / LIMB_BITS) as usize;
        let bits = n % LIMB_BITS;

        let mut shifted = LimbStorage::with_capacity(skip + self.limbs.len() + 1);
        for _ in 0..skip {
            shifted.push(0);
        }
        let mut carry: Limb = 0;
        for &limb in self.limbs.iter() {
            shifted.push((limb << bits) | carry);
            carry = if bits == 0 { 0 } else { limb >> (LIMB_BITS - bits) };
        }
        if bits != 0 {
            shifted.push((sign_extension(&self.limbs) << bits) | carry);
        }
        BigInt::from_limbs(shifted)
    }

    /// Arithmetic shift; zero once every limb has been shifted out.
    fn shift_right(&self, n: u32) -> BigInt {
        let skip = (n / LIMB_BITS) as usize;
        let bits = n % LIMB_BITS;
        if skip >= self.limbs.len() {
            return BigInt::zero();
        }

        let kept = &self.limbs[skip..];
        let top = kept.len() - 1;
        let mut shifted = LimbStorage::with_capacity(kept.len());
        for i in 0..top {
            let high = if bits == 0 { 0 } else { kept[i + 1] << (LIMB_BITS - bits) };
            shifted.push((kept[i] >> bits) | high);
        }
        shifted.push(((kept[top] as SignedLimb) >> bits) as Limb);
        BigInt::from_limbs(shifted)
    }

    fn shl_signed(&self, n: i32) -> BigInt {
        if n >= 0 {
            self.shift_left(n as u32)
        } else {
            self.shift_right(n.unsigned_abs())
        }
    }

    fn shr_signed(&self, n: i32) -> BigInt {
        if n >= 0 {
            self.shift_right(n as u32)
        } else {
            self.shift_left(n.unsigned_abs())
        }
    }
}

impl Shl<i32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: i32) -> Self::Output {
        self.shl_signed(n)
    }
}

impl Shl<i32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: i32) -> Self::Output {
        self.shl_signed(n)
    }
}

impl ShlAssign<i32> for BigInt {
    fn shl_assign(&mut self, n: i32) {
        *self = self.shl_signed(n);
    }
}

impl Shr<i32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: i32) -> Self::Output {
        self.shr_signed(n)
    }
}

impl Shr<i32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: i32) -> Self::Output {
        self.shr_signed(n)
    }
}

impl ShrAssign<i32> for BigInt {
    fn shr_assign(&mut self, n: i32) {
        *self = self.shr_signed(n);
    }
}

macro_rules! impl_binary_op {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $func: path);* $(;)?) => {
    $(
    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $func(self, rhs)
        }
    }

    impl $imp<BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $func(&self, &rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $func(&self, rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $func(self, &rhs)
        }
    }

    impl $imp_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = $func(self, rhs);
        }
    }

    impl $imp_assign<BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            *self = $func(self, &rhs);
        }
    }
    )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, BigInt::add_twos_complement;
    Sub, sub, SubAssign, sub_assign, BigInt::sub_twos_complement;
    Mul, mul, MulAssign, mul_assign, BigInt::mul_schoolbook;
    Div, div, DivAssign, div_assign, BigInt::div_or_panic;
    Rem, rem, RemAssign, rem_assign, BigInt::rem_or_panic;
    BitAnd, bitand, BitAndAssign, bitand_assign, BigInt::and;
    BitOr, bitor, BitOrAssign, bitor_assign, BigInt::or;
    BitXor, bitxor, BitXorAssign, bitxor_assign, BigInt::xor;
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(-1).limbs(), &[LIMB_MAX]);
    assert_eq!(BigInt::from(i32::MIN).limbs(), &[0x8000_0000]);
    assert_eq!(BigInt::from(-100_i8), BigInt::from(-100));
    assert_eq!(BigInt::from(u32::MAX).limbs(), &[LIMB_MAX, 0]);
    assert_eq!(BigInt::from(u64::MAX), big("18446744073709551615"));
    assert_eq!(BigInt::from(i64::MIN), big("-9223372036854775808"));
    assert_eq!(BigInt::from(-113132_i64), BigInt::from(-113132));
    assert_eq!(BigInt::from(0_usize), BigInt::zero());
    assert_eq!(BigInt::default().limbs(), &[0]);
}

#[test]
fn test_add() {
    assert_eq!(big("0") - big("0"), BigInt::zero());
    assert_eq!(BigInt::from(i32::MAX) + BigInt::from(1), big("2147483648"));
    assert_eq!(BigInt::from(-1) + BigInt::from(1), BigInt::zero());
    assert_eq!(BigInt::from(i32::MIN) + BigInt::from(i32::MIN), big("-4294967296"));
    assert_eq!(big("4294967295") + big("1"), big("4294967296"));
    assert_eq!(big("-4294967296") + big("4294967295"), BigInt::from(-1));
    assert_eq!(
        big("99999999999999999999999999") - big("-1"),
        big("100000000000000000000000000")
    );
    let mut a = big("123456789123456789");
    a -= &big("123456789123456790");
    assert_eq!(a, BigInt::from(-1));
}

#[test]
fn test_neg() {
    let min = BigInt::from(i32::MIN);
    let positive = -&min;
    assert_eq!(positive.to_string(), "2147483648");
    assert_eq!(positive.limb_count(), 2);
    assert_eq!(-positive, min);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!(-big("-2147483648") - BigInt::from(1), big("2147483647"));
    assert_eq!((-big("-2147483648")).to_string(), "2147483648");
    assert_eq!(-(-big("-2147483648")) - BigInt::from(1), big("-2147483649"));
    assert_eq!(!BigInt::from(0), BigInt::from(-1));
    assert_eq!(!big("4294967296"), big("-4294967297"));
}

#[test]
fn test_increment() {
    let mut a = BigInt::from(-1);
    a.increment();
    assert_eq!(a, BigInt::zero());
    let mut a = BigInt::from(i32::MAX);
    assert_eq!(a.post_increment(), BigInt::from(i32::MAX));
    assert_eq!(a, big("2147483648"));
    a.decrement();
    assert_eq!(a, BigInt::from(i32::MAX));
    let mut a = BigInt::from(i32::MIN);
    a.decrement();
    assert_eq!(a, big("-2147483649"));
    a.increment().increment();
    assert_eq!(a, big("-2147483647"));
    let mut a = BigInt::zero();
    assert_eq!(a.post_decrement(), BigInt::zero());
    assert_eq!(a, BigInt::from(-1));
    let mut a = big("-4294967296");
    a.increment();
    assert_eq!(a, big("-4294967295"));
}

#[test]
fn test_cmp() {
    let values = [
        big("-18446744073709551616"),
        big("-4294967296"),
        big("-2147483649"),
        BigInt::from(i32::MIN),
        BigInt::from(-2),
        BigInt::from(-1),
        BigInt::zero(),
        BigInt::from(1),
        BigInt::from(i32::MAX),
        big("2147483648"),
        big("4294967296"),
        big("18446744073709551616"),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert!(big("5") <= big("5"));
    assert!(big("5") != big("-5"));
}

#[test]
fn test_mul() {
    assert_eq!((big("123456789123456789") * big("2")).to_string(), "246913578246913578");
    assert_eq!(big("-3") * big("7"), BigInt::from(-21));
    assert_eq!(big("-3") * big("-7"), BigInt::from(21));
    assert_eq!(big("0") * big("-7"), BigInt::zero());
    assert_eq!(BigInt::from(i32::MIN) * BigInt::from(-1), big("2147483648"));
    assert_eq!(
        big("4294967295") * big("4294967295"),
        big("18446744065119617025")
    );
    assert_eq!(
        big("-12345678901234567890123456789") * big("98765432109876543210"),
        big("-1219326311370217952249657064223746380111126352690")
    );
}

#[test]
fn test_div() {
    let a = big("120");
    let b = big("13");
    assert_eq!(&a / &b, big("9"));
    assert_eq!(&a % &b, big("3"));
    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    assert_eq!(a / b, big("10000000000000000000000000000000"));
    // divide Knuth
    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);
    assert_eq!(&(&a / &b) * &b + &a % &b, a);
    assert_eq!(big("-7") / big("2"), BigInt::from(-3));
    assert_eq!(big("7") / big("-2"), BigInt::from(-3));
    assert_eq!(big("3") / big("4294967296"), BigInt::zero());
    assert_eq!(big("-2147483648") / big("-1"), big("2147483648"));
}

#[test]
fn test_div_literal() {
    let a = big("1000000000000000000");
    let b = big("999999999");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "1000000001");
    assert_eq!(r.to_string(), "1");
}

#[test]
fn test_div_add_back() {
    // limbs [0, 0, 0x80000000, 0x7fffffff] / [1, 0, 0x80000000]
    let a = big("170141183420855150474555134919112130560");
    let b = big("39614081257132168796771975169");
    let q = big("4294967294");
    let r = big("39614081257132168792477007874");
    assert_eq!(a.div_rem(&b), Ok((q.clone(), r.clone())));
    assert_eq!((-&a).div_rem(&b), Ok((-&q, -&r)));
    assert_eq!(a.div_rem(&-&b), Ok((-&q, r.clone())));
    assert_eq!(&(&q * &b) + &r, a);

    let a = big("1461501636990620551282746369252908412228459298817");
    let b = big("340282366841710300958333641872931553280");
    assert_eq!(&a / &b, big("4294967295"));
    assert_eq!(&a % &b, big("340282366802096219710424845117309321217"));

    let a = big("730750818495310275641373184626454206116377133057");
    let b = big("39614081257132168801066942463");
    assert_eq!(&a / &b, big("18446744069414584318"));
    assert_eq!(&a % &b, big("36893488156009037823"));
}

#[test]
fn test_mod() {
    let a = big("12");
    let b = big("8");
    assert_eq!(a % b, big("4"));

    let a = big("10000000000000000");
    let b = big("10");
    assert_eq!(a % b, BigInt::zero());

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(a % b, r);

    assert_eq!(big("-7") % big("2"), BigInt::from(-1));
    assert_eq!(big("7") % big("-2"), BigInt::from(1));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(big("5").checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(big("5").checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    let result = std::panic::catch_unwind(|| big("5") / big("0"));
    assert!(result.is_err());
}

#[test]
fn test_bit_ops() {
    assert_eq!((big("-1") & big("0")).to_string(), "0");
    assert_eq!(big("-1") | big("0"), BigInt::from(-1));
    assert_eq!(big("-1") ^ big("4294967296"), big("-4294967297"));
    assert_eq!(big("12") & big("10"), BigInt::from(8));
    assert_eq!(big("12") | big("10"), BigInt::from(14));
    assert_eq!(big("12") ^ big("10"), BigInt::from(6));
    assert_eq!(big("-4294967296") & big("4294967295"), BigInt::zero());
    assert_eq!(big("-2147483648") ^ big("-1"), BigInt::from(i32::MAX));
    let mut a = big("255");
    a &= big("-16");
    assert_eq!(a, BigInt::from(240));
}

#[test]
fn test_shift() {
    assert_eq!((big("1") << 35).to_string(), "34359738368");
    assert_eq!(big("1") << 31, big("2147483648"));
    assert_eq!(big("-1") << 32, big("-4294967296"));
    assert_eq!(big("-3") << 33, big("-25769803776"));
    assert_eq!(big("34359738368") >> 35, BigInt::from(1));
    assert_eq!(big("-5") >> 1, BigInt::from(-3));
    assert_eq!(big("-4294967296") >> 32, BigInt::from(-1));
    assert_eq!(big("-1") >> 40, BigInt::zero());
    assert_eq!(big("123") >> -4, big("1968"));
    assert_eq!(big("1968") << -4, big("123"));
    assert_eq!(big("7") >> 64, BigInt::zero());
    let mut a = big("-123456789123456789");
    a <<= 77;
    a >>= 77;
    assert_eq!(a, big("-123456789123456789"));
}

#[test]
fn test_clone_is_independent() {
    let a = big("-123456789012345678901234567890123456789012345678901234567890");
    let mut b = a.clone();
    assert!(a.limbs.is_shared());
    b.increment();
    assert_eq!(a, big("-123456789012345678901234567890123456789012345678901234567890"));
    assert_eq!(b, big("-123456789012345678901234567890123456789012345678901234567889"));
    let mut c = a.clone();
    c <<= 3;
    assert_ne!(a, c);
    assert_eq!(a.to_string(), "-123456789012345678901234567890123456789012345678901234567890");
}

#[test]
fn test_abs_and_swap() {
    let mut a = big("-98765432109876543210");
    let mut b = BigInt::from(5);
    assert_eq!(a.abs(), big("98765432109876543210"));
    assert_eq!(BigInt::from(i32::MIN).abs(), big("2147483648"));
    a.swap(&mut b);
    assert_eq!(a, BigInt::from(5));
    assert_eq!(b, big("-98765432109876543210"));
}
