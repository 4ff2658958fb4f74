//! Decimal text to and from [`BigInt`].
//!
//! Both directions work nine digits at a time: the parser folds each chunk
//! into the magnitude with one multiply-add, and the formatter peels chunks
//! off with one division by `10^9`.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::big_int_repr::*;
use crate::big_num_cache::DECIMAL_POWERS;
use crate::big_num_constants::*;
use crate::big_num_error::BigIntError;
use crate::limb_storage::LimbStorage;

// 实现解析
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses an optional `-` followed by one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest.as_bytes()),
            None => (false, s.as_bytes()),
        };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(BigIntError::InvalidFormat);
        }

        let mut magnitude = LimbStorage::from_elem(1, 0);
        // each chunk is below 2^32, plus room for the sign limb
        magnitude.try_reserve(digits.len() / DECIMAL_CHUNK_DIGITS + 1)?;

        let mut group_len = match digits.len() % DECIMAL_CHUNK_DIGITS {
            0 => DECIMAL_CHUNK_DIGITS,
            n => n,
        };
        let mut rest = digits;
        while !rest.is_empty() {
            let (group, tail) = rest.split_at(group_len);
            let group_val = group
                .iter()
                .fold(0 as Limb, |acc, &d| acc * 10 + (d - b'0') as Limb);
            mul_add_limb(&mut magnitude, DECIMAL_POWERS[group.len()], group_val);
            rest = tail;
            group_len = DECIMAL_CHUNK_DIGITS;
        }

        to_twos_complement(&mut magnitude, negative);
        Ok(BigInt::from_limbs(magnitude))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

// 实现打印
impl BigInt {
    /// Decimal digits of `|self|`, most significant first, without sign.
    fn magnitude_to_decimal(&self) -> String {
        let mut magnitude = self.clone().into_limbs();
        to_sign_magnitude(&mut magnitude);

        // least significant digit first
        let mut digits: Vec<u8> = Vec::with_capacity(magnitude.len() * 10);
        loop {
            let mut group = div_limb(&mut magnitude, DECIMAL_CHUNK);
            let last = is_zero(&magnitude);
            for _ in 0..DECIMAL_CHUNK_DIGITS {
                digits.push(b'0' + (group % 10) as u8);
                group /= 10;
                if last && group == 0 {
                    break;
                }
            }
            if last {
                break;
            }
        }
        digits.iter().rev().map(|&d| d as char).collect()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_print() {
        for s in [
            "0",
            "1",
            "-1",
            "2147483647",
            "-2147483648",
            "4294967296",
            "1000000000",
            "-999999999",
            "123456789123456789",
            "-100000000000000000000000000000000000000000000001",
        ] {
            let x: BigInt = s.parse().unwrap();
            assert_eq!(x.to_string(), s);
        }
    }

    #[test]
    fn parse_is_canonical() {
        let a: BigInt = "-0".parse().unwrap();
        assert_eq!(a, BigInt::from(0));
        assert_eq!(a.to_string(), "0");
        let b: BigInt = "000000000000000000000042".parse().unwrap();
        assert_eq!(b, BigInt::from(42));
        assert_eq!(b.limb_count(), 1);
        let c: BigInt = "2147483648".parse().unwrap();
        assert_eq!(c.limbs(), &[0x8000_0000, 0]);
        let d: BigInt = "-2147483648".parse().unwrap();
        assert_eq!(d.limbs(), &[0x8000_0000]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for s in ["", "-", "+1", "12a", " 1", "1 ", "--1", "1-", "١٢"] {
            assert_eq!(s.parse::<BigInt>(), Err(BigIntError::InvalidFormat), "{:?}", s);
        }
        assert_eq!(BigInt::try_from("x"), Err(BigIntError::InvalidFormat));
        assert_eq!(BigInt::try_from("-17"), Ok(BigInt::from(-17)));
    }

    #[test]
    fn formatter_flags() {
        let x = BigInt::from(-42);
        assert_eq!(format!("{:>6}", x), "   -42");
        assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
        assert_eq!(format!("{:05}", x), "-0042");
        assert_eq!(format!("{:?}", x), "BigInt(-42)");
    }
}
