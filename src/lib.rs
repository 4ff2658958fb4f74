//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers in two's-complement notation, with
//!   arithmetic, bitwise, shift and comparison operators and decimal conversion.
//! - [`LimbStorage`]: The limb array behind it. Small values are kept inline, large values
//!   are shared between clones until one of them is written to.
//!
//! Clones share heap buffers through a non-atomic reference count, so neither type can
//! cross threads:
//! ```compile_fail
//! use big_integer::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
//! let b = a.clone();
//! std::thread::spawn(move || println!("{}", b));
//! ```

mod big_int;
mod big_int_decimal;
mod big_int_repr;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;
mod limb_storage;

pub use big_int::BigInt;
pub use big_num_constants::{Limb, INLINE_CAPACITY};
pub use big_num_error::BigIntError;
pub use limb_storage::LimbStorage;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
