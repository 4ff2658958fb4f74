use thiserror::Error;

/// Failures reported by [`BigInt`](crate::BigInt) and its limb store.
///
/// None of these are transient: retrying the same call fails the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The text is not an optional `-` followed by at least one ASCII digit.
    #[error("invalid decimal integer literal")]
    InvalidFormat,

    /// The divisor of `/` or `%` is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Limb storage could not be allocated.
    #[error("not enough memory to hold the integer")]
    ResourceExhausted,
}

impl From<std::collections::TryReserveError> for BigIntError {
    fn from(_: std::collections::TryReserveError) -> Self {
        BigIntError::ResourceExhausted
    }
}
