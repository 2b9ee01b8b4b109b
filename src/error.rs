use thiserror::Error;

/// Failures surfaced by [`BitString`](crate::BitString) operations.
///
/// Malformed construction input is not one of them: it yields the invalid
/// sentinel instead. These are the cases where a caller asked for something
/// that cannot be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operand, or the receiver itself, is the invalid sentinel.
    #[error("invalid bit string")]
    Invalid,

    /// An index, range start or rotation amount falls outside the string.
    #[error("index {index} out of range for bit string of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A slice was asked to advance by zero bits.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// Strict parsing met a symbol other than `0` or `1`.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::Invalid.to_string(), "invalid bit string");
        assert_eq!(
            Error::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 out of range for bit string of length 3"
        );
        assert_eq!(Error::ZeroStep.to_string(), "slice step cannot be zero");
        assert_eq!(
            Error::InvalidSymbol {
                symbol: '2',
                position: 4
            }
            .to_string(),
            "invalid symbol '2' at position 4"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::ZeroStep);
        assert_eq!(err.to_string(), "slice step cannot be zero");
    }
}
