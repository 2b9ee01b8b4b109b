use std::str::FromStr;

use crate::error::Error;
use crate::{coerce, BitString};

/// Strict parsing: unlike [`BitString::new`], malformed text is an error
/// naming the first offending symbol instead of the invalid sentinel.
///
/// ```
/// use rust_binstring::{BitString, Error};
///
/// let bits: BitString = "0b1001".parse().unwrap();
/// assert_eq!(bits, "1001");
///
/// let err = "10.1".parse::<BitString>().unwrap_err();
/// assert_eq!(err, Error::InvalidSymbol { symbol: '.', position: 2 });
/// ```
impl FromStr for BitString {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        coerce(text)
    }
}

/// Creates a [`BitString`](crate::BitString).
///
/// - `bit_string!()` is the empty string.
/// - `bit_string!("0b1011")` parses a literal, panicking on a symbol other
///   than `0` or `1`.
/// - `bit_string![bit; len]` repeats a [`BitValue`](crate::BitValue).
///
/// ```
/// use rust_binstring::{bit_string, BitValue};
///
/// assert_eq!(bit_string!("0b101"), "101");
/// assert_eq!(bit_string![BitValue::One; 3], "111");
/// assert!(bit_string!().is_empty());
/// ```
#[macro_export]
macro_rules! bit_string {
    () => {
        $crate::BitString::empty()
    };
    ($literal:literal) => {
        match <$crate::BitString as ::std::str::FromStr>::from_str($literal) {
            ::std::result::Result::Ok(bits) => bits,
            ::std::result::Result::Err(err) => {
                ::std::panic!("invalid bit string literal {:?}: {}", $literal, err)
            }
        }
    };
    ($bit:expr; $len:expr) => {
        $crate::BitString::repeat($bit, $len)
    };
}
