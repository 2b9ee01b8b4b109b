use linear_deque::LinearDeque;

use crate::bitstring::collect_bits;
use crate::error::{Error, Result};
use crate::{BitString, BitValue};

const MARKER: &str = "0b";

/// Anything that can be coerced into the bits of a [`BitString`].
///
/// Every operation taking a bit-string-like operand goes through
/// [`coerce_bits`](BitSource::coerce_bits) exactly once at its entry point.
pub trait BitSource {
    /// Validates the source and returns its bits, most significant first.
    ///
    /// Textual sources (and sequences of `char`) have a leading `0b` marker
    /// stripped when digits follow it. A source that is itself the invalid
    /// sentinel fails with [`Error::Invalid`].
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>>;
}

macro_rules! forward_methods_as_text {
    () => {
        #[inline]
        fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
            let text: String = self.iter().collect();
            coerce_text(&text)
        }
    };
}

macro_rules! forward_methods_as_bit_values {
    () => {
        #[inline]
        fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
            Ok(collect_bits(self.iter().copied()))
        }
    };
}

impl BitSource for str {
    #[inline]
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
        coerce_text(self)
    }
}

impl BitSource for String {
    #[inline]
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
        coerce_text(self)
    }
}

impl BitSource for [char] {
    forward_methods_as_text!();
}

impl<const N: usize> BitSource for [char; N] {
    forward_methods_as_text!();
}

impl BitSource for Vec<char> {
    forward_methods_as_text!();
}

impl BitSource for [BitValue] {
    forward_methods_as_bit_values!();
}

impl<const N: usize> BitSource for [BitValue; N] {
    forward_methods_as_bit_values!();
}

impl BitSource for Vec<BitValue> {
    forward_methods_as_bit_values!();
}

impl BitSource for BitValue {
    #[inline]
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
        Ok(collect_bits([*self]))
    }
}

impl BitSource for BitString {
    #[inline]
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
        self.as_bits()
            .map(|bits| collect_bits(bits.iter().copied()))
            .ok_or(Error::Invalid)
    }
}

impl<T: BitSource + ?Sized> BitSource for &T {
    #[inline]
    fn coerce_bits(&self) -> Result<LinearDeque<BitValue>> {
        (**self).coerce_bits()
    }
}

/// Coerces any source into a valid [`BitString`], or reports why it is not one.
///
/// This is the strict counterpart of [`BitString::new`], which absorbs the
/// failure into the invalid sentinel.
///
/// # Example
///
/// ```
/// use rust_binstring::{coerce, Error};
///
/// assert_eq!(coerce("0b101").unwrap(), "101");
/// assert_eq!(
///     coerce("102"),
///     Err(Error::InvalidSymbol { symbol: '2', position: 2 })
/// );
/// ```
#[inline]
pub fn coerce<S: BitSource>(source: S) -> Result<BitString> {
    source.coerce_bits().map(BitString::from_deque)
}

/// Checks whether a source is made only of `0` and `1` symbols, after an
/// optional `0b` marker.
///
/// The invalid sentinel is not a binary string.
#[inline]
pub fn is_binary_string<S: BitSource>(source: S) -> bool {
    source.coerce_bits().is_ok()
}

fn coerce_text(text: &str) -> Result<LinearDeque<BitValue>> {
    let (skipped, digits) = match text.strip_prefix(MARKER) {
        Some(digits) if !digits.is_empty() => (MARKER.len(), digits),
        _ => (0, text),
    };

    let mut bits = LinearDeque::new();
    for (position, symbol) in digits.chars().enumerate() {
        let bit = BitValue::try_from(symbol).map_err(|symbol| Error::InvalidSymbol {
            symbol,
            position: position + skipped,
        })?;
        bits.push_back(bit);
    }

    Ok(bits)
}
