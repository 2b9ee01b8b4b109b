use std::iter::Copied;
use std::slice;

use linear_deque::{LinearDeque, SetReservedSpace};
use tracing::debug;

use crate::error::{Error, Result};
use crate::{BitSource, BitValue, BitsPrimitive};

/// An owned, growable sequence of bits, most significant bit first.
///
/// A `BitString` is either a valid sequence of [`BitValue`]s (possibly empty)
/// or the *invalid* sentinel, which is what construction yields for input that
/// is not a binary string. The sentinel propagates through the pure operators
/// (`^`, `!`, [`set_size`], [`concat`], ...) and makes the fallible ones
/// ([`append`], [`get`], ...) return [`Error::Invalid`].
///
/// Only [`append`] and `^=` modify a value in place. Every other operation
/// returns a new, independently owned `BitString`.
///
/// # Example
///
/// ```
/// use rust_binstring::BitString;
///
/// let word = BitString::new("0b1011");
/// assert!(word.is_valid());
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.to_string(), "1011");
///
/// let garbage = BitString::new("10x1");
/// assert!(!garbage.is_valid());
/// assert!(!(garbage ^ &word).is_valid());
/// ```
///
/// [`set_size`]: BitString::set_size
/// [`concat`]: BitString::concat
/// [`append`]: BitString::append
/// [`get`]: BitString::get
#[derive(Clone)]
pub struct BitString {
    bits: Option<LinearDeque<BitValue>>,
}

impl BitString {
    /// Builds a bit string from any [`BitSource`].
    ///
    /// This never fails: input that is not a binary string produces the
    /// invalid sentinel.
    #[inline]
    pub fn new<S: BitSource>(source: S) -> Self {
        match source.coerce_bits() {
            Ok(bits) => Self::from_deque(bits),
            Err(err) => {
                debug!(%err, "rejected bit string input");
                Self::invalid()
            }
        }
    }

    /// The invalid sentinel.
    #[inline]
    pub fn invalid() -> Self {
        BitString { bits: None }
    }

    /// A valid bit string with no bits.
    #[inline]
    pub fn empty() -> Self {
        Self::from_deque(LinearDeque::new())
    }

    /// A bit string of `len` copies of `bit`.
    pub fn repeat(bit: BitValue, len: usize) -> Self {
        let mut bits = LinearDeque::new();
        bits.resize(len, bit);
        Self::from_deque(bits)
    }

    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self::repeat(BitValue::Zero, len)
    }

    /// The full bit pattern of `value`, most significant bit first.
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// assert_eq!(BitString::from_primitive(0b0110_0001u8), "01100001");
    /// assert_eq!(BitString::from_primitive(1u16).len(), 16);
    /// ```
    pub fn from_primitive<P: BitsPrimitive>(value: P) -> Self {
        (0..P::BIT_COUNT)
            .rev()
            .map(|shift| BitValue::from((value >> shift) & P::ONE != P::ZERO))
            .collect()
    }

    /// Reads the bits back as an unsigned integer.
    ///
    /// Strings shorter than `P::BIT_COUNT` are zero-extended. `None` is
    /// returned for the invalid sentinel and for strings too wide for `P`.
    pub fn to_primitive<P: BitsPrimitive>(&self) -> Option<P> {
        let bits = self.as_bits()?;
        (bits.len() <= P::BIT_COUNT).then(|| {
            bits.iter().fold(P::ZERO, |value, bit| {
                let value = value << 1;
                match bit {
                    BitValue::Zero => value,
                    BitValue::One => value | P::ONE,
                }
            })
        })
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bits.is_some()
    }

    /// Returns the number of bits. The invalid sentinel has no bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bits().map_or(0, <[BitValue]>::len)
    }

    /// Returns the same as `self.len() == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored bits, or `None` for the invalid sentinel.
    #[inline]
    pub fn as_bits(&self) -> Option<&[BitValue]> {
        self.bits.as_deref()
    }

    /// Iterates over the bits, most significant first. Yields nothing for
    /// the invalid sentinel.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, BitValue>> {
        self.as_bits().unwrap_or_default().iter().copied()
    }

    /// Extends this bit string in place with the bits of `other`.
    ///
    /// When either side is invalid nothing is modified and
    /// [`Error::Invalid`] is returned.
    ///
    /// ```
    /// use rust_binstring::{BitString, Error};
    ///
    /// let mut acc = BitString::new("10");
    /// acc.append("0b01").unwrap();
    /// assert_eq!(acc, "1001");
    ///
    /// assert_eq!(acc.append("2"), Err(Error::Invalid));
    /// assert_eq!(acc, "1001");
    /// ```
    pub fn append<S: BitSource>(&mut self, other: S) -> Result<()> {
        let Some(bits) = self.bits.as_mut() else {
            debug!("refused to append to an invalid bit string");
            return Err(Error::Invalid);
        };

        let other = other.coerce_bits().map_err(|err| {
            debug!(%err, "refused to append an invalid operand");
            Error::Invalid
        })?;

        bits.set_reserved_space(
            SetReservedSpace::Keep,
            SetReservedSpace::GrowTo(other.len()),
        );
        for bit in other.iter().copied() {
            bits.push_back(bit);
        }

        Ok(())
    }

    /// Returns `self` followed by `other`, leaving both untouched.
    ///
    /// Invalid in, invalid out.
    pub fn concat<S: BitSource>(&self, other: S) -> Self {
        let mut result = self.clone();
        match result.append(other) {
            Ok(()) => result,
            Err(_) => Self::invalid(),
        }
    }

    #[inline]
    pub(crate) fn from_deque(bits: LinearDeque<BitValue>) -> Self {
        BitString { bits: Some(bits) }
    }
}

pub(crate) fn collect_bits<I: IntoIterator<Item = BitValue>>(iter: I) -> LinearDeque<BitValue> {
    let iter = iter.into_iter();

    let mut bits = LinearDeque::new();
    bits.set_reserved_space(
        SetReservedSpace::Keep,
        SetReservedSpace::GrowTo(iter.size_hint().0),
    );
    for bit in iter {
        bits.push_back(bit);
    }

    bits
}

impl Default for BitString {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<BitValue> for BitString {
    #[inline]
    fn from_iter<I: IntoIterator<Item = BitValue>>(iter: I) -> Self {
        Self::from_deque(collect_bits(iter))
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = BitValue;
    type IntoIter = Copied<slice::Iter<'a, BitValue>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for BitString {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for BitString {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&[char]> for BitString {
    #[inline]
    fn from(symbols: &[char]) -> Self {
        Self::new(symbols)
    }
}

impl From<&[BitValue]> for BitString {
    #[inline]
    fn from(values: &[BitValue]) -> Self {
        Self::new(values)
    }
}

impl From<Vec<BitValue>> for BitString {
    #[inline]
    fn from(values: Vec<BitValue>) -> Self {
        Self::from_iter(values)
    }
}

impl From<BitValue> for BitString {
    #[inline]
    fn from(value: BitValue) -> Self {
        Self::new(value)
    }
}

/// Two bit strings are equal when both are valid and hold the same bits.
///
/// Widths are not reconciled: `"01" != "1"`. The invalid sentinel is equal to
/// nothing, not even itself, so there is no `Eq` implementation.
impl PartialEq for BitString {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.as_bits(), other.as_bits()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl PartialEq<str> for BitString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        *self == BitString::new(other)
    }
}

impl PartialEq<&str> for BitString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == BitString::new(*other)
    }
}

impl PartialEq<[BitValue]> for BitString {
    #[inline]
    fn eq(&self, other: &[BitValue]) -> bool {
        self.as_bits() == Some(other)
    }
}

impl<const N: usize> PartialEq<[BitValue; N]> for BitString {
    #[inline]
    fn eq(&self, other: &[BitValue; N]) -> bool {
        PartialEq::<[BitValue]>::eq(self, other)
    }
}
