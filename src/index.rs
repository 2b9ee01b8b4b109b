use std::ops::{Bound, RangeBounds};

use tracing::trace;

use crate::error::{Error, Result};
use crate::{BitString, BitValue};

impl BitString {
    /// Returns the value of a bit.
    ///
    /// Negative indexes count from the end: `-1` is the last bit.
    ///
    /// ```
    /// use rust_binstring::{BitString, BitValue, Error};
    ///
    /// let bits = BitString::new("100");
    /// assert_eq!(bits.get_bit(0), Ok(BitValue::One));
    /// assert_eq!(bits.get_bit(-1), Ok(BitValue::Zero));
    /// assert_eq!(bits.get_bit(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get_bit(&self, index: isize) -> Result<BitValue> {
        let bits = self.as_bits().ok_or(Error::Invalid)?;
        let position =
            normalize(index, bits.len()).ok_or_else(|| out_of_range(index, bits.len()))?;
        Ok(bits[position])
    }

    /// Returns a single bit as a new one-bit string.
    pub fn get(&self, index: isize) -> Result<BitString> {
        self.get_bit(index).map(BitString::from)
    }

    /// Copies the bits selected by `start`, `stop` and `step` into a new bit
    /// string, with the usual slice rules for negative and missing bounds.
    ///
    /// An explicit `start` at or past the end is [`Error::IndexOutOfRange`].
    /// Stops past either end are truncated, and a `step` of zero is
    /// [`Error::ZeroStep`].
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// let bits = BitString::new("110100");
    /// assert_eq!(bits.slice(Some(1), Some(4), None).unwrap(), "101");
    /// assert_eq!(bits.slice(None, None, Some(2)).unwrap(), "100");
    /// assert_eq!(bits.slice(None, None, Some(-1)).unwrap(), "001011");
    /// assert_eq!(bits.slice(Some(-2), None, None).unwrap(), "00");
    /// assert!(bits.slice(Some(6), None, None).is_err());
    /// ```
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<BitString> {
        let bits = self.as_bits().ok_or(Error::Invalid)?;
        let len = bits.len();

        if let Some(start) = start {
            if normalize(start, len).is_none() && start >= 0 {
                return Err(out_of_range(start, len));
            }
        }

        let selection = Selection::adjust(start, stop, step, len)?;
        Ok(selection.positions().map(|position| bits[position]).collect())
    }

    /// Copies a contiguous range of bits into a new bit string.
    ///
    /// Bounds may be negative, counting from the end. `..=-1` reaches the
    /// last bit.
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// let bits = BitString::new("110100");
    /// assert_eq!(bits.get_range(2..).unwrap(), "0100");
    /// assert_eq!(bits.get_range(-3..=-1).unwrap(), "100");
    /// assert_eq!(bits.get_range(..2).unwrap(), "11");
    /// ```
    pub fn get_range<R: RangeBounds<isize>>(&self, range: R) -> Result<BitString> {
        let len = self.as_bits().ok_or(Error::Invalid)?.len() as isize;

        // Negative bounds are resolved before stepping past them, so the
        // bounds handed to `slice` below are already absolute.
        let start = match range.start_bound() {
            Bound::Included(start) => Some(*start),
            Bound::Excluded(start) => {
                let resolved = if *start < 0 { *start + len } else { *start };
                match resolved.checked_add(1) {
                    Some(after) if after < len => Some(after.max(0)),
                    _ => return Ok(BitString::empty()),
                }
            }
            Bound::Unbounded => None,
        };

        let stop = match range.end_bound() {
            Bound::Included(end) if *end < 0 => Some((*end + len + 1).max(0)),
            Bound::Included(end) => end.checked_add(1),
            Bound::Excluded(end) => Some(*end),
            Bound::Unbounded => None,
        };

        self.slice(start, stop, None)
    }
}

/// Resolves a possibly negative index into a position inside `0..len`.
#[inline]
pub(crate) fn normalize(index: isize, len: usize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };

    (position < len).then_some(position)
}

#[inline]
fn out_of_range(index: isize, len: usize) -> Error {
    trace!(index, len, "bit string index out of range");
    Error::IndexOutOfRange { index, len }
}

// Start, step and count of a slice, after clamping its bounds to the string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Selection {
    start: isize,
    step: isize,
    count: usize,
}

impl Selection {
    fn adjust(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
        len: usize,
    ) -> Result<Self> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let len = len as isize;
        let backwards = step < 0;

        let clamp = |bound: isize| {
            if bound < 0 {
                let bound = bound + len;
                if bound < 0 {
                    if backwards {
                        -1
                    } else {
                        0
                    }
                } else {
                    bound
                }
            } else if bound >= len {
                if backwards {
                    len - 1
                } else {
                    len
                }
            } else {
                bound
            }
        };

        let start = match start {
            Some(start) => clamp(start),
            None if backwards => len - 1,
            None => 0,
        };
        let stop = match stop {
            Some(stop) => clamp(stop),
            None if backwards => -1,
            None => len,
        };

        let distance = if backwards { start - stop } else { stop - start };
        let count = if distance > 0 {
            (distance - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        };

        Ok(Selection { start, step, count })
    }

    fn positions(self) -> impl Iterator<Item = usize> {
        (0..self.count).map(move |i| (self.start + i as isize * self.step) as usize)
    }
}
