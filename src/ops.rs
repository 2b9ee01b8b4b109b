use std::iter;
use std::ops::{Add, BitXor, BitXorAssign, Not};

use linear_deque::SetReservedSpace;
use tracing::trace;

use crate::bitstring::collect_bits;
use crate::error::{Error, Result};
use crate::{BitSource, BitString, BitValue};

impl BitString {
    /// Returns exactly `size` bits of this string.
    ///
    /// A wider size zero-extends on the most significant side. A narrower one
    /// keeps the trailing (least significant) bits.
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// assert_eq!(BitString::new("101").set_size(5), "00101");
    /// assert_eq!(BitString::new("10110").set_size(3), "110");
    /// ```
    pub fn set_size(&self, size: usize) -> BitString {
        match self.as_bits() {
            Some(bits) => {
                let kept = size.min(bits.len());
                let padding = size - kept;

                let mut extended = collect_bits(bits[bits.len() - kept..].iter().copied());
                extended.set_reserved_space(
                    SetReservedSpace::GrowTo(padding),
                    SetReservedSpace::Keep,
                );
                for _ in 0..padding {
                    extended.push_front(BitValue::Zero);
                }

                BitString::from_deque(extended)
            }
            None => BitString::invalid(),
        }
    }

    /// Bitwise exclusive or.
    ///
    /// The shorter operand is zero-extended to the width of the longer one
    /// first, so `"11" ^ "1"` is `"10"`.
    pub fn xor<S: BitSource>(&self, other: S) -> BitString {
        let (Some(lhs), Ok(rhs)) = (self.as_bits(), other.coerce_bits()) else {
            return BitString::invalid();
        };

        let size = lhs.len().max(rhs.len());
        resized(lhs, size)
            .zip(resized(&rhs, size))
            .map(|(lhs, rhs)| lhs ^ rhs)
            .collect()
    }

    /// Flips every bit.
    pub fn bitwise_not(&self) -> BitString {
        match self.as_bits() {
            Some(bits) => bits.iter().map(|bit| !*bit).collect(),
            None => BitString::invalid(),
        }
    }

    /// Circularly rotates the bits `count` positions to the right: the last
    /// `count` bits move to the front.
    ///
    /// Rotating by `0` or by `len()` is the identity. A `count` beyond `len()`
    /// is [`Error::IndexOutOfRange`]. The invalid sentinel rotates to itself.
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// let bits = BitString::new("11000");
    /// assert_eq!(bits.rotate_right(2).unwrap(), "00110");
    /// assert!(bits.rotate_right(6).is_err());
    /// ```
    pub fn rotate_right(&self, count: usize) -> Result<BitString> {
        let Some(bits) = self.as_bits() else {
            return Ok(BitString::invalid());
        };
        check_rotation(count, bits.len())?;

        let (head, tail) = bits.split_at(bits.len() - count);
        Ok(tail.iter().chain(head).copied().collect())
    }

    /// Circularly rotates the bits `count` positions to the left, undoing
    /// [`rotate_right`](BitString::rotate_right) by the same amount.
    pub fn rotate_left(&self, count: usize) -> Result<BitString> {
        let Some(bits) = self.as_bits() else {
            return Ok(BitString::invalid());
        };
        check_rotation(count, bits.len())?;

        let (head, tail) = bits.split_at(count);
        Ok(tail.iter().chain(head).copied().collect())
    }

    /// XOR of every bit, starting from `0`: a one-bit parity.
    ///
    /// ```
    /// use rust_binstring::BitString;
    ///
    /// assert_eq!(BitString::new("1011").xor_reduce(), "1");
    /// assert_eq!(BitString::new("").xor_reduce(), "0");
    /// ```
    pub fn xor_reduce(&self) -> BitString {
        match self.as_bits() {
            Some(bits) => {
                let parity = bits.iter().fold(BitValue::Zero, |acc, bit| acc ^ *bit);
                BitString::from(parity)
            }
            None => BitString::invalid(),
        }
    }

    /// Whether the bits, read as an unsigned number, are non-zero.
    ///
    /// Empty and all-zero strings are falsy, and so is the invalid sentinel.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.iter().any(BitValue::to_bool)
    }

    #[inline]
    pub fn count_ones(&self) -> usize {
        self.iter().filter(|bit| bit.to_bool()).count()
    }
}

/// Folds XOR over the bits of any source.
///
/// Sources that are not binary strings give the invalid sentinel.
#[inline]
pub fn xor_reduce<S: BitSource>(source: S) -> BitString {
    BitString::new(source).xor_reduce()
}

// The trailing `size` bits, zero-extended at the front when `bits` is shorter.
fn resized(bits: &[BitValue], size: usize) -> impl Iterator<Item = BitValue> + '_ {
    let padding = size.saturating_sub(bits.len());
    let kept = &bits[bits.len() - (size - padding)..];
    iter::repeat(BitValue::Zero)
        .take(padding)
        .chain(kept.iter().copied())
}

fn check_rotation(count: usize, len: usize) -> Result<()> {
    if count > len {
        trace!(count, len, "rotation past the bit string length");
        return Err(Error::IndexOutOfRange {
            index: isize::try_from(count).unwrap_or(isize::MAX),
            len,
        });
    }
    Ok(())
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<S: BitSource> $trait<S> for &BitString {
            type Output = BitString;

            #[inline]
            fn $method(self, rhs: S) -> Self::Output {
                self.$op(rhs)
            }
        }

        impl<S: BitSource> $trait<S> for BitString {
            type Output = BitString;

            #[inline]
            fn $method(self, rhs: S) -> Self::Output {
                self.$op(rhs)
            }
        }
    };
}

impl_binary_op!(BitXor, bitxor, xor);
impl_binary_op!(Add, add, concat);

/// XOR accumulation in place. An invalid operand makes `self` invalid.
impl<S: BitSource> BitXorAssign<S> for BitString {
    #[inline]
    fn bitxor_assign(&mut self, rhs: S) {
        *self = self.xor(rhs);
    }
}

impl Not for &BitString {
    type Output = BitString;

    #[inline]
    fn not(self) -> Self::Output {
        self.bitwise_not()
    }
}

impl Not for BitString {
    type Output = BitString;

    #[inline]
    fn not(self) -> Self::Output {
        self.bitwise_not()
    }
}

#[cfg(test)]
mod tests {
    use crate::{xor_reduce, BitString, BitValue, Error};

    #[test]
    fn set_size() {
        let bits = BitString::new("101");

        assert_eq!(bits.set_size(5), "00101");
        assert_eq!(bits.set_size(3), "101");
        assert_eq!(bits.set_size(2), "01");
        assert_eq!(bits.set_size(0), "");
        assert_eq!(BitString::new("10110").set_size(3), "110");
        assert_eq!(BitString::empty().set_size(2), "00");
        assert!(!BitString::invalid().set_size(2).is_valid());
    }

    #[test]
    fn set_size_extends_at_the_front() {
        let bits = BitString::new("1");

        let wide = bits.set_size(64);
        assert_eq!(wide.len(), 64);
        assert_eq!(wide.get_bit(-1), Ok(BitValue::One));
        assert_eq!(wide.count_ones(), 1);
        assert_eq!(wide.set_size(1), bits);
        assert_eq!(bits, "1");

        let wider = wide.set_size(65);
        assert_eq!(wider.get_range(..2).unwrap(), "00");
        assert_eq!(wider.get_range(1..).unwrap(), wide);
    }

    #[test]
    fn xor() {
        let lhs = BitString::new("1100");
        let rhs = BitString::new("1010");

        assert_eq!(lhs.xor(&rhs), "0110");
        assert_eq!(&lhs ^ &rhs, "0110");
        assert_eq!(lhs ^ rhs, "0110");
    }

    #[test]
    fn xor_pads_shorter_operand() {
        assert_eq!(BitString::new("11") ^ "1", "10");
        assert_eq!(BitString::new("1") ^ "11", "10");
        assert_eq!(BitString::new("0b1000") ^ "0b11", "1011");
        assert_eq!(BitString::new("") ^ "101", "101");
        assert_eq!(BitString::new("") ^ "", "");
    }

    #[test]
    fn xor_invalid() {
        assert!(!(BitString::new("11") ^ "12").is_valid());
        assert!(!(BitString::invalid() ^ "1").is_valid());
        assert!(!(BitString::new("1") ^ BitString::invalid()).is_valid());
    }

    #[test]
    fn xor_assign() {
        let mut acc = BitString::zeros(4);

        acc ^= "0011";
        acc ^= BitString::new("0110");
        acc ^= "1";
        assert_eq!(acc, "0100");

        acc ^= "x";
        assert!(!acc.is_valid());
        acc ^= "1";
        assert!(!acc.is_valid());
    }

    #[test]
    fn not() {
        let bits = BitString::new("10010");

        assert_eq!(!&bits, "01101");
        assert_eq!(bits.bitwise_not(), "01101");
        assert_eq!(!!bits.clone(), bits);
        assert_eq!(!BitString::empty(), "");
        assert!(!(!BitString::invalid()).is_valid());
    }

    #[test]
    fn rotate_right() {
        let bits = BitString::new("10110");

        assert_eq!(bits.rotate_right(0).unwrap(), "10110");
        assert_eq!(bits.rotate_right(1).unwrap(), "01011");
        assert_eq!(bits.rotate_right(3).unwrap(), "11010");
        assert_eq!(bits.rotate_right(5).unwrap(), "10110");
        assert_eq!(
            bits.rotate_right(6),
            Err(Error::IndexOutOfRange { index: 6, len: 5 })
        );
        assert_eq!(BitString::empty().rotate_right(0).unwrap(), "");
        assert!(!BitString::invalid().rotate_right(3).unwrap().is_valid());
    }

    #[test]
    fn rotate_left() {
        let bits = BitString::new("10110");

        assert_eq!(bits.rotate_left(1).unwrap(), "01101");
        assert_eq!(bits.rotate_left(5).unwrap(), "10110");
        assert_eq!(bits.rotate_left(2).unwrap().rotate_right(2).unwrap(), bits);
        assert!(bits.rotate_left(9).is_err());
    }

    #[test]
    fn xor_reduce_parity() {
        assert_eq!(BitString::new("0").xor_reduce(), "0");
        assert_eq!(BitString::new("1").xor_reduce(), "1");
        assert_eq!(BitString::new("11").xor_reduce(), "0");
        assert_eq!(BitString::new("10101").xor_reduce(), "1");
        assert_eq!(xor_reduce("0b111"), "1");
        assert_eq!(xor_reduce([BitValue::One, BitValue::One]), "0");
        assert!(!xor_reduce("21").is_valid());
        assert!(!BitString::invalid().xor_reduce().is_valid());
    }

    #[test]
    fn truthiness() {
        assert!(!BitString::new("0000").is_truthy());
        assert!(BitString::new("0001").is_truthy());
        assert!(!BitString::new("").is_truthy());
        assert!(!BitString::invalid().is_truthy());
        assert_eq!(BitString::new("10110").count_ones(), 3);
        assert_eq!(BitString::invalid().count_ones(), 0);
    }

    #[test]
    fn add() {
        let msb = BitString::new("10");

        assert_eq!(&msb + "01", "1001");
        assert_eq!(msb.clone() + BitString::new("1"), "101");
        assert!(!(msb + "0b").is_valid());
    }
}
