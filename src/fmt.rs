use std::fmt::{Binary, Debug, Display, Formatter, LowerHex, Result, UpperHex, Write};

use crate::{BitString, BitValue};

const INVALID: &str = "<invalid>";

impl BitString {
    fn fmt_hex(&self, f: &mut Formatter<'_>, upper: bool) -> Result {
        const BITS_PER_HEX_DIGIT: usize = 4;

        let Some(bits) = self.as_bits() else {
            return f.write_str(INVALID);
        };

        let remainder_bin_bits_count = bits.len() % BITS_PER_HEX_DIGIT;
        let (remainder_bin_bits, hex_bits) = bits.split_at(remainder_bin_bits_count);

        if !remainder_bin_bits.is_empty() {
            write_bits(f, remainder_bin_bits)?;
            f.write_char(':')?;
        }

        let hex_digits: String = hex_bits
            .chunks(BITS_PER_HEX_DIGIT)
            .map(|nibble| {
                let value = nibble
                    .iter()
                    .fold(0u32, |value, bit| (value << 1) | *bit as u32);
                let digit = char::from_digit(value, 16).unwrap_or('?');
                if upper {
                    digit.to_ascii_uppercase()
                } else {
                    digit
                }
            })
            .collect();

        if f.alternate() && !hex_digits.is_empty() {
            f.write_str("0x")?;
        }

        f.write_str(&hex_digits)
    }
}

fn write_bits(f: &mut Formatter<'_>, bits: &[BitValue]) -> Result {
    if f.alternate() && !bits.is_empty() {
        f.write_str("0b")?;
    }

    bits.iter().try_for_each(|bit| f.write_char(bit.to_char()))
}

/// The stored symbols, never prefixed.
impl Display for BitString {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.as_bits() {
            Some(bits) => bits.iter().try_for_each(|bit| f.write_char(bit.to_char())),
            None => f.write_str(INVALID),
        }
    }
}

impl Binary for BitString {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.as_bits() {
            Some(bits) => write_bits(f, bits),
            None => f.write_str(INVALID),
        }
    }
}

impl LowerHex for BitString {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.fmt_hex(f, false)
    }
}

impl UpperHex for BitString {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.fmt_hex(f, true)
    }
}

impl Debug for BitString {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !self.is_valid() {
            return f.write_str(INVALID);
        }

        write!(f, "\"")?;
        Binary::fmt(self, f)?;
        write!(f, "\"")
    }
}
