use std::ops::{BitXor, Not};

/// A single symbol of a [`BitString`](crate::BitString).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum BitValue {
    Zero,
    One,
}

impl BitValue {
    pub fn to_bool(self) -> bool {
        match self {
            BitValue::Zero => false,
            BitValue::One => true,
        }
    }

    /// The textual symbol of the bit: `'0'` or `'1'`.
    pub fn to_char(self) -> char {
        match self {
            BitValue::Zero => '0',
            BitValue::One => '1',
        }
    }
}

impl From<bool> for BitValue {
    fn from(value: bool) -> Self {
        match value {
            true => Self::One,
            false => Self::Zero,
        }
    }
}

impl From<BitValue> for char {
    fn from(value: BitValue) -> Self {
        value.to_char()
    }
}

impl TryFrom<char> for BitValue {
    type Error = char;

    /// Fails with the rejected symbol itself.
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            other => Err(other),
        }
    }
}

impl Not for BitValue {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            BitValue::Zero => BitValue::One,
            BitValue::One => BitValue::Zero,
        }
    }
}

impl BitXor for BitValue {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        BitValue::from(self != rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::BitValue::{self, One, Zero};

    #[test]
    fn not() {
        assert_eq!(!Zero, One);
        assert_eq!(!One, Zero);
    }

    #[test]
    fn xor() {
        assert_eq!(Zero ^ Zero, Zero);
        assert_eq!(Zero ^ One, One);
        assert_eq!(One ^ Zero, One);
        assert_eq!(One ^ One, Zero);
    }

    #[test]
    fn chars() {
        assert_eq!(BitValue::try_from('0'), Ok(Zero));
        assert_eq!(BitValue::try_from('1'), Ok(One));
        assert_eq!(BitValue::try_from('2'), Err('2'));
        assert_eq!(BitValue::try_from('b'), Err('b'));
        assert_eq!(char::from(One), '1');
        assert_eq!(Zero.to_char(), '0');
    }
}
