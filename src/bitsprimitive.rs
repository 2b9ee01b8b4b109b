use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Shl, Shr};

/// Represents an unsigned integer whose bit pattern can be moved in and out of
/// a [`BitString`](crate::BitString).
///
/// It has implementations for all numeric unsigned types.
pub trait BitsPrimitive
where
    Self: Sized + Copy + Eq + Debug,
    Self: BitAnd<Output = Self>,
    Self: BitOr<Output = Self>,
    Self: Shl<usize, Output = Self>,
    Self: Shr<usize, Output = Self>,
{
    const BIT_COUNT: usize;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_primitive {
    ($type:ty) => {
        impl BitsPrimitive for $type {
            const BIT_COUNT: usize = <$type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
        }
    };
}

impl_primitive!(usize);
impl_primitive!(u8);
impl_primitive!(u16);
impl_primitive!(u32);
impl_primitive!(u64);
impl_primitive!(u128);
