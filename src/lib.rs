//! Rust Binary Strings
//!
//! A [`BitString`] is an owned sequence of bits written and read as text made
//! of `0` and `1` symbols, optionally prefixed with `0b`. It provides the
//! bitwise substrate of bit-oriented algorithms: XOR, NOT, rotations,
//! concatenation and slicing.
//!
//! # Bit order
//!
//! Index `0` is the leftmost symbol of the textual form, which is the most
//! significant bit. Operations that reconcile widths ([`BitString::set_size`]
//! and XOR) pad or truncate on that side, like unsigned integers do.
//!
//! # Validity
//!
//! Construction never fails. Input that is not a binary string produces an
//! *invalid* value, which silently propagates through the pure operators:
//!
//! ```
//! use rust_binstring::BitString;
//!
//! let key = BitString::new("0b1100");
//! assert_eq!(&key ^ "0110", "1010");
//!
//! let broken = &key ^ "01x0";
//! assert!(!broken.is_valid());
//! assert!(!broken.rotate_right(1).unwrap().is_valid());
//! ```
//!
//! Operations that must report a failure to the caller, such as
//! [`BitString::append`] or out-of-range indexing, return an [`Error`]
//! instead. Use [`str::parse`] or [`coerce`] to get an error for malformed
//! input too.

mod bitsource;
mod bitsprimitive;
mod bitstring;
mod bitvalue;
mod error;
mod fmt;
mod index;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde;

pub use bitsource::*;
pub use bitsprimitive::*;
pub use bitstring::*;
pub use bitvalue::*;
pub use error::*;
pub use ops::xor_reduce;
