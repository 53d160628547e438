//! # osu_binary
//!
//! A codec for the little-endian binary format osu! uses in its database and replay
//! files: fixed-width integers, varint-prefixed strings, and `u16`-prefixed arrays.
//!
//! # Usage
//!
//! Every supported type implements [`Ser`](encoding::Ser) and [`De`](encoding::De),
//! so most of the time values can be encoded and decoded directly.
//!
//! ```
//! use osu_binary::prelude::*;
//!
//! let enc = encode_full(&(20191107u32, "osu!", vec![1i32, 2, 3])).unwrap();
//!
//! let (version, name, ids): (u32, String, Vec<i32>) = decode_full(&enc).unwrap();
//!
//! assert_eq!(version, 20191107);
//! assert_eq!(name, "osu!");
//! assert_eq!(ids, vec![1, 2, 3]);
//! ```
//!
//! When the fields already live somewhere, decode into them in place with [`Slot`]s:
//!
//! ```
//! use osu_binary::prelude::*;
//!
//! let mut stream: &[u8] = &[0x2a, 0x0b, 0x02, b'h', b'i'];
//!
//! let mut n = 0u8;
//! let mut s = String::new();
//! decode_values(&mut stream, &mut [Slot::from(&mut n), Slot::from(&mut s)]).unwrap();
//!
//! assert_eq!(n, 42);
//! assert_eq!(s, "hi");
//! ```
//!
//! For values whose types are only known at runtime, see [`osu_read!`] and
//! [`osu_write!`].
//!
//! # Format
//!
//! This section describes the binary format. There are no type tags apart from the
//! string tag; the reader has to know what comes next.
//!
//! ## Integers
//!
//! `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and `u64` are written as exactly
//! their width in bytes, little endian, two's complement when signed.
//!
//! ## Varints
//!
//! Lengths are unsigned LEB128: seven value bits per byte, least significant group
//! first, with the high bit set on every byte except the last.
//!
//! | 1 (more) or 0 (last) | xxxxxxx    |
//! | ---                  | ---        |
//! | Continuation         | Value bits |
//!
//! ## Strings
//!
//! | `0x0b` | varint | bytes   |
//! | ---    | ---    | ---     |
//! | Tag    | Length | Payload |
//!
//! The payload is usually UTF-8 text but the format does not care.
//!
//! ## Arrays
//!
//! Only arrays of `i32` and `u32` exist.
//!
//! | u16           | 4 bytes each   |
//! | ---           | ---            |
//! | Element count | Elements (LE)  |

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[macro_use]
mod util;

pub mod encoding;
pub mod errors;
pub mod prelude;
pub mod rep;
pub mod stream;
pub mod varint;

pub use errors::OsuError;
pub use rep::Slot;

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The shapes a value can take on the wire.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let kinds = [Kind::U8, Kind::String];
/// let values = decode_kinds(&mut &[7u8, 0x0b, 0x00][..], &kinds).unwrap();
///
/// assert_eq!(values, vec![Value::U8(7), Value::from("")]);
/// ```
pub enum Kind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Text, decoded as UTF-8.
    String,
    /// Raw bytes with the same wire form as [`Kind::String`].
    Bytes,
    I32Array,
    U32Array,
}

impl Kind {
    /// Every kind, in wire-width order.
    pub const ALL: [Kind; 12] = [
        Kind::I8,
        Kind::U8,
        Kind::I16,
        Kind::U16,
        Kind::I32,
        Kind::U32,
        Kind::I64,
        Kind::U64,
        Kind::String,
        Kind::Bytes,
        Kind::I32Array,
        Kind::U32Array,
    ];

    /// The zero value of this kind: `0`, an empty string, or an empty array.
    ///
    /// # Example
    ///
    /// ```
    /// use osu_binary::prelude::*;
    ///
    /// assert_eq!(Kind::I32Array.default_value(), Value::I32Array(vec![]));
    /// ```
    pub fn default_value(self) -> Value {
        match self {
            Kind::I8 => Value::I8(0),
            Kind::U8 => Value::U8(0),
            Kind::I16 => Value::I16(0),
            Kind::U16 => Value::U16(0),
            Kind::I32 => Value::I32(0),
            Kind::U32 => Value::U32(0),
            Kind::I64 => Value::I64(0),
            Kind::U64 => Value::U64(0),
            Kind::String => Value::String(String::new()),
            Kind::Bytes => Value::Bytes(Vec::new()),
            Kind::I32Array => Value::I32Array(Vec::new()),
            Kind::U32Array => Value::U32Array(Vec::new()),
        }
    }

    /// Encoded size in bytes, if it does not depend on the value.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Kind::I8 | Kind::U8 => Some(1),
            Kind::I16 | Kind::U16 => Some(2),
            Kind::I32 | Kind::U32 => Some(4),
            Kind::I64 | Kind::U64 => Some(8),
            Kind::String | Kind::Bytes | Kind::I32Array | Kind::U32Array => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::I32Array => "i32 array",
            Kind::U32Array => "u32 array",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// An owned value of one of the supported [`Kind`]s.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let v = Value::from(-1i32);
///
/// assert_eq!(v.kind(), Kind::I32);
/// assert_eq!(encode_full(&v).unwrap(), vec![0xff, 0xff, 0xff, 0xff]);
/// ```
pub enum Value {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    /// Text.
    String(String),
    /// Raw bytes, written exactly like a string.
    Bytes(Vec<u8>),
    I32Array(Vec<i32>),
    U32Array(Vec<u32>),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::I8(_) => Kind::I8,
            Value::U8(_) => Kind::U8,
            Value::I16(_) => Kind::I16,
            Value::U16(_) => Kind::U16,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::I64(_) => Kind::I64,
            Value::U64(_) => Kind::U64,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::I32Array(_) => Kind::I32Array,
            Value::U32Array(_) => Kind::U32Array,
        }
    }

    /// The payload if this is a string or a bytestring.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The value widened to an `i128` if it is an integer.
    pub fn as_int(&self) -> Option<i128> {
        match *self {
            Value::I8(i) => Some(i.into()),
            Value::U8(u) => Some(u.into()),
            Value::I16(i) => Some(i.into()),
            Value::U16(u) => Some(u.into()),
            Value::I32(i) => Some(i.into()),
            Value::U32(u) => Some(u.into()),
            Value::I64(i) => Some(i.into()),
            Value::U64(u) => Some(u.into()),
            _ => None,
        }
    }
}

from_fn!(Value, i8, Value::I8);
from_fn!(Value, u8, Value::U8);
from_fn!(Value, i16, Value::I16);
from_fn!(Value, u16, Value::U16);
from_fn!(Value, i32, Value::I32);
from_fn!(Value, u32, Value::U32);
from_fn!(Value, i64, Value::I64);
from_fn!(Value, u64, Value::U64);
from_fn!(Value, String, Value::String);
from_fn!(Value, Vec<u8>, Value::Bytes);
from_fn!(Value, Vec<i32>, Value::I32Array);
from_fn!(Value, Vec<u32>, Value::U32Array);
from_fn!(Value, &str, |s: &str| Value::String(s.to_string()));
from_fn!(Value, &[u8], |b: &[u8]| Value::Bytes(b.to_vec()));
