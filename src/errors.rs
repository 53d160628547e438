use crate::Kind;
use failure::Fail;
use std::{io, string::FromUtf8Error};

#[derive(Debug, Fail)]
/// An error encountered while encoding or decoding.
pub enum OsuError {
    /// The stream ended before the named field was complete.
    #[fail(display = "unexpected end of stream while reading {}", _0)]
    TruncatedStream(&'static str),

    /// A string field did not start with the string tag.
    #[fail(display = "was expecting string, found tag byte {:#04x} instead of 0x0b", _0)]
    InvalidStringTag(u8),

    /// A string's declared length exceeds the bytes available.
    #[fail(
        display = "unexpected end of string (expected to read {} bytes, read {})",
        expected, actual
    )]
    TruncatedString {
        /// Length declared by the prefix.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// A varint does not fit the integer it is decoded into.
    #[fail(display = "varint does not fit in the target integer")]
    VarintOverflow,

    /// An array has more elements than a `u16` count can describe.
    #[fail(display = "array of {} elements exceeds the 65535 element limit", _0)]
    ArrayTooLong(usize),

    /// A string slot received bytes that are not valid UTF-8.
    #[fail(display = "string is not valid utf-8: {}", _0)]
    InvalidUtf8(#[cause] FromUtf8Error),

    /// Input remained after a complete value was decoded.
    #[fail(display = "{} trailing bytes after decoded value", _0)]
    TrailingBytes(usize),

    /// The value's type has no wire representation.
    #[fail(display = "type not supported ({})", _0)]
    UnsupportedType(&'static str),

    /// The underlying stream failed.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[cause] io::Error),

    /// Any of the above, located at a slot of a multi-value call.
    #[fail(display = "slot {} ({}): {}", index, kind, cause)]
    AtSlot {
        /// Position of the failing slot.
        index: usize,
        /// Kind of the failing slot, when known.
        kind: SlotKind,
        /// What went wrong.
        cause: Box<OsuError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The kind of a slot that failed. Dynamic slots outside the type matrix only have a
/// type name.
pub enum SlotKind {
    /// A slot of the closed type matrix.
    Known(Kind),
    /// A dynamically typed slot.
    Named(&'static str),
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SlotKind::Known(k) => write!(f, "{}", k),
            SlotKind::Named(n) => write!(f, "{}", n),
        }
    }
}

impl OsuError {
    /// Maps an i/o error, turning an early end of stream into [`OsuError::TruncatedStream`].
    pub(crate) fn from_io(e: io::Error, field: &'static str) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            OsuError::TruncatedStream(field)
        } else {
            OsuError::Io(e)
        }
    }

    pub(crate) fn at_slot(self, index: usize, kind: SlotKind) -> Self {
        OsuError::AtSlot {
            index,
            kind,
            cause: Box::new(self),
        }
    }

    /// The error with any slot location stripped.
    ///
    /// # Example
    ///
    /// ```
    /// use osu_binary::prelude::*;
    ///
    /// let mut n = 0i32;
    /// let err = decode_values(&mut &[0xffu8, 0xff][..], &mut [Slot::from(&mut n)]).unwrap_err();
    ///
    /// assert_eq!(err.slot(), Some(0));
    /// match err.root() {
    ///     OsuError::TruncatedStream(_) => {}
    ///     e => panic!("unexpected error {}", e),
    /// }
    /// ```
    pub fn root(&self) -> &OsuError {
        match self {
            OsuError::AtSlot { cause, .. } => cause.root(),
            e => e,
        }
    }

    /// Index of the slot that failed, if the error came from a multi-value call.
    pub fn slot(&self) -> Option<usize> {
        match self {
            OsuError::AtSlot { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// `true` when the caller asked for something outside the type matrix, as opposed to
    /// the stream containing bad data.
    pub fn is_caller_error(&self) -> bool {
        match self.root() {
            OsuError::UnsupportedType(_) | OsuError::ArrayTooLong(_) => true,
            _ => false,
        }
    }
}

impl From<io::Error> for OsuError {
    fn from(e: io::Error) -> Self { OsuError::Io(e) }
}

impl From<FromUtf8Error> for OsuError {
    fn from(e: FromUtf8Error) -> Self { OsuError::InvalidUtf8(e) }
}
