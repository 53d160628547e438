//! Reader and writer wrappers that carry the codec along with the stream.
//!
//! Both wrappers pass plain [`Read`]/[`Write`] calls through, so they can be handed to
//! anything expecting the underlying stream.

use crate::{
    encoding::{decode_kinds, decode_values, encode_values, read_string, De, Ser},
    errors::OsuError,
    Kind, Slot, Value,
};
use std::io::{self, Read, Write};

/// A reader for streams in the osu! binary format.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let mut reader = OsuReader::new(&[0x14, 0x00, 0x0b, 0x03, b'o', b's', b'u'][..]);
///
/// let version: u16 = reader.decode().unwrap();
/// let name: String = reader.decode().unwrap();
///
/// assert_eq!((version, name.as_str()), (20, "osu"));
/// ```
#[derive(Debug)]
pub struct OsuReader<R> {
    inner: R,
}

impl<R: Read> OsuReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self { OsuReader { inner } }

    /// Decodes the next `T`.
    pub fn decode<T: De>(&mut self) -> Result<T, OsuError> { T::de(&mut self.inner) }

    /// Decodes into `slots`, in order. See [`decode_values`].
    pub fn read_values(&mut self, slots: &mut [Slot]) -> Result<(), OsuError> {
        decode_values(&mut self.inner, slots)
    }

    /// Same as [`OsuReader::read_values`].
    #[deprecated(note = "use `read_values` instead")]
    pub fn unmarshal(&mut self, slots: &mut [Slot]) -> Result<(), OsuError> {
        self.read_values(slots)
    }

    /// Decodes one value of each of `kinds`. See [`decode_kinds`].
    pub fn read_kinds(&mut self, kinds: &[Kind]) -> Result<Vec<Value>, OsuError> {
        decode_kinds(&mut self.inner, kinds)
    }

    /// Reads a string as raw bytes. See [`read_string`].
    pub fn read_raw_string(&mut self) -> Result<Vec<u8>, OsuError> { read_string(&mut self.inner) }

    /// A reference to the underlying reader.
    pub fn get_ref(&self) -> &R { &self.inner }

    /// A mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R { &mut self.inner }

    /// Unwraps the underlying reader.
    pub fn into_inner(self) -> R { self.inner }
}

impl<R: Read> Read for OsuReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.inner.read(buf) }
}

/// A writer for streams in the osu! binary format.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let mut writer = OsuWriter::new(Vec::new());
///
/// writer.encode(&20u16).unwrap();
/// writer.encode("osu").unwrap();
///
/// assert_eq!(writer.into_inner(), vec![0x14, 0x00, 0x0b, 0x03, b'o', b's', b'u']);
/// ```
#[derive(Debug)]
pub struct OsuWriter<W> {
    inner: W,
}

impl<W: Write> OsuWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self { OsuWriter { inner } }

    /// Encodes `t`.
    pub fn encode<T: Ser + ?Sized>(&mut self, t: &T) -> Result<(), OsuError> {
        t.ser(&mut self.inner)
    }

    /// Encodes `values`, in order. See [`encode_values`].
    pub fn write_values(&mut self, values: &[Value]) -> Result<(), OsuError> {
        encode_values(&mut self.inner, values)
    }

    /// A reference to the underlying writer.
    pub fn get_ref(&self) -> &W { &self.inner }

    /// A mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W { self.inner }
}

impl<W: Write> Write for OsuWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.inner.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.inner.flush() }
}
