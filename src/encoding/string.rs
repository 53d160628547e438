use super::constants::STRING_TAG;
use crate::{
    errors::OsuError,
    varint::{decode_varint, encode_varint},
};
use byteorder::ReadBytesExt;
use bytes::{BufMut, Bytes, BytesMut};
use std::{convert::TryFrom, io::Read};

/// Reads a string from `r`, returning its raw bytes.
///
/// # Errors
///
/// * [`OsuError::InvalidStringTag`] if the first byte is not `0x0b`. Only that byte is
///   consumed.
/// * [`OsuError::TruncatedString`] if the stream holds fewer bytes than the length prefix
///   declares.
/// * [`OsuError::TruncatedStream`] or [`OsuError::VarintOverflow`] from the prefix.
///
/// # Example
///
/// ```
/// use osu_binary::encoding::read_string;
///
/// let mut stream: &[u8] = &[0x0b, 0x02, b'h', b'i'];
///
/// assert_eq!(read_string(&mut stream).unwrap(), b"hi".to_vec());
/// ```
pub fn read_string<R: Read + ?Sized>(r: &mut R) -> Result<Vec<u8>, OsuError> {
    let tag = r
        .read_u8()
        .map_err(|e| OsuError::from_io(e, "string tag"))?;
    if tag != STRING_TAG {
        return Err(OsuError::InvalidStringTag(tag));
    }

    let len = decode_varint(r)?;
    let expected = usize::try_from(len).map_err(|_| OsuError::VarintOverflow)?;

    // grows with the data actually read, not with the declared length
    let mut out = Vec::new();
    (&mut *r).take(len).read_to_end(&mut out)?;

    if out.len() < expected {
        return Err(OsuError::TruncatedString {
            expected: len,
            actual: out.len() as u64,
        });
    }
    Ok(out)
}

/// Reads a string from `r` and checks that it is UTF-8.
pub fn read_utf8_string<R: Read + ?Sized>(r: &mut R) -> Result<String, OsuError> {
    Ok(String::from_utf8(read_string(r)?)?)
}

/// Builds the encoded form of a string: tag, varint length, payload.
///
/// Nothing is written anywhere, so the result can be handed to the sink in one piece.
///
/// # Example
///
/// ```
/// use osu_binary::encoding::write_string;
///
/// assert_eq!(&write_string(b"hi")[..], &[0x0b, 0x02, b'h', b'i']);
/// assert_eq!(&write_string(b"")[..], &[0x0b, 0x00]);
/// ```
pub fn write_string(bs: &[u8]) -> Bytes {
    let len = encode_varint(bs.len() as u64);
    let mut out = BytesMut::with_capacity(1 + len.len() + bs.len());
    out.put_u8(STRING_TAG);
    out.put_slice(&len);
    out.put_slice(bs);
    out.freeze()
}
