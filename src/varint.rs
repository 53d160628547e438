//! Unsigned base-128 varints (ULEB128), used for string lengths.
//!
//! Each byte carries seven value bits, least significant group first, with the high
//! bit set on every byte but the last.

use crate::{
    encoding::constants::{MAX_VARINT_LEN, VARINT_CONTINUE, VARINT_VALUE},
    errors::OsuError,
};
use byteorder::ReadBytesExt;
use smallvec::SmallVec;
use std::io::{Read, Write};

/// Encodes `value` as its minimal varint.
///
/// # Example
///
/// ```
/// use osu_binary::varint::encode_varint;
///
/// assert_eq!(encode_varint(300).as_slice(), &[0xac, 0x02]);
/// assert_eq!(encode_varint(0).as_slice(), &[0x00]);
/// ```
pub fn encode_varint(mut value: u64) -> SmallVec<[u8; MAX_VARINT_LEN]> {
    let mut out = SmallVec::new();
    while value >= u64::from(VARINT_CONTINUE) {
        out.push((value as u8 & VARINT_VALUE) | VARINT_CONTINUE);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

/// Reads a varint from `r`.
///
/// Non-minimal encodings are accepted as long as the value fits in a `u64`.
///
/// # Errors
///
/// * [`OsuError::TruncatedStream`] if the stream ends before the last byte.
/// * [`OsuError::VarintOverflow`] if the value does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use osu_binary::varint::decode_varint;
///
/// let mut stream: &[u8] = &[0xac, 0x02];
/// assert_eq!(decode_varint(&mut stream).unwrap(), 300);
/// ```
pub fn decode_varint<R: Read + ?Sized>(r: &mut R) -> Result<u64, OsuError> {
    let mut result = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = r.read_u8().map_err(|e| OsuError::from_io(e, "varint"))?;
        let group = u64::from(byte & VARINT_VALUE);

        // the tenth byte only has room for the top bit of a u64
        if i == MAX_VARINT_LEN - 1 && group > 1 {
            return Err(OsuError::VarintOverflow);
        }

        result |= group << (7 * i);

        if byte & VARINT_CONTINUE == 0 {
            return Ok(result);
        }
    }
    Err(OsuError::VarintOverflow)
}

/// Writes the minimal varint for `value` to `w` in a single write.
pub fn put_varint<W: Write + ?Sized>(w: &mut W, value: u64) -> Result<(), OsuError> {
    w.write_all(&encode_varint(value))?;
    Ok(())
}
