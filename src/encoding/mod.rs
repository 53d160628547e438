//! # osu! binary encoder and decoder
//!
//! Encode and decode functions for the osu! binary format.
//!
//! # Example
//!
//! ```
//! use osu_binary::prelude::*;
//!
//! // a beatmap entry header, as it might be laid out in a database
//! let header = (String::from("artist"), 7u8, vec![1u32, 2]);
//!
//! // encode it
//! let enc = encode_full(&header).unwrap();
//!
//! // encode it a different way too
//! let mut out = Vec::new();
//! encode(&header, &mut out).unwrap();
//!
//! // they are equivalent
//! assert_eq!(out, enc);
//!
//! // and it comes back the same
//! let dec: (String, u8, Vec<u32>) = decode_full(&enc).unwrap();
//! assert_eq!(dec, header);
//! ```

use crate::{
    errors::{OsuError, SlotKind},
    rep::{DynSlot, DynValue},
    Kind, Slot, Value,
};
use log::{debug, trace};
use std::io::{Read, Write};

pub mod constants;
pub mod de;
pub use de::*;
pub mod ser;
pub use ser::*;
mod string;
pub use string::*;

/// Encodes `t` into `out`.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let out = &mut Vec::new();
/// encode(&300u16, out).unwrap();
///
/// assert_eq!(*out, vec![0x2c, 0x01]);
/// ```
pub fn encode<T: Ser + ?Sized, W: Write + ?Sized>(t: &T, out: &mut W) -> Result<(), OsuError> {
    t.ser(out)
}

/// Decodes a `T` from the front of `r`.
pub fn decode<T: De, R: Read + ?Sized>(r: &mut R) -> Result<T, OsuError> { T::de(r) }

/// Encodes `t` into a new vector of bytes.
///
/// # Errors
///
/// Only fails for arrays with more than 65535 elements.
pub fn encode_full<T: Ser + ?Sized>(t: &T) -> Result<Vec<u8>, OsuError> {
    let mut out = Vec::new();
    t.ser(&mut out)?;
    Ok(out)
}

/// Decodes a `T` that makes up all of `bs`.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let n: i32 = decode_full(&[0xff, 0xff, 0xff, 0xff]).unwrap();
/// assert_eq!(n, -1);
///
/// // leftovers are an error
/// assert!(decode_full::<u16>(&[0x00, 0x00, 0x00]).is_err());
/// ```
pub fn decode_full<T: De>(bs: &[u8]) -> Result<T, OsuError> {
    let buf = &mut &bs[..];
    let t = T::de(buf)?;
    if buf.is_empty() {
        Ok(t)
    } else {
        Err(OsuError::TrailingBytes(buf.len()))
    }
}

/// Decodes values into `slots`, in order.
///
/// Decoding stops at the first error, which records the index of the failing slot.
/// Slots before it keep their decoded values; it and the slots after it are left
/// untouched. The stream position after a failure is unspecified.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let mut stream: &[u8] = &[0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
///
/// let mut ids = Vec::<u32>::new();
/// decode_values(&mut stream, &mut [Slot::from(&mut ids)]).unwrap();
///
/// assert_eq!(ids, vec![1, 2]);
/// ```
pub fn decode_values<R: Read + ?Sized>(r: &mut R, slots: &mut [Slot]) -> Result<(), OsuError> {
    debug!("decoding {} slots", slots.len());
    for (i, slot) in slots.iter_mut().enumerate() {
        let kind = slot.kind();
        trace!("slot {}: {}", i, kind);
        slot.fill(r)
            .map_err(|e| e.at_slot(i, SlotKind::Known(kind)))?;
    }
    Ok(())
}

/// Encodes `values` into `w`, in order.
///
/// Stops at the first error, which records the index of the failing value. Values
/// before it have already been written.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let mut out = Vec::new();
/// encode_values(&mut out, &[Value::from(-1i32), Value::from("hi")]).unwrap();
///
/// assert_eq!(out, vec![0xff, 0xff, 0xff, 0xff, 0x0b, 0x02, b'h', b'i']);
/// ```
pub fn encode_values<W: Write + ?Sized>(w: &mut W, values: &[Value]) -> Result<(), OsuError> {
    debug!("encoding {} values", values.len());
    for (i, v) in values.iter().enumerate() {
        let kind = v.kind();
        trace!("value {}: {}", i, kind);
        v.ser(w).map_err(|e| e.at_slot(i, SlotKind::Known(kind)))?;
    }
    Ok(())
}

/// Decodes one value of each of `kinds`, in order.
pub fn decode_kinds<R: Read + ?Sized>(r: &mut R, kinds: &[Kind]) -> Result<Vec<Value>, OsuError> {
    debug!("decoding {} kinds", kinds.len());
    let mut out = Vec::with_capacity(kinds.len());
    for (i, &kind) in kinds.iter().enumerate() {
        trace!("slot {}: {}", i, kind);
        out.push(
            r.read_kind(kind)
                .map_err(|e| e.at_slot(i, SlotKind::Known(kind)))?,
        );
    }
    Ok(out)
}

/// Decodes into runtime-typed variables, in order. See [`osu_read!`](crate::osu_read).
///
/// A variable of an unsupported type fails with [`OsuError::UnsupportedType`] when it is
/// reached, without consuming any input for it.
pub fn decode_dyn<R: Read + ?Sized>(r: &mut R, slots: &mut [DynSlot]) -> Result<(), OsuError> {
    debug!("decoding {} dynamic slots", slots.len());
    for (i, dyn_slot) in slots.iter_mut().enumerate() {
        let name = dyn_slot.type_name();
        trace!("slot {}: {}", i, name);
        match dyn_slot.as_slot() {
            Some(mut slot) => slot
                .fill(r)
                .map_err(|e| e.at_slot(i, SlotKind::Known(slot.kind())))?,
            None => {
                return Err(OsuError::UnsupportedType(name).at_slot(i, SlotKind::Named(name)));
            }
        }
    }
    Ok(())
}

/// Encodes runtime-typed values, in order. See [`osu_write!`](crate::osu_write).
///
/// A value of an unsupported type fails with [`OsuError::UnsupportedType`] when it is
/// reached. This includes [`Kind`]s, which describe a value rather than being one.
pub fn encode_dyn<W: Write + ?Sized>(w: &mut W, values: &[DynValue]) -> Result<(), OsuError> {
    debug!("encoding {} dynamic values", values.len());
    for (i, v) in values.iter().enumerate() {
        let name = v.type_name();
        trace!("value {}: {}", i, name);
        match v.ser_to(w) {
            Some(res) => res.map_err(|e| e.at_slot(i, SlotKind::Named(name)))?,
            None => {
                return Err(OsuError::UnsupportedType(name).at_slot(i, SlotKind::Named(name)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::constants::*;

    #[test]
    fn scalar_widths() {
        assert_eq!(encode_full(&-1i8).unwrap(), [0xff]);
        assert_eq!(encode_full(&0x0102u16).unwrap(), [0x02, 0x01]);
        assert_eq!(encode_full(&-1i32).unwrap(), [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            encode_full(&0x0102_0304_0506_0708u64).unwrap(),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            encode_full(&i64::min_value()).unwrap(),
            [0, 0, 0, 0, 0, 0, 0, 0x80]
        );
    }

    #[test]
    fn scalar_decode() {
        assert_eq!(decode_full::<i32>(&[0xff, 0xff, 0xff, 0xff]).unwrap(), -1);
        assert_eq!(decode_full::<u32>(&[0xff, 0xff, 0xff, 0xff]).unwrap(), u32::max_value());
        assert_eq!(decode_full::<i16>(&[0x00, 0x80]).unwrap(), i16::min_value());
    }

    #[test]
    fn small_string() {
        let out = encode_full("hi").unwrap();

        // tag
        assert_eq!(out[0], STRING_TAG);
        // length
        assert_eq!(out[1], 2);
        // characters
        assert_eq!(out[2..], [0x68, 0x69]);

        assert_eq!(decode_full::<String>(&out).unwrap(), "hi");
    }

    #[test]
    fn empty_string() {
        let out = encode_full("").unwrap();
        assert_eq!(out, [STRING_TAG, 0]);
        assert_eq!(decode_full::<Vec<u8>>(&out).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn small_array() {
        let out = encode_full(&vec![1u32, 2]).unwrap();

        assert_eq!(out, [0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]);
        assert_eq!(decode_full::<Vec<u32>>(&out).unwrap(), vec![1, 2]);
    }

    #[test]
    fn empty_array() {
        let out = encode_full(&Vec::<i32>::new()).unwrap();
        assert_eq!(out, [0x00, 0x00]);
        assert_eq!(decode_full::<Vec<i32>>(&out).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn largest_array() {
        let v: Vec<i32> = (0..MAX_ARRAY_LEN as i32).collect();
        let out = encode_full(&v).unwrap();

        // count
        assert_eq!(out[..2], [0xff, 0xff]);
        assert_eq!(out.len(), 2 + 4 * MAX_ARRAY_LEN);
        assert_eq!(decode_full::<Vec<i32>>(&out).unwrap(), v);
    }

    #[test]
    fn oversized_array_writes_nothing() {
        let v = vec![0i32; 70_000];
        let mut out = Vec::new();

        match encode(&v, &mut out) {
            Err(OsuError::ArrayTooLong(70_000)) => {}
            other => panic!("expected array too long, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_array() {
        // claims 2 elements, has 1
        match decode_full::<Vec<u32>>(&[0x02, 0x00, 0x01, 0x00, 0x00, 0x00]) {
            Err(OsuError::TruncatedStream(_)) => {}
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn trailing_bytes() {
        match decode_full::<u8>(&[1, 2, 3]) {
            Err(OsuError::TrailingBytes(2)) => {}
            other => panic!("expected trailing bytes, got {:?}", other),
        }
    }

    #[test]
    fn tuples_are_sequential() {
        let out = encode_full(&(1u8, "a", -2i16)).unwrap();
        assert_eq!(out, [0x01, 0x0b, 0x01, b'a', 0xfe, 0xff]);

        let dec: (u8, String, i16) = decode_full(&out).unwrap();
        assert_eq!(dec, (1, "a".to_string(), -2));
    }

    #[test]
    fn values_in_order() {
        let values = vec![
            Value::from(7u8),
            Value::from("osu!"),
            Value::from(vec![-1i32]),
            Value::from(u64::max_value()),
            Value::Bytes(vec![0, 1]),
        ];
        let mut out = Vec::new();
        encode_values(&mut out, &values).unwrap();

        let kinds: Vec<Kind> = values.iter().map(Value::kind).collect();
        let dec = decode_kinds(&mut &out[..], &kinds).unwrap();
        assert_eq!(dec, values);
    }

    #[test]
    fn slots_keep_earlier_values_on_failure() {
        // a u8, then a string with a bad tag
        let stream = &mut &[0x05u8, 0x0c, 0x00][..];

        let mut a = 0u8;
        let mut b = String::from("untouched");
        let mut c = 9i32;
        let err = decode_values(
            stream,
            &mut [Slot::from(&mut a), Slot::from(&mut b), Slot::from(&mut c)],
        )
        .unwrap_err();

        assert_eq!(err.slot(), Some(1));
        match err.root() {
            OsuError::InvalidStringTag(0x0c) => {}
            e => panic!("expected bad tag, got {:?}", e),
        }
        assert!(!err.is_caller_error());
        assert_eq!(a, 5);
        assert_eq!(b, "untouched");
        assert_eq!(c, 9);
    }

    #[test]
    fn encode_error_names_slot() {
        let values = [Value::U8(1), Value::I32Array(vec![0; 70_000])];
        let err = encode_values(&mut Vec::<u8>::new(), &values).unwrap_err();

        assert_eq!(err.slot(), Some(1));
        assert!(err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "slot 1 (i32 array): array of 70000 elements exceeds the 65535 element limit"
        );
    }

    #[test]
    fn dyn_read() {
        let stream = &mut &[0x2a, 0x00, 0x0b, 0x01, b'x', 0x01, 0x00, 0x03, 0x00, 0x00, 0x00][..];

        let mut n = 0u16;
        let mut s = String::new();
        let mut v = Vec::<i32>::new();
        osu_read!(stream, &mut n, &mut s, &mut v).unwrap();

        assert_eq!(n, 42);
        assert_eq!(s, "x");
        assert_eq!(v, vec![3]);
    }

    #[test]
    fn dyn_unsupported_is_caller_error() {
        let stream = &mut &[0x01u8, 0x02][..];

        let mut a = 0u8;
        let mut f = 0f64;
        let err = osu_read!(stream, &mut a, &mut f).unwrap_err();

        assert_eq!(a, 1);
        assert_eq!(err.slot(), Some(1));
        assert!(err.is_caller_error());
        match err.root() {
            OsuError::UnsupportedType(name) => assert_eq!(*name, "f64"),
            e => panic!("expected unsupported type, got {:?}", e),
        }
        // nothing was consumed for the unsupported slot
        assert_eq!(*stream, &[0x02]);
    }

    #[test]
    fn dyn_write() {
        let mut out = Vec::new();
        osu_write!(&mut out, -1i32, "hi", vec![1u32, 2], Value::U8(3)).unwrap();

        assert_eq!(
            out,
            [
                0xff, 0xff, 0xff, 0xff, // i32
                0x0b, 0x02, 0x68, 0x69, // string
                0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, // array
                0x03, // u8
            ]
        );
    }

    #[test]
    fn dyn_write_rejects_type_descriptors() {
        let mut out = Vec::new();
        let err = osu_write!(&mut out, 1u8, Kind::String).unwrap_err();

        assert_eq!(err.slot(), Some(1));
        assert!(err.is_caller_error());
        assert_eq!(out, [0x01]);
    }
}
