use super::string::{read_string, read_utf8_string};
use crate::{errors::OsuError, Kind, Value};
use byteorder::LittleEndian;
use std::io::Read;

macro_rules! read_le {
    ($name:ident, $typ:ty, $read:ident) => {
        /// Read a little-endian
        #[doc = concat!("[`", stringify!($typ), "`].")]
        #[inline]
        fn $name(&mut self) -> Result<$typ, OsuError> {
            byteorder::ReadBytesExt::$read::<LittleEndian>(self)
                .map_err(|e| OsuError::from_io(e, stringify!($typ)))
        }
    };
}

macro_rules! read_array {
    ($name:ident, $typ:ty, $read_into:ident) => {
        /// Read a `u16` element count followed by that many little-endian
        #[doc = concat!("[`", stringify!($typ), "`]s.")]
        fn $name(&mut self) -> Result<Vec<$typ>, OsuError> {
            let len = Deserializer::read_u16(self)? as usize;

            let mut out = vec![0; len];
            byteorder::ReadBytesExt::$read_into::<LittleEndian>(self, &mut out)
                .map_err(|e| OsuError::from_io(e, concat!(stringify!($typ), " array")))?;
            Ok(out)
        }
    };
}

/// Streams that values can be decoded from.
///
/// Implemented for every [`Read`].
pub trait Deserializer: Read {
    /// Read an [`i8`].
    #[inline]
    fn read_i8(&mut self) -> Result<i8, OsuError> {
        byteorder::ReadBytesExt::read_i8(self).map_err(|e| OsuError::from_io(e, "i8"))
    }

    /// Read a [`u8`].
    #[inline]
    fn read_u8(&mut self) -> Result<u8, OsuError> {
        byteorder::ReadBytesExt::read_u8(self).map_err(|e| OsuError::from_io(e, "u8"))
    }

    read_le!(read_i16, i16, read_i16);
    read_le!(read_u16, u16, read_u16);
    read_le!(read_i32, i32, read_i32);
    read_le!(read_u32, u32, read_u32);
    read_le!(read_i64, i64, read_i64);
    read_le!(read_u64, u64, read_u64);

    /// Read a string as raw bytes.
    fn read_bytes(&mut self) -> Result<Vec<u8>, OsuError> { read_string(self) }

    /// Read a string, failing if it is not UTF-8.
    fn read_string(&mut self) -> Result<String, OsuError> { read_utf8_string(self) }

    read_array!(read_i32_array, i32, read_i32_into);
    read_array!(read_u32_array, u32, read_u32_into);

    /// Read a value of the given kind.
    fn read_kind(&mut self, kind: Kind) -> Result<Value, OsuError> {
        Ok(match kind {
            Kind::I8 => Value::I8(self.read_i8()?),
            Kind::U8 => Value::U8(self.read_u8()?),
            Kind::I16 => Value::I16(self.read_i16()?),
            Kind::U16 => Value::U16(self.read_u16()?),
            Kind::I32 => Value::I32(self.read_i32()?),
            Kind::U32 => Value::U32(self.read_u32()?),
            Kind::I64 => Value::I64(self.read_i64()?),
            Kind::U64 => Value::U64(self.read_u64()?),
            Kind::String => Value::String(self.read_string()?),
            Kind::Bytes => Value::Bytes(self.read_bytes()?),
            Kind::I32Array => Value::I32Array(self.read_i32_array()?),
            Kind::U32Array => Value::U32Array(self.read_u32_array()?),
        })
    }
}

impl<R: Read + ?Sized> Deserializer for R {}

/// Values that can be deserialized.
pub trait De: Sized {
    /// Read a value of type `Self` from a [`Deserializer`].
    ///
    /// # Arguments
    ///
    /// * `d` - The [`Deserializer`] to be read from.
    fn de<D: Deserializer + ?Sized>(d: &mut D) -> Result<Self, OsuError>;
}

macro_rules! trivial_de {
    ($typ:ty, $read:ident) => {
        impl De for $typ {
            #[inline]
            fn de<D: Deserializer + ?Sized>(d: &mut D) -> Result<Self, OsuError> {
                Deserializer::$read(d)
            }
        }
    };
}

trivial_de!(i8, read_i8);
trivial_de!(u8, read_u8);
trivial_de!(i16, read_i16);
trivial_de!(u16, read_u16);
trivial_de!(i32, read_i32);
trivial_de!(u32, read_u32);
trivial_de!(i64, read_i64);
trivial_de!(u64, read_u64);

trivial_de!(String, read_string);
trivial_de!(Vec<u8>, read_bytes);
trivial_de!(Vec<i32>, read_i32_array);
trivial_de!(Vec<u32>, read_u32_array);

macro_rules! tuple_de {
    ($($typ:ident),*) => {
        impl<$($typ: De),*> De for ($($typ,)*) {
            fn de<Des: Deserializer + ?Sized>(d: &mut Des) -> Result<Self, OsuError> {
                Ok(($($typ::de(d)?,)*))
            }
        }
    }
}

tuple_de!(A);
tuple_de!(A, B);
tuple_de!(A, B, C);
tuple_de!(A, B, C, D);
tuple_de!(A, B, C, D, E);
tuple_de!(A, B, C, D, E, F);
tuple_de!(A, B, C, D, E, F, G);
tuple_de!(A, B, C, D, E, F, G, H);
tuple_de!(A, B, C, D, E, F, G, H, I);
tuple_de!(A, B, C, D, E, F, G, H, I, J);
tuple_de!(A, B, C, D, E, F, G, H, I, J, K);
tuple_de!(A, B, C, D, E, F, G, H, I, J, K, L);
