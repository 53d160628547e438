use super::{constants::MAX_ARRAY_LEN, string::write_string};
use crate::{errors::OsuError, Value};
use byteorder::LittleEndian;
use std::io::Write;

macro_rules! put_le {
    ($name:ident, $typ:ty, $write:ident) => {
        /// Add a little-endian
        #[doc = concat!("[`", stringify!($typ), "`]")]
        /// to the output.
        #[inline]
        fn $name(&mut self, n: $typ) -> Result<(), OsuError> {
            byteorder::WriteBytesExt::$write::<LittleEndian>(self, n)?;
            Ok(())
        }
    };
}

macro_rules! put_array {
    ($name:ident, $typ:ty, $write:ident) => {
        /// Add a `u16` element count followed by the little-endian elements.
        ///
        /// # Errors
        ///
        /// Fails with [`OsuError::ArrayTooLong`], before writing anything, if there are
        /// more than 65535 elements.
        fn $name(&mut self, v: &[$typ]) -> Result<(), OsuError> {
            if v.len() > MAX_ARRAY_LEN {
                return Err(OsuError::ArrayTooLong(v.len()));
            }
            self.put_u16(v.len() as u16)?;
            for &n in v {
                byteorder::WriteBytesExt::$write::<LittleEndian>(self, n)?;
            }
            Ok(())
        }
    };
}

/// Sinks that values can be encoded into.
///
/// Implemented for every [`Write`].
pub trait Serializer: Write {
    /// Add an [`i8`] to the output.
    #[inline]
    fn put_i8(&mut self, n: i8) -> Result<(), OsuError> {
        byteorder::WriteBytesExt::write_i8(self, n)?;
        Ok(())
    }

    /// Add a [`u8`] to the output.
    #[inline]
    fn put_u8(&mut self, n: u8) -> Result<(), OsuError> {
        byteorder::WriteBytesExt::write_u8(self, n)?;
        Ok(())
    }

    put_le!(put_i16, i16, write_i16);
    put_le!(put_u16, u16, write_u16);
    put_le!(put_i32, i32, write_i32);
    put_le!(put_u32, u32, write_u32);
    put_le!(put_i64, i64, write_i64);
    put_le!(put_u64, u64, write_u64);

    /// Add a string to the output. Tag, length and payload go out in one write.
    fn put_bytes(&mut self, bs: &[u8]) -> Result<(), OsuError> {
        self.write_all(&write_string(bs))?;
        Ok(())
    }

    /// Add a UTF-8 string to the output.
    fn put_str(&mut self, s: &str) -> Result<(), OsuError> { self.put_bytes(s.as_bytes()) }

    put_array!(put_i32_array, i32, write_i32);
    put_array!(put_u32_array, u32, write_u32);
}

impl<W: Write + ?Sized> Serializer for W {}

/// A value that can be serialized.
pub trait Ser {
    /// Write `self` to a [`Serializer`].
    fn ser<S: Serializer + ?Sized>(&self, s: &mut S) -> Result<(), OsuError>;
}

macro_rules! trivial_ser {
    ($typ:ty, $put:ident) => {
        impl Ser for $typ {
            #[inline]
            fn ser<S: Serializer + ?Sized>(&self, s: &mut S) -> Result<(), OsuError> {
                s.$put(*self)
            }
        }
    };
    ($typ:ty, $put:ident, ref) => {
        impl Ser for $typ {
            #[inline]
            fn ser<S: Serializer + ?Sized>(&self, s: &mut S) -> Result<(), OsuError> {
                s.$put(self)
            }
        }
    };
}

trivial_ser!(i8, put_i8);
trivial_ser!(u8, put_u8);
trivial_ser!(i16, put_i16);
trivial_ser!(u16, put_u16);
trivial_ser!(i32, put_i32);
trivial_ser!(u32, put_u32);
trivial_ser!(i64, put_i64);
trivial_ser!(u64, put_u64);

trivial_ser!(str, put_str, ref);
trivial_ser!(String, put_str, ref);
trivial_ser!([u8], put_bytes, ref);
trivial_ser!(Vec<u8>, put_bytes, ref);
trivial_ser!([i32], put_i32_array, ref);
trivial_ser!(Vec<i32>, put_i32_array, ref);
trivial_ser!([u32], put_u32_array, ref);
trivial_ser!(Vec<u32>, put_u32_array, ref);

impl<T: Ser + ?Sized> Ser for &T {
    #[inline]
    fn ser<S: Serializer + ?Sized>(&self, s: &mut S) -> Result<(), OsuError> { (**self).ser(s) }
}

impl Ser for Value {
    fn ser<S: Serializer + ?Sized>(&self, s: &mut S) -> Result<(), OsuError> {
        match self {
            Value::I8(n) => n.ser(s),
            Value::U8(n) => n.ser(s),
            Value::I16(n) => n.ser(s),
            Value::U16(n) => n.ser(s),
            Value::I32(n) => n.ser(s),
            Value::U32(n) => n.ser(s),
            Value::I64(n) => n.ser(s),
            Value::U64(n) => n.ser(s),
            Value::String(st) => st.ser(s),
            Value::Bytes(bs) => bs.ser(s),
            Value::I32Array(v) => v.ser(s),
            Value::U32Array(v) => v.ser(s),
        }
    }
}

macro_rules! tuple_ser {
    ($($typ:ident $idx:tt),*) => {
        impl<$($typ: Ser),*> Ser for ($($typ,)*) {
            fn ser<Out: Serializer + ?Sized>(&self, s: &mut Out) -> Result<(), OsuError> {
                $(self.$idx.ser(s)?;)*
                Ok(())
            }
        }
    }
}

tuple_ser!(A 0);
tuple_ser!(A 0, B 1);
tuple_ser!(A 0, B 1, C 2);
tuple_ser!(A 0, B 1, C 2, D 3);
tuple_ser!(A 0, B 1, C 2, D 3, E 4);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
tuple_ser!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
