//! Typed destinations for in-place decoding, and the runtime-typed wrappers behind
//! [`osu_read!`](crate::osu_read) and [`osu_write!`](crate::osu_write).

use crate::{
    encoding::{De, Deserializer, Ser, Serializer},
    errors::OsuError,
    Kind, Value,
};
use std::any::{type_name, Any};

#[derive(Debug)]
/// A mutable reference to a variable of one of the supported [`Kind`]s.
///
/// # Example
///
/// ```
/// use osu_binary::prelude::*;
///
/// let mut ids: Vec<u32> = Vec::new();
/// let slot = Slot::from(&mut ids);
///
/// assert_eq!(slot.kind(), Kind::U32Array);
/// ```
pub enum Slot<'a> {
    I8(&'a mut i8),
    U8(&'a mut u8),
    I16(&'a mut i16),
    U16(&'a mut u16),
    I32(&'a mut i32),
    U32(&'a mut u32),
    I64(&'a mut i64),
    U64(&'a mut u64),
    String(&'a mut String),
    Bytes(&'a mut Vec<u8>),
    I32Array(&'a mut Vec<i32>),
    U32Array(&'a mut Vec<u32>),
}

macro_rules! slot_from {
    ($typ:ty, $variant:ident) => {
        impl<'a> From<&'a mut $typ> for Slot<'a> {
            fn from(r: &'a mut $typ) -> Slot<'a> { Slot::$variant(r) }
        }
    };
}

slot_from!(i8, I8);
slot_from!(u8, U8);
slot_from!(i16, I16);
slot_from!(u16, U16);
slot_from!(i32, I32);
slot_from!(u32, U32);
slot_from!(i64, I64);
slot_from!(u64, U64);
slot_from!(String, String);
slot_from!(Vec<u8>, Bytes);
slot_from!(Vec<i32>, I32Array);
slot_from!(Vec<u32>, U32Array);

#[inline]
fn fill<T: De, D: Deserializer + ?Sized>(dst: &mut T, d: &mut D) -> Result<(), OsuError> {
    // only overwrite once the whole value has been read
    *dst = T::de(d)?;
    Ok(())
}

impl<'a> Slot<'a> {
    /// The kind of the referenced variable.
    pub fn kind(&self) -> Kind {
        match self {
            Slot::I8(_) => Kind::I8,
            Slot::U8(_) => Kind::U8,
            Slot::I16(_) => Kind::I16,
            Slot::U16(_) => Kind::U16,
            Slot::I32(_) => Kind::I32,
            Slot::U32(_) => Kind::U32,
            Slot::I64(_) => Kind::I64,
            Slot::U64(_) => Kind::U64,
            Slot::String(_) => Kind::String,
            Slot::Bytes(_) => Kind::Bytes,
            Slot::I32Array(_) => Kind::I32Array,
            Slot::U32Array(_) => Kind::U32Array,
        }
    }

    /// Decodes the next value from `d` into the referenced variable.
    ///
    /// The variable is left untouched if decoding fails.
    pub fn fill<D: Deserializer + ?Sized>(&mut self, d: &mut D) -> Result<(), OsuError> {
        match self {
            Slot::I8(v) => fill(*v, d),
            Slot::U8(v) => fill(*v, d),
            Slot::I16(v) => fill(*v, d),
            Slot::U16(v) => fill(*v, d),
            Slot::I32(v) => fill(*v, d),
            Slot::U32(v) => fill(*v, d),
            Slot::I64(v) => fill(*v, d),
            Slot::U64(v) => fill(*v, d),
            Slot::String(v) => fill(*v, d),
            Slot::Bytes(v) => fill(*v, d),
            Slot::I32Array(v) => fill(*v, d),
            Slot::U32Array(v) => fill(*v, d),
        }
    }
}

/// A variable of any type, to be matched against the supported kinds when it is
/// decoded into.
///
/// Usually built by [`osu_read!`](crate::osu_read).
pub struct DynSlot<'a> {
    value: &'a mut dyn Any,
    type_name: &'static str,
}

impl<'a> std::fmt::Debug for DynSlot<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("DynSlot").field(&self.type_name).finish()
    }
}

macro_rules! downcast_slot {
    ($any:expr, $($typ:ty),*) => {{
        let any = $any;
        $(
            if any.is::<$typ>() {
                return any.downcast_mut::<$typ>().map(Slot::from);
            }
        )*
        None
    }};
}

impl<'a> DynSlot<'a> {
    /// Wraps a variable, remembering its type name for error messages.
    pub fn new<T: Any>(value: &'a mut T) -> Self {
        DynSlot {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the wrapped variable's type.
    pub fn type_name(&self) -> &'static str { self.type_name }

    /// The typed slot for the wrapped variable, if its type is supported.
    pub fn as_slot(&mut self) -> Option<Slot<'_>> {
        downcast_slot!(
            &mut *self.value,
            i8,
            u8,
            i16,
            u16,
            i32,
            u32,
            i64,
            u64,
            String,
            Vec<u8>,
            Vec<i32>,
            Vec<u32>
        )
    }
}

/// A value of any type, to be matched against the supported kinds when it is encoded.
///
/// Usually built by [`osu_write!`](crate::osu_write).
#[derive(Clone, Copy)]
pub struct DynValue<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

impl<'a> std::fmt::Debug for DynValue<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("DynValue").field(&self.type_name).finish()
    }
}

macro_rules! downcast_ser {
    ($any:expr, $s:expr, $($typ:ty),*) => {{
        let any = $any;
        $(
            if let Some(v) = any.downcast_ref::<$typ>() {
                return Some(v.ser($s));
            }
        )*
        None
    }};
}

impl<'a> DynValue<'a> {
    /// Wraps a value, remembering its type name for error messages.
    pub fn new<T: Any>(value: &'a T) -> Self {
        DynValue {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Name of the wrapped value's type.
    pub fn type_name(&self) -> &'static str { self.type_name }

    /// Writes the wrapped value to `s`, or returns `None` if its type is not supported.
    pub fn ser_to<S: Serializer + ?Sized>(&self, s: &mut S) -> Option<Result<(), OsuError>> {
        downcast_ser!(
            self.value,
            s,
            i8,
            u8,
            i16,
            u16,
            i32,
            u32,
            i64,
            u64,
            String,
            &'static str,
            Vec<u8>,
            &'static [u8],
            Vec<i32>,
            Vec<u32>,
            Value
        )
    }
}
