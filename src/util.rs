/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

#[macro_export]
/// Decodes a stream into variables whose types are checked at runtime.
///
/// Each argument must be a mutable reference to one of the supported types. Anything
/// else fails with [`OsuError::UnsupportedType`](crate::OsuError::UnsupportedType) once
/// the decoder reaches it; the variables before it will already hold their values.
///
/// # Example
///
/// ```
/// use osu_binary::osu_read;
///
/// let mut stream: &[u8] = &[0x01, 0x00, 0x0b, 0x01, b'a'];
///
/// let mut version = 0u16;
/// let mut name = String::new();
/// osu_read!(&mut stream, &mut version, &mut name).unwrap();
///
/// assert_eq!(version, 1);
/// assert_eq!(name, "a");
///
/// let mut f = 0f32;
/// assert!(osu_read!(&mut stream, &mut f).unwrap_err().is_caller_error());
/// ```
macro_rules! osu_read {
    ($r:expr, $($slot:expr),+ $(,)?) => {
        $crate::encoding::decode_dyn($r, &mut [$($crate::rep::DynSlot::new($slot)),+])
    };
}

#[macro_export]
/// Encodes values whose types are checked at runtime.
///
/// # Example
///
/// ```
/// use osu_binary::osu_write;
///
/// let mut out = Vec::new();
/// osu_write!(&mut out, 1u16, "a").unwrap();
///
/// assert_eq!(out, vec![0x01, 0x00, 0x0b, 0x01, b'a']);
/// ```
macro_rules! osu_write {
    ($w:expr, $($value:expr),+ $(,)?) => {
        $crate::encoding::encode_dyn($w, &[$($crate::rep::DynValue::new(&$value)),+])
    };
}
