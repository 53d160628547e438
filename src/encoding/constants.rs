/// First byte of every string, 0x0b
pub const STRING_TAG: u8 = 0b0000_1011;

/// Largest element count an array's `u16` prefix can hold
pub const MAX_ARRAY_LEN: usize = u16::max_value() as usize;

/// Longest varint that can still fit in a `u64`
pub const MAX_VARINT_LEN: usize = 10;

/// Value bits of a varint byte, 0x7f
pub(crate) const VARINT_VALUE: u8 = 0b0111_1111;
/// Continuation bit of a varint byte, 0x80
pub(crate) const VARINT_CONTINUE: u8 = 0b1000_0000;
