use osu_binary::{encoding::constants::MAX_ARRAY_LEN, Kind, Value};
use proptest::prelude::*;

/// arbitrary raw bytestring for use with proptest
pub fn arb_bytes() -> impl Strategy<Value = Vec<u8>> { prop::collection::vec(any::<u8>(), 0..300) }

/// arbitrary `Kind` for use with proptest
pub fn arb_kind() -> impl Strategy<Value = Kind> { prop::sample::select(Kind::ALL.to_vec()) }

/// arbitrary `Value` for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        // 8-bit
        any::<i8>().prop_map(Value::from),
        any::<u8>().prop_map(Value::from),
        // 16-bit
        any::<i16>().prop_map(Value::from),
        any::<u16>().prop_map(Value::from),
        // 32-bit
        any::<i32>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        // 64-bit
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        // strings
        any::<String>().prop_map(Value::from),
        arb_bytes().prop_map(Value::Bytes),
        // arrays
        prop::collection::vec(any::<i32>(), 0..200).prop_map(Value::I32Array),
        prop::collection::vec(any::<u32>(), 0..200).prop_map(Value::U32Array),
    ]
}

/// a whole record: a sequence of arbitrary values
pub fn arb_record() -> impl Strategy<Value = Vec<Value>> { prop::collection::vec(arb_value(), 0..20) }

/// arrays right at the edge of what a `u16` count can describe
pub fn arb_edge_array() -> impl Strategy<Value = Vec<u32>> {
    (MAX_ARRAY_LEN - 2..=MAX_ARRAY_LEN).prop_map(|n| vec![0xdead_beef; n])
}
