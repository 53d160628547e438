pub use crate::{
    encoding::{
        decode, decode_full, decode_kinds, decode_values, encode, encode_full, encode_values,
        read_string, write_string, De, Ser,
    },
    errors::OsuError,
    rep::Slot,
    stream::{OsuReader, OsuWriter},
    Kind, Value,
};
