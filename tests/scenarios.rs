use osu_binary::{osu_read, osu_write, prelude::*, varint::*};

#[test]
fn scalar() {
    let enc = encode_full(&-1i32).unwrap();
    assert_eq!(enc, vec![0xff, 0xff, 0xff, 0xff]);

    let mut n = 0i32;
    decode_values(&mut &enc[..], &mut [Slot::from(&mut n)]).unwrap();
    assert_eq!(n, -1);
}

#[test]
fn string() {
    let enc = encode_full("hi").unwrap();
    assert_eq!(enc, vec![0x0b, 0x02, 0x68, 0x69]);

    let mut s = String::new();
    decode_values(&mut &enc[..], &mut [Slot::from(&mut s)]).unwrap();
    assert_eq!(s, "hi");
}

#[test]
fn array() {
    let enc = encode_full(&vec![1u32, 2]).unwrap();
    assert_eq!(enc, vec![0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00]);

    let mut v = Vec::<u32>::new();
    decode_values(&mut &enc[..], &mut [Slot::from(&mut v)]).unwrap();
    assert_eq!(v, vec![1, 2]);
}

#[test]
fn varint() {
    assert_eq!(encode_varint(300).to_vec(), vec![0xac, 0x02]);
    assert_eq!(decode_varint(&mut &[0xacu8, 0x02][..]).unwrap(), 300);
}

#[test]
fn string_tag_enforced() {
    let stream = &mut &[0x0au8, 0x02, 0x68, 0x69][..];

    match read_string(stream) {
        Err(OsuError::InvalidStringTag(0x0a)) => {}
        other => panic!("expected bad tag, got {:?}", other),
    }
    // exactly the tag was consumed
    assert_eq!(stream.len(), 3);
}

#[test]
fn string_truncation_reported() {
    let mut bytes = vec![0x0b, 10];
    bytes.extend_from_slice(b"12345");

    let err = read_string(&mut &bytes[..]).unwrap_err();
    match err {
        OsuError::TruncatedString {
            expected: 10,
            actual: 5,
        } => {}
        e => panic!("expected truncated string, got {:?}", e),
    }
    assert_eq!(
        err.to_string(),
        "unexpected end of string (expected to read 10 bytes, read 5)"
    );
}

#[test]
fn array_ceiling() {
    let v = vec![0i32; 70_000];
    let mut out = Vec::new();

    let err = encode_values(&mut out, &[Value::from(v)]).unwrap_err();
    match err.root() {
        OsuError::ArrayTooLong(70_000) => {}
        e => panic!("expected array too long, got {:?}", e),
    }
    assert!(out.is_empty());
}

#[test]
fn io_errors_propagate() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "unplugged"))
        }
    }

    match decode::<u32, _>(&mut Broken) {
        Err(OsuError::Io(e)) => assert_eq!(e.to_string(), "unplugged"),
        other => panic!("expected i/o error, got {:?}", other),
    }
}

#[test]
fn database_like_record() {
    // version, folder count, account unlocked, player name, an id list
    let mut out = Vec::new();
    osu_write!(&mut out, 20191107u32, 3i32, 1u8, "peppy", vec![5i32, 6]).unwrap();

    let mut version = 0u32;
    let mut folders = 0i32;
    let mut unlocked = 0u8;
    let mut name = String::new();
    let mut ids = Vec::<i32>::new();
    osu_read!(
        &mut &out[..],
        &mut version,
        &mut folders,
        &mut unlocked,
        &mut name,
        &mut ids
    )
    .unwrap();

    assert_eq!(version, 20191107);
    assert_eq!(folders, 3);
    assert_eq!(unlocked, 1);
    assert_eq!(name, "peppy");
    assert_eq!(ids, vec![5, 6]);
}
