#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use osu_binary::{
    encoding::{decode_full, encode_full, read_string, write_string},
    varint::{decode_varint, encode_varint},
};

const N_BIG_ARR: usize = 100;
const N_CHARS: usize = 100_000;

fn big_str() -> String { "x".repeat(N_CHARS) }

fn bench_enc(c: &mut Criterion) {
    let strs: Vec<String> = (0..N_BIG_ARR).map(|_| big_str()).collect();
    c.bench_function(
        &format!("Encoding {} {}-character strings", N_BIG_ARR, N_CHARS),
        move |b| {
            b.iter(|| {
                for s in &strs {
                    black_box(write_string(black_box(s.as_bytes())));
                }
            })
        },
    );
}

fn bench_dec(c: &mut Criterion) {
    let enc = encode_full(&big_str()).unwrap();
    c.bench_function(
        &format!("Decoding a {}-character string", N_CHARS),
        move |b| b.iter(|| decode_full::<String>(black_box(&enc)).unwrap()),
    );
}

fn bench_dec_raw(c: &mut Criterion) {
    let enc = encode_full(&big_str()).unwrap();
    c.bench_function(
        &format!("Decoding a {}-byte string without utf-8 checks", N_CHARS),
        move |b| b.iter(|| read_string(&mut black_box(&enc[..])).unwrap()),
    );
}

fn bench_varint(c: &mut Criterion) {
    let enc = encode_varint(u64::max_value());
    c.bench_function("Decoding a ten byte varint", move |b| {
        b.iter(|| decode_varint(&mut black_box(&enc[..])).unwrap())
    });
}

criterion_group!(benches, bench_enc, bench_dec, bench_dec_raw, bench_varint);
criterion_main!(benches);
