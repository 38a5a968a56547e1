//! Blob codec benchmarks
//!
//! | Benchmark | Measures |
//! |-----------|----------|
//! | encode/* | Header + base64 code id + payload copy |
//! | decode/* | Header parse + base64 decode, payload borrowed |
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench blob_codec
//! cargo bench --bench blob_codec -- "decode"  # specific group
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use objkit::{decode_blob, encode_blob, ObjectHeader};

const PAYLOAD_SIZES: [usize; 4] = [0, 64, 4096, 65536];

fn sample_header() -> ObjectHeader {
    ObjectHeader::new(true, 1, 2, 3, 4, "4ef2c6a1-policy-store-object")
}

fn bench_encode(c: &mut Criterion) {
    let header = sample_header();
    let mut group = c.benchmark_group("encode");

    for size in PAYLOAD_SIZES {
        let payload = vec![0x5Au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| encode_blob(black_box(&header), black_box(payload)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let header = sample_header();
    let mut group = c.benchmark_group("decode");

    for size in PAYLOAD_SIZES {
        let bytes = match encode_blob(&header, &vec![0x5Au8; size]) {
            Ok(bytes) => bytes,
            Err(e) => panic!("encode failed: {}", e),
        };
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| decode_blob(black_box(bytes)).map(|(h, p)| (h.code_type_id, p.len())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
