// benches/decode_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sonarlog_rs::*;

// Format A log of `count` primary frames, each carrying `payload` samples
fn synthetic_log(count: usize, payload: usize) -> Vec<u8> {
    let header_size = FORMAT_A.frame_header_size;
    let frame_size = 2 * header_size + payload;
    let mut data = vec![0u8; FORMAT_A.file_header_size];

    for _ in 0..count {
        let start = data.len();
        let mut frame = vec![0u8; frame_size];
        frame[0..4].copy_from_slice(&(start as u32).to_le_bytes());
        frame[28..30].copy_from_slice(&(frame_size as u16).to_le_bytes());
        frame[44..48].copy_from_slice(&(30.0f32 * convert::FEET_PER_METER).to_le_bytes());
        data.extend(frame);
    }
    data
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");

    for count in [1_000, 10_000, 50_000].iter() {
        let buffer = ByteBuffer::new(synthetic_log(*count, 1_024));
        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &buffer, |b, buffer| {
            b.iter(|| RecordTable::decode(buffer, FormatVariant::A, TruncationPolicy::Error).unwrap());
        });
    }

    group.finish();
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_primary");

    for count in [1_000, 10_000].iter() {
        let reader = SonarLogReader::from_bytes(synthetic_log(*count, 1_024), FormatVariant::A).unwrap();
        group.throughput(Throughput::Bytes((*count * 1_024) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &reader, |b, reader| {
            b.iter(|| reader.extract_primary().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode, benchmark_extract);
criterion_main!(benches);
