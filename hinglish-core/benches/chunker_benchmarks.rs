//! Chunking and transliteration throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hinglish_core::{transliterate, Chunker, Scheme};
use std::hint::black_box;

/// Generate English text of roughly `size_kb` kilobytes
fn generate_text(size_kb: usize) -> String {
    let base_text = "This is a test sentence. It has multiple words! Does it work? ";
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    base_text.repeat(repeat_count)[..target_size].to_string()
}

/// Generate Devanagari text of roughly `size_kb` kilobytes
fn generate_devanagari(size_kb: usize) -> String {
    let base_text = "नमस्ते आप कैसे हो. मैं ठीक हूँ! ";
    let repeat_count = size_kb * 1024 / base_text.len() + 1;
    base_text.repeat(repeat_count)
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_by_max_chars");
    let text = generate_text(100);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for max_chars in [100, 500, 2000, 4500] {
        let chunker = Chunker::new(max_chars).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(max_chars), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text)));
        });
    }

    group.finish();
}

fn bench_chunk_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_scaling");
    let chunker = Chunker::default();

    for size_kb in [10, 100, 1000] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("english", format!("{}KB", size_kb)),
            &text,
            |b, text| b.iter(|| chunker.chunk(black_box(text))),
        );

        let text = generate_devanagari(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("devanagari", format!("{}KB", size_kb)),
            &text,
            |b, text| b.iter(|| chunker.chunk(black_box(text))),
        );
    }

    group.finish();
}

fn bench_transliteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate");

    for size_kb in [1, 10, 100] {
        let text = generate_devanagari(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        for scheme in [Scheme::Itrans, Scheme::Iast] {
            group.bench_with_input(
                BenchmarkId::new(scheme.as_str(), format!("{}KB", size_kb)),
                &text,
                |b, text| b.iter(|| transliterate(black_box(text), scheme)),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chunk_sizes,
    bench_chunk_scaling,
    bench_transliteration
);
criterion_main!(benches);
