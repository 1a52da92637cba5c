//! Benchmarks for the chunking strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cleaver::{
    CharacterChunker, ChunkEngine, ChunkOptions, ParagraphChunker, SentenceChunker,
};

fn sample_text(size: usize) -> String {
    // Realistic prose: sentences grouped into paragraphs, headings mixed in.
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        if i % 40 == 0 {
            text.push_str("# Section\n\n");
        }
        text.push_str(sentences[i % sentences.len()]);
        if i % 8 == 7 {
            text.push_str("\n\n");
        }
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_character(c: &mut Criterion) {
    let mut group = c.benchmark_group("character");
    let opts = ChunkOptions::new(500, 50).unwrap();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = CharacterChunker::new();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("character", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), &opts))
        });
    }

    group.finish();
}

fn bench_sentence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence");
    let opts = ChunkOptions::new(500, 50).unwrap();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = SentenceChunker::new();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sentence", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), &opts))
        });
    }

    group.finish();
}

fn bench_paragraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("paragraph");
    let opts = ChunkOptions::new(500, 50).unwrap();

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let chunker = ParagraphChunker::new();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("paragraph", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), &opts))
        });
    }

    group.finish();
}

fn bench_legacy_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_engine");
    let engine = ChunkEngine::new();

    for size in [10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("chunk", size), &text, |b, text| {
            b.iter(|| engine.chunk(black_box(text), 1200))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_character,
    bench_sentence,
    bench_paragraph,
    bench_legacy_engine
);
criterion_main!(benches);
