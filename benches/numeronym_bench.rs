use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use n7m::numeronym::{all_numeronyms, text_to_numeronym, text_to_numeronym_into, token_to_numeronym};

const SIMPLE_TEXT: &str = "internationalization and localization";
const MIXED_TEXT: &str = r#"
    "Internationalization (i18n) and localization (l10n)," she said,
    "ship in 2026 - with accessibility, observability, and kubernetes."
"#;

fn paragraph(repeats: usize) -> String {
    MIXED_TEXT.repeat(repeats)
}

fn bench_token_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_conversion");

    group.bench_function("short_token_passthrough", |b| {
        b.iter(|| token_to_numeronym(black_box("cat")))
    });

    group.bench_function("long_token", |b| {
        b.iter(|| token_to_numeronym(black_box("internationalization")))
    });

    group.finish();
}

fn bench_text_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_conversion");

    group.throughput(Throughput::Bytes(SIMPLE_TEXT.len() as u64));
    group.bench_function("simple_text", |b| {
        b.iter(|| text_to_numeronym(black_box(SIMPLE_TEXT)))
    });

    let long_text = paragraph(512);
    group.throughput(Throughput::Bytes(long_text.len() as u64));
    group.bench_function("long_text", |b| {
        b.iter(|| text_to_numeronym(black_box(&long_text)))
    });

    // Buffer reuse vs fresh allocation per call
    group.bench_function("long_text_buffer_reuse", |b| {
        let mut buffer = String::with_capacity(long_text.len());
        b.iter(|| {
            text_to_numeronym_into(black_box(&long_text), &mut buffer);
            black_box(buffer.len());
        })
    });

    group.finish();
}

fn bench_variant_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("variant_enumeration");

    // Quadratic growth in token length
    for len in [8usize, 16, 32, 64] {
        let token: String = "abcdefgh".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &token, |b, token| {
            b.iter(|| all_numeronyms(black_box(token)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_token_conversion,
    bench_text_conversion,
    bench_variant_enumeration
);
criterion_main!(benches);
