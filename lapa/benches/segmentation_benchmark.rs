use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lapa::{
    first_grapheme_cluster, first_line_segment, first_sentence, first_word, step,
    GraphemeCursor, LineCursor, SentenceCursor, StepCursor, WordCursor,
};
use std::hint::black_box as std_black_box;

fn generate_test_data() -> Vec<(&'static str, String)> {
    vec![
        (
            "ascii_text",
            String::from("Hello, World! This is a simple ASCII text. And a second sentence."),
        ),
        (
            "mixed_utf8",
            String::from("Hello 🌍! Mixed ASCII and UTF-8: café, naïve, 中文, e\u{301}."),
        ),
        (
            "emoji",
            String::from(
                "👨\u{200D}👩\u{200D}👧 🇩🇪🇫🇷 👋🏽 ❤\u{FE0F} ☺\u{FE0E} 🦀🦀🦀 🚀✨💫",
            ),
        ),
        ("hangul", String::from("한국어 텍스트 분할 테스트입니다. 다음 문장.")),
        ("large_text", {
            let mut data = String::new();
            for i in 0..1000 {
                data.push_str(&format!(
                    "Line {}: Hello 🌍 World! 中文 {}. It costs $1,234.50 (roughly).\n",
                    i,
                    "🦀".repeat(5)
                ));
            }
            data
        }),
    ]
}

fn bench_graphemes(c: &mut Criterion) {
    let test_data = generate_test_data();
    let mut group = c.benchmark_group("segmentation");

    for (name, data) in test_data.iter() {
        group.bench_with_input(BenchmarkId::new("graphemes", name), data, |b, data| {
            b.iter(|| {
                let mut rest = std_black_box(data.as_str());
                let mut cursor = GraphemeCursor::START;
                let mut width = 0;
                while !rest.is_empty() {
                    let (_, next, cluster_width, next_cursor) =
                        first_grapheme_cluster(rest, cursor);
                    width += cluster_width;
                    rest = next;
                    cursor = next_cursor;
                }
                width
            });
        });

        group.bench_with_input(BenchmarkId::new("words", name), data, |b, data| {
            b.iter(|| {
                let mut rest = std_black_box(data.as_str());
                let mut cursor = WordCursor::START;
                let mut count = 0;
                while !rest.is_empty() {
                    let (_, next, next_cursor) = first_word(rest, cursor);
                    count += 1;
                    rest = next;
                    cursor = next_cursor;
                }
                count
            });
        });

        group.bench_with_input(BenchmarkId::new("sentences", name), data, |b, data| {
            b.iter(|| {
                let mut rest = std_black_box(data.as_str());
                let mut cursor = SentenceCursor::START;
                let mut count = 0;
                while !rest.is_empty() {
                    let (_, next, next_cursor) = first_sentence(rest, cursor);
                    count += 1;
                    rest = next;
                    cursor = next_cursor;
                }
                count
            });
        });

        group.bench_with_input(BenchmarkId::new("lines", name), data, |b, data| {
            b.iter(|| {
                let mut rest = std_black_box(data.as_str());
                let mut cursor = LineCursor::START;
                let mut count = 0;
                while !rest.is_empty() {
                    let (_, next, _, next_cursor) = first_line_segment(rest, cursor);
                    count += 1;
                    rest = next;
                    cursor = next_cursor;
                }
                count
            });
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let test_data = generate_test_data();
    let mut group = c.benchmark_group("step");

    for (name, data) in test_data.iter() {
        group.bench_with_input(BenchmarkId::new("step", name), data, |b, data| {
            b.iter(|| {
                let mut rest = std_black_box(data.as_str());
                let mut cursor = StepCursor::START;
                let mut width = 0;
                while !rest.is_empty() {
                    let (_, next, boundaries, next_cursor) = step(rest, cursor);
                    width += boundaries.width();
                    rest = next;
                    cursor = next_cursor;
                }
                width
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", name), data, |b, data| {
            b.iter(|| lapa::Graphemes::new(std_black_box(data.as_str())).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_graphemes, bench_step);
criterion_main!(benches);
