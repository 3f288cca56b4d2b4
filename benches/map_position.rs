use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dubplay::{map_position, Language, Segment};

fn build_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 6.0;
            let start_secondary = i as f64 * 7.5;
            Segment {
                start,
                end: start + 5.0,
                duration: 5.0,
                speaker: format!("SPEAKER_{:02}", i % 4),
                text_primary: String::new(),
                text_secondary: String::new(),
                start_secondary: Some(start_secondary),
                end_secondary: Some(start_secondary + 6.5),
                duration_secondary: Some(6.5),
            }
        })
        .collect()
}

fn bench_map_position(c: &mut Criterion) {
    let segments = build_segments(500);
    let last_end = segments.last().map(|s| s.end).unwrap_or(0.0);

    c.bench_function("map_position mid-recording", |b| {
        b.iter(|| {
            map_position(
                black_box(last_end / 2.0),
                Language::Original,
                Language::Translated,
                &segments,
            )
        })
    });

    c.bench_function("map_position overflow", |b| {
        b.iter(|| {
            map_position(
                black_box(last_end + 30.0),
                Language::Original,
                Language::Translated,
                &segments,
            )
        })
    });
}

criterion_group!(benches, bench_map_position);
criterion_main!(benches);
