use criterion::{criterion_group, criterion_main, Criterion};
use quickfind::config::MatchTuning;
use quickfind::matcher::{score, MatchTarget};
use std::hint::black_box;

fn bench_matcher(c: &mut Criterion) {
    let tuning = MatchTuning::default();

    c.bench_function("exact", |b| {
        b.iter(|| {
            score(
                black_box("coordinator.rs"),
                black_box("coordinator.rs"),
                MatchTarget::Name,
                &tuning,
            )
        })
    });

    c.bench_function("prefix", |b| {
        b.iter(|| {
            score(
                black_box("coord"),
                black_box("coordinator.rs"),
                MatchTarget::Name,
                &tuning,
            )
        })
    });

    c.bench_function("subsequence_path", |b| {
        b.iter(|| {
            score(
                black_box("crdrs"),
                black_box("src/engine/coordinator.rs"),
                MatchTarget::Path,
                &tuning,
            )
        })
    });

    c.bench_function("miss", |b| {
        b.iter(|| {
            score(
                black_box("zzzzzz"),
                black_box("src/engine/coordinator.rs"),
                MatchTarget::Path,
                &tuning,
            )
        })
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
