use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_sim::prelude::*;

fn three_zeros() -> Dfa {
    "states: q1,q2,q3,q4\nalphabet: 0,1\nstart: q1\naccept: q4\ntransitions:\nq1,0,q2\nq1,1,q1\nq2,0,q3\nq2,1,q1\nq3,0,q4\nq3,1,q1\nq4,0,q4\nq4,1,q4\n"
        .parse()
        .unwrap()
}

fn accepts_long_words(c: &mut Criterion) {
    let dfa = three_zeros();
    let mut group = c.benchmark_group("accepts");
    for len in [1_000usize, 100_000, 1_000_000] {
        let word = "10".repeat(len / 2);
        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| dfa.accepts(black_box(word.as_str())))
        });
    }
    group.finish();
}

fn run_long_words(c: &mut Criterion) {
    let dfa = three_zeros();
    let word = "1001".repeat(25_000);
    c.bench_function("run 100000", |b| {
        b.iter(|| dfa.simulator().run(black_box(word.as_str())).map(|run| run.len()))
    });
}

criterion_group!(benches, accepts_long_words, run_long_words);
criterion_main!(benches);
