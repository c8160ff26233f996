//! Benchmarks for the compilation pipeline, using the base library as input.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sel::source::BASE;
use sel_syntax::{RenderOptions, lexer, normalize, parser};

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    group.bench_function("lex", |b| b.iter(|| lexer::lex(black_box(BASE))));

    let tokens = lexer::lex(BASE);
    group.bench_function("parse", |b| {
        b.iter(|| parser::parse(black_box(&tokens)).expect("base parses"))
    });

    let raw = parser::parse(&tokens).expect("base parses");
    group.bench_function("normalize", |b| {
        b.iter(|| normalize::normalize(black_box(raw.clone())).expect("base normalizes"))
    });

    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    let program = sel_syntax::compile(BASE).expect("base compiles");
    let options = RenderOptions::default();
    let mut group = c.benchmark_group("render");

    for backend in sel_syntax::backends() {
        group.bench_function(backend.name(), |b| {
            b.iter(|| backend.render(black_box(&program), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_backends);
criterion_main!(benches);
