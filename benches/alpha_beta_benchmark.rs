use teeko::alpha_beta_searcher::SearchContext;
use teeko::board::side::Side;
use teeko::teeko_position;
use teeko::teeko_search::search_best_move;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha beta");
    group.sample_size(10);

    group.bench_function("opening depth 4", |b| b.iter(|| search_opening(4, false)));
    group.bench_function("opening depth 4 parallel", |b| {
        b.iter(|| search_opening(4, true))
    });
    group.bench_function("movement depth 5", |b| b.iter(search_movement));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_opening(depth: u8, parallel: bool) {
    let board = teeko_position! {
        .....
        .....
        ..X..
        ...O.
        .....
    };
    let mut context = SearchContext::with_parallel(depth, parallel);
    let outcome = search_best_move(&mut context, &board, Side::A, Side::A).unwrap();
    assert!(outcome.best_move.is_some());
}

fn search_movement() {
    let board = teeko_position! {
        X...O
        .X.O.
        ..X..
        .O...
        X...O
    };
    let mut context = SearchContext::new(5);
    let outcome = search_best_move(&mut context, &board, Side::A, Side::A).unwrap();
    assert!(outcome.best_move.is_some());
}
