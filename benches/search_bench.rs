use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pleco::Board;
use tactician::search::alphabeta::Searcher;

fn bench_search(c: &mut Criterion) {
    c.bench_function("select_best_move_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::with_table_capacity(1 << 16);
            let mut b = Board::start_pos();
            let r = s.select_best_move(black_box(&mut b), 3);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
