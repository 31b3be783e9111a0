use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xoxo_search::core::PlayerMark;
use xoxo_search::game::tictactoe::TTTBoard;
use xoxo_search::search::{alpha_beta_root, minimax, MoveOrder, OrderPreset, SearchStats};

fn criterion_benchmark(c: &mut Criterion) {
    let empty = TTTBoard::new();
    let midgame: TTTBoard = "x   o    ".parse().unwrap();

    let mut group = c.benchmark_group("ttt-empty-board");
    group.sample_size(10);
    group.bench_function("minimax", |b| {
        b.iter(|| {
            let mut stats = SearchStats::default();
            black_box(minimax(
                &empty,
                PlayerMark::Cross,
                PlayerMark::Cross,
                &MoveOrder::default(),
                &mut stats,
            ))
        })
    });
    for preset in [
        OrderPreset::Linear,
        OrderPreset::CenterFirst,
        OrderPreset::CenterCorners,
        OrderPreset::CenterCornersDiagonal,
    ] {
        let order = MoveOrder::from(preset);
        group.bench_function(format!("alpha-beta-{preset:?}"), |b| {
            b.iter(|| {
                let mut stats = SearchStats::default();
                black_box(alpha_beta_root(
                    &empty,
                    PlayerMark::Cross,
                    PlayerMark::Cross,
                    &order,
                    &mut stats,
                ))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("ttt-midgame");
    group.bench_function("minimax", |b| {
        b.iter(|| {
            let mut stats = SearchStats::default();
            black_box(minimax(
                &midgame,
                PlayerMark::Cross,
                PlayerMark::Cross,
                &MoveOrder::default(),
                &mut stats,
            ))
        })
    });
    group.bench_function("alpha-beta", |b| {
        b.iter(|| {
            let mut stats = SearchStats::default();
            black_box(alpha_beta_root(
                &midgame,
                PlayerMark::Cross,
                PlayerMark::Cross,
                &MoveOrder::default(),
                &mut stats,
            ))
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
