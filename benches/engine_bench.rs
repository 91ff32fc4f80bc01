use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use kalah::board::{Board, House, Side};
use kalah::movegen::legal_houses;
use kalah::protocol::kfen::{encode_kfen, parse_kfen, INITIAL_KFEN};
use kalah::search::advise;
use kalah::selfplay::{play_game, run_self_play, Opponent, SelfPlayConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const MIDGAME_KFEN: &str = "b/0,5,6,1,0,8/7/2,0,9,3,1,0/6";
const MULTI_LAP_KFEN: &str = "a/30,1,2,0,0,3/0/4,0,1,0,2,5/0";

fn bench_sow_opening(c: &mut Criterion) {
    let board = Board::new();
    let house = House::new(1).unwrap();
    c.bench_function("sow_opening_house_1", |b| {
        b.iter(|| {
            let mut board = black_box(&board).clone();
            board.sow(Side::A, false, black_box(house))
        })
    });
}

fn bench_sow_multi_lap(c: &mut Criterion) {
    let (board, side) = parse_kfen(MULTI_LAP_KFEN).unwrap();
    let house = House::new(1).unwrap();
    c.bench_function("sow_30_seeds", |b| {
        b.iter(|| {
            let mut board = black_box(&board).clone();
            board.sow(side, false, black_box(house))
        })
    });
}

fn bench_advise(c: &mut Criterion) {
    let (midgame, side) = parse_kfen(MIDGAME_KFEN).unwrap();
    let opening = Board::new();
    c.bench_function("advise_opening", |b| {
        b.iter(|| advise(black_box(&opening), Side::B))
    });
    c.bench_function("advise_midgame", |b| {
        b.iter(|| advise(black_box(&midgame), side))
    });
}

fn bench_legal_houses(c: &mut Criterion) {
    let (board, side) = parse_kfen(MIDGAME_KFEN).unwrap();
    c.bench_function("legal_houses_midgame", |b| {
        b.iter(|| legal_houses(black_box(&board), side))
    });
}

fn bench_kfen(c: &mut Criterion) {
    let (board, side) = parse_kfen(MIDGAME_KFEN).unwrap();
    c.bench_function("kfen_parse", |b| {
        b.iter(|| parse_kfen(black_box(INITIAL_KFEN)))
    });
    c.bench_function("kfen_encode", |b| {
        b.iter(|| encode_kfen(black_box(&board), side))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = SelfPlayConfig {
        num_games: 1,
        opponent: Opponent::Random,
        epsilon: 0.0,
        threads: 1,
        seed: 7,
        quiet: true,
        ..SelfPlayConfig::default()
    };
    c.bench_function("selfplay_single_game", |b| {
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| play_game(black_box(&config), 0, &mut rng))
    });
}

fn bench_selfplay_batch(c: &mut Criterion) {
    let config = SelfPlayConfig {
        num_games: 200,
        opponent: Opponent::Advisor,
        threads: 4,
        seed: 11,
        quiet: true,
        ..SelfPlayConfig::default()
    };
    let mut group = c.benchmark_group("selfplay");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("200_games_4_threads", |b| {
        b.iter(|| run_self_play(black_box(&config)))
    });
    group.finish();
}

fn bench_board_clone(c: &mut Criterion) {
    let (board, _) = parse_kfen(MIDGAME_KFEN).unwrap();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

criterion_group!(
    benches,
    bench_sow_opening,
    bench_sow_multi_lap,
    bench_advise,
    bench_legal_houses,
    bench_kfen,
    bench_full_game,
    bench_selfplay_batch,
    bench_board_clone,
);
criterion_main!(benches);
