#[macro_use]
extern crate criterion;
extern crate tourney_advisor;

use criterion::{Bencher, BenchmarkId, Criterion};

use tourney_advisor::core::Card;
use tourney_advisor::holdem::{EquitySimulator, HandRange, SimulatorConfig};

fn hole() -> [Card; 2] {
    ["Js".parse().unwrap(), "Jh".parse().unwrap()]
}

fn estimate_preflop(c: &mut Criterion) {
    // Overrides off so the premium shortcut can't hide the
    // simulation cost.
    let simulator = EquitySimulator::with_config(SimulatorConfig {
        premium_overrides: false,
        ..SimulatorConfig::default()
    });
    let hole = hole();
    let mut group = c.benchmark_group("Preflop equity");

    for num_players in [2, 4, 6, 9].iter() {
        let id = BenchmarkId::new("num_players", num_players);
        group.bench_with_input(id, num_players, |b: &mut Bencher, num_players: &usize| {
            b.iter(|| simulator.estimate(&hole, *num_players, &[], None))
        });
    }

    group.finish();
}

fn estimate_versus_range(c: &mut Criterion) {
    let simulator = EquitySimulator::new();
    let hole = hole();
    let range = HandRange::parse("TT+,AQs+").unwrap();

    c.bench_function("Heads up versus range", |b| {
        b.iter(|| simulator.estimate(&hole, 2, &[], Some(&range)))
    });
}

criterion_group!(benches, estimate_preflop, estimate_versus_range);
criterion_main!(benches);
