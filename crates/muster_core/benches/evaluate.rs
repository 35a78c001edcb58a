//! Roster evaluation benchmarks for muster_core.
//!
//! Run with: `cargo bench -p muster_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use muster_core::evaluation::evaluate;
use muster_test_utils::fixtures::{
    add_units, ready_roster, test_catalog, MAIN_BATTLE_UNIT, RESERVE_UNIT, VANGUARD_UNIT,
};

/// Evaluates a fully populated roster, as a UI does after every edit.
pub fn evaluate_benchmark(c: &mut Criterion) {
    let catalog = test_catalog();
    let mut roster = ready_roster("noble");
    roster.select_legendary_leader(Some("joan_of_arc"));
    roster.toggle_retinue_upgrade("destriers", true);
    roster.toggle_character("grizzled_veteran", true);
    for id in add_units(&mut roster, &catalog, MAIN_BATTLE_UNIT, 6) {
        roster.toggle_unit_upgrade(id, "shields", true);
    }
    add_units(&mut roster, &catalog, VANGUARD_UNIT, 3);
    add_units(&mut roster, &catalog, RESERVE_UNIT, 2);
    roster.add_ship("cog");

    c.bench_function("evaluate_full_roster", |b| {
        b.iter(|| evaluate(black_box(&roster), black_box(&catalog)))
    });
}

criterion_group!(benches, evaluate_benchmark);
criterion_main!(benches);
