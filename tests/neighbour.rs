//! The cell-list and exhaustive pair searches must return set-equal pair
//! lists for any configuration, including at m = 3, the smallest grid the
//! forward-half stencil supports.

extern crate nalgebra as na;

use std::collections::HashSet;

use na::Vector4;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use argonmd::atoms::Atom;
use argonmd::neighbour::{brute_force, cell_list::CellList, Pair, PairListBuilder};
use argonmd::simulation_box::SimulationBox;

fn random_atoms(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<Atom> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Atom::at(Vector4::new(
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
                0.0,
            ))
        })
        .collect()
}

fn pair_set(pairs: &[Pair]) -> HashSet<Pair> {
    let set: HashSet<Pair> = pairs.iter().copied().collect();
    assert_eq!(set.len(), pairs.len(), "duplicate pairs in the list");
    set
}

fn assert_strategies_agree(length: f64, atoms: &[Atom]) {
    let sim_box = SimulationBox::new(length);

    let mut cells = CellList::new(length);
    let mut from_cells = Vec::new();
    cells.make_pair(atoms, &sim_box, &mut from_cells);

    let mut from_exhaustive = Vec::new();
    brute_force::make_pair(atoms, &sim_box, &mut from_exhaustive);

    let a = pair_set(&from_cells);
    let b = pair_set(&from_exhaustive);

    let missing: Vec<_> = b.difference(&a).collect();
    let extra: Vec<_> = a.difference(&b).collect();
    assert!(
        missing.is_empty() && extra.is_empty(),
        "L = {length}: cell list missing {missing:?}, extra {extra:?}"
    );
}

#[test]
fn grid_resolution_follows_the_box_length() {
    // m = floor(L / (cutoff + skin)) − 1 with cutoff + skin = 3.25.
    assert_eq!(CellList::new(13.2).cells_per_axis(), 3);
    assert_eq!(CellList::new(16.5).cells_per_axis(), 4);
    assert_eq!(CellList::new(26.0).cells_per_axis(), 7);
}

#[test]
fn strategies_agree_on_the_smallest_valid_grid() {
    // L = 13.2 gives exactly m = 3 cells per axis.
    let length = 13.2;
    for seed in [1, 2, 3] {
        let atoms = random_atoms(220, 0.0, length, seed);
        assert_strategies_agree(length, &atoms);
    }
}

#[test]
fn strategies_agree_on_a_mid_sized_grid() {
    let length = 16.5;
    let atoms = random_atoms(400, 0.0, length, 42);
    assert_strategies_agree(length, &atoms);
}

#[test]
fn strategies_agree_on_a_large_grid() {
    let length = 26.0;
    let atoms = random_atoms(900, 0.0, length, 77);
    assert_strategies_agree(length, &atoms);
}

#[test]
fn strategies_agree_before_the_first_wrap() {
    // Lattice initialisation recentres the centre of mass on the origin, so
    // the first rebuild sees negative coordinates.
    let length = 16.5;
    let atoms = random_atoms(350, -length / 2.0, length / 2.0, 9);
    assert_strategies_agree(length, &atoms);
}

#[test]
fn builder_dispatch_matches_the_direct_strategies() {
    let length = 13.2;
    let atoms = random_atoms(150, 0.0, length, 13);
    let sim_box = SimulationBox::new(length);

    let mut builder = PairListBuilder::for_box(length);
    let mut via_builder = Vec::new();
    builder.make_pair(&atoms, &sim_box, &mut via_builder);

    let mut direct = Vec::new();
    CellList::new(length).make_pair(&atoms, &sim_box, &mut direct);

    assert_eq!(pair_set(&via_builder), pair_set(&direct));
}
