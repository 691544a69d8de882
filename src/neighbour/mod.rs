//! Neighbour pair-list construction: one interface, two strategies.
//!
//! The cell-list strategy partitions the box into an m×m×m grid and only
//! examines atoms in adjacent cells; it is valid when `m > 2`. Smaller
//! boxes fall back to an exhaustive O(N²) search. Both keep a candidate
//! pair only if its minimum-image squared separation is within the
//! cutoff-plus-skin radius, so the two strategies return set-equal pair
//! lists for the same configuration.

pub mod brute_force;
pub mod cell_list;

use crate::atoms::Atom;
use crate::constants::{MARGIN, RCUTOFF};
use crate::simulation_box::SimulationBox;
use cell_list::CellList;

/// An unordered candidate pair, stored with the smaller index first.
pub type Pair = (usize, usize);

/// The pair-list strategy selected once per rebuild from the box geometry;
/// the two variants are never mixed within a rebuild.
pub enum PairListBuilder {
    Cells(CellList),
    Exhaustive,
}

impl PairListBuilder {
    /// Picks the strategy for a box of the given reduced length.
    ///
    /// The cell decomposition needs more than two cells per axis or the
    /// forward-half stencil aliases onto itself; degenerate geometry is not
    /// an error, it just costs the O(N²) fallback.
    pub fn for_box(length: f64) -> Self {
        let m = (length / (RCUTOFF + MARGIN)) as i64 - 1;
        if m > 2 {
            Self::Cells(CellList::new(length))
        } else {
            log::info!(
                "box length {length:.3} leaves only {m} cells per axis; \
                 falling back to the exhaustive pair search"
            );
            Self::Exhaustive
        }
    }

    /// Rebuilds `pairs` from scratch for the current positions. The old
    /// contents are fully discarded.
    pub fn make_pair(&mut self, atoms: &[Atom], sim_box: &SimulationBox, pairs: &mut Vec<Pair>) {
        match self {
            Self::Cells(cells) => cells.make_pair(atoms, sim_box, pairs),
            Self::Exhaustive => brute_force::make_pair(atoms, sim_box, pairs),
        }
    }
}
