//! Exhaustive all-pairs search, the fallback for boxes too small for the
//! cell decomposition.

use rayon::prelude::*;

use crate::atoms::Atom;
use crate::constants::ML2;
use crate::simulation_box::SimulationBox;

use super::Pair;

/// O(N²) rebuild: every unordered pair within the cutoff-plus-skin radius
/// under the minimum image convention.
pub fn make_pair(atoms: &[Atom], sim_box: &SimulationBox, pairs: &mut Vec<Pair>) {
    let n = atoms.len();
    pairs.clear();

    pairs.par_extend(
        (0..n.saturating_sub(1))
            .into_par_iter()
            .flat_map_iter(|i| {
                let mut found = Vec::new();
                for j in (i + 1)..n {
                    let mut d = atoms[j].r - atoms[i].r;
                    sim_box.minimum_image(&mut d);
                    if d.norm_squared() <= ML2 {
                        found.push((i, j));
                    }
                }
                found.into_iter()
            }),
    );
}
