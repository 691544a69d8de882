//! Spatial cell decomposition of the periodic box.
//!
//! The box is cut into an m×m×m grid with every cell wider than the
//! cutoff-plus-skin radius, so all interacting pairs live in the same or
//! adjacent cells. Atom indices are counting-sorted into a flat buffer per
//! cell, and candidate pairs are enumerated per cell against a canonical
//! forward half of its 26 neighbours, covering each unordered cell pair
//! exactly once over the whole grid.

use crate::atoms::Atom;
use crate::constants::{MARGIN, ML2, RCUTOFF};
use crate::simulation_box::SimulationBox;

use super::Pair;

/// The 13 forward-half neighbour offsets: +x, the four (x, y) combinations
/// at iy+1, and all nine (x, y) combinations at iz+1. The reverse half of
/// the stencil is covered when the neighbour cell runs its own search.
const FORWARD_OFFSETS: [(isize, isize, isize); 13] = [
    (1, 0, 0),
    (-1, 1, 0),
    (0, 1, 0),
    (1, 1, 0),
    (-1, -1, 1),
    (0, -1, 1),
    (1, -1, 1),
    (-1, 0, 1),
    (0, 0, 1),
    (1, 0, 1),
    (-1, 1, 1),
    (0, 1, 1),
    (1, 1, 1),
];

pub struct CellList {
    /// Cells per axis; must exceed 2 or the stencil aliases.
    m: usize,
    cell_size: f64,
    /// Per-cell occupancy, rebuilt on every `make_pair`.
    count: Vec<usize>,
    /// Exclusive prefix sums of `count`: where each cell's slice of the
    /// sorted buffer starts.
    offsets: Vec<usize>,
    /// Atom indices ordered by cell id; the slice
    /// `[offsets[c], offsets[c] + count[c])` holds exactly the atoms in
    /// cell `c`.
    sorted: Vec<usize>,
    /// Scratch: cell id of each atom, kept between the tally and scatter
    /// passes.
    cell_of: Vec<usize>,
}

impl CellList {
    /// Only reachable when the box supports `m > 2`; callers select the
    /// exhaustive strategy otherwise.
    pub fn new(length: f64) -> Self {
        let sl = RCUTOFF + MARGIN;
        let m = (length / sl) as usize - 1;
        let cell_size = length / m as f64;

        debug_assert!(m > 2);
        debug_assert!(cell_size > sl);

        let n_cells = m * m * m;
        Self {
            m,
            cell_size,
            count: vec![0; n_cells],
            offsets: vec![0; n_cells],
            sorted: Vec::new(),
            cell_of: Vec::new(),
        }
    }

    /// Cells per axis.
    pub fn cells_per_axis(&self) -> usize {
        self.m
    }

    /// Rebuilds the pair list in one pass: sort atoms into cells, then
    /// enumerate intra-cell pairs plus pairs against the forward-half
    /// stencil, keeping candidates within the cutoff-plus-skin radius.
    pub fn make_pair(&mut self, atoms: &[Atom], sim_box: &SimulationBox, pairs: &mut Vec<Pair>) {
        let n = atoms.len();
        let n_cells = self.m * self.m * self.m;
        let m = self.m as isize;
        let inv = 1.0 / self.cell_size;

        self.count.clear();
        self.count.resize(n_cells, 0);
        self.cell_of.clear();
        self.cell_of.reserve(n);

        for atom in atoms {
            let ix = (atom.r[0] * inv).floor() as isize;
            let iy = (atom.r[1] * inv).floor() as isize;
            let iz = (atom.r[2] * inv).floor() as isize;

            // Periodic wrap into [0, m), not a clamp.
            let ix = ix.rem_euclid(m) as usize;
            let iy = iy.rem_euclid(m) as usize;
            let iz = iz.rem_euclid(m) as usize;

            let id = ix + iy * self.m + iz * self.m * self.m;
            self.count[id] += 1;
            self.cell_of.push(id);
        }

        self.offsets.clear();
        self.offsets.resize(n_cells, 0);
        let mut sum = 0;
        for c in 0..n_cells {
            self.offsets[c] = sum;
            sum += self.count[c];
        }

        self.sorted.clear();
        self.sorted.resize(n, 0);
        let mut cursor = self.offsets.clone();
        for (i, &c) in self.cell_of.iter().enumerate() {
            self.sorted[cursor[c]] = i;
            cursor[c] += 1;
        }

        pairs.clear();
        for id in 0..n_cells {
            self.search(id, atoms, sim_box, pairs);
        }
    }

    fn search(&self, id: usize, atoms: &[Atom], sim_box: &SimulationBox, pairs: &mut Vec<Pair>) {
        let m = self.m as isize;
        let ix = (id % self.m) as isize;
        let iy = ((id / self.m) % self.m) as isize;
        let iz = (id / (self.m * self.m)) as isize;

        for &(dx, dy, dz) in FORWARD_OFFSETS.iter() {
            let jx = (ix + dx).rem_euclid(m) as usize;
            let jy = (iy + dy).rem_euclid(m) as usize;
            let jz = (iz + dz).rem_euclid(m) as usize;

            let other = jx + jy * self.m + jz * self.m * self.m;
            self.search_other(id, other, atoms, sim_box, pairs);
        }

        // All unordered pairs within the cell itself.
        let start = self.offsets[id];
        let end = start + self.count[id];
        for k in start..end {
            for l in (k + 1)..end {
                Self::consider(self.sorted[k], self.sorted[l], atoms, sim_box, pairs);
            }
        }
    }

    fn search_other(
        &self,
        id: usize,
        other: usize,
        atoms: &[Atom],
        sim_box: &SimulationBox,
        pairs: &mut Vec<Pair>,
    ) {
        for k in self.offsets[id]..self.offsets[id] + self.count[id] {
            for l in self.offsets[other]..self.offsets[other] + self.count[other] {
                Self::consider(self.sorted[k], self.sorted[l], atoms, sim_box, pairs);
            }
        }
    }

    fn consider(i: usize, j: usize, atoms: &[Atom], sim_box: &SimulationBox, pairs: &mut Vec<Pair>) {
        let mut d = atoms[j].r - atoms[i].r;
        sim_box.minimum_image(&mut d);

        if d.norm_squared() <= ML2 {
            pairs.push(if i < j { (i, j) } else { (j, i) });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use na::Vector4;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

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

    #[test]
    fn counting_sort_partitions_all_atoms() {
        let length = 16.5;
        let atoms = random_atoms(300, 0.0, length, 11);
        let sim_box = SimulationBox::new(length);
        let mut cells = CellList::new(length);
        let mut pairs = Vec::new();

        cells.make_pair(&atoms, &sim_box, &mut pairs);

        let total: usize = cells.count.iter().sum();
        assert_eq!(total, atoms.len());

        let mut seen = vec![false; atoms.len()];
        for c in 0..cells.count.len() {
            for k in cells.offsets[c]..cells.offsets[c] + cells.count[c] {
                let i = cells.sorted[k];
                assert!(!seen[i], "atom {i} sorted into two cells");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn negative_coordinates_wrap_into_the_grid() {
        // Centre-of-mass-at-origin configurations put half the atoms at
        // negative coordinates before the first periodic wrap.
        let length = 13.2;
        let atoms = random_atoms(200, -length / 2.0, length / 2.0, 3);
        let sim_box = SimulationBox::new(length);
        let mut cells = CellList::new(length);
        let mut pairs = Vec::new();

        cells.make_pair(&atoms, &sim_box, &mut pairs);
        assert_eq!(cells.count.iter().sum::<usize>(), atoms.len());
    }

    #[test]
    fn pair_list_has_no_duplicates() {
        let length = 13.2;
        let atoms = random_atoms(250, 0.0, length, 5);
        let sim_box = SimulationBox::new(length);
        let mut cells = CellList::new(length);
        let mut pairs = Vec::new();

        cells.make_pair(&atoms, &sim_box, &mut pairs);

        let unique: std::collections::HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(unique.len(), pairs.len());
    }
}
