//! Read-only queries. Physical-unit values are recomputed from the
//! authoritative reduced-unit state at call time; nothing is cached.

use crate::atoms::Atom;
use crate::constants::{
    hartree_from_reduced, kelvin_from_reduced, nm_from_reduced, picoseconds_from_reduced, ATM,
    EPSILON, SIGMA,
};

use super::System;

impl System {
    /// Immutable view of the particle array, reduced units.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Magnitude of the force on atom `n`, reduced units.
    pub fn force_norm(&self, n: usize) -> f64 {
        self.atoms[n].f.norm()
    }

    /// Current step counter; 1 right after a recompute.
    pub fn step_count(&self) -> u64 {
        self.md_iter
    }

    pub fn supercell_count(&self) -> u32 {
        self.nc
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Periodic box length, reduced units.
    pub fn box_length(&self) -> f64 {
        self.sim_box.length()
    }

    /// Elapsed simulated time in picoseconds.
    pub fn elapsed_picoseconds(&self) -> f64 {
        picoseconds_from_reduced(self.t)
    }

    /// Lattice constant in nanometres.
    pub fn lattice_constant_nm(&self) -> f64 {
        nm_from_reduced(self.lat)
    }

    /// Periodic box length in nanometres.
    pub fn box_length_nm(&self) -> f64 {
        nm_from_reduced(self.sim_box.length())
    }

    /// Target temperature in kelvin.
    pub fn target_temperature_kelvin(&self) -> f64 {
        kelvin_from_reduced(self.tg)
    }

    /// Temperature measured from the momenta this step, in kelvin.
    pub fn measured_temperature_kelvin(&self) -> f64 {
        kelvin_from_reduced(self.tc)
    }

    pub fn kinetic_energy_hartree(&self) -> f64 {
        hartree_from_reduced(self.uk)
    }

    pub fn potential_energy_hartree(&self) -> f64 {
        hartree_from_reduced(self.up)
    }

    pub fn total_energy_hartree(&self) -> f64 {
        hartree_from_reduced(self.utot)
    }

    /// Instantaneous pressure in atmospheres, from the ideal-gas term plus
    /// the virial.
    pub fn pressure_atm(&self) -> f64 {
        let volume = (SIGMA * self.sim_box.length()).powi(3);
        let ideal = self.atoms.len() as f64 * EPSILON * self.tc;
        (ideal - self.virial * EPSILON / 3.0) / volume * ATM
    }
}
