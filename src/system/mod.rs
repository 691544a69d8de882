//! The simulation engine: owns the particle array and all physical state,
//! and advances the system one velocity-Verlet step at a time.

pub mod init;
pub mod properties;
pub mod step;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::atoms::Atom;
use crate::constants::{reduced_from_kelvin, MARGIN};
use crate::ensemble::{Ensemble, TempControl};
use crate::errors::{ArgonMdError, Result};
use crate::neighbour::{Pair, PairListBuilder};
use crate::potentials::lennard_jones::LennardJones;
use crate::simulation_box::SimulationBox;

/// Initial configuration of a [`System`].
#[derive(Clone, Debug)]
pub struct SystemConfig {
    /// Supercell replication count per axis; the lattice holds 4·Nc³ atoms.
    pub supercell_count: u32,
    /// Scale applied to the FCC lattice constant.
    pub lattice_scale: f64,
    /// Target temperature in kelvin.
    pub temperature: f64,
    pub ensemble: Ensemble,
    pub temp_control: TempControl,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            supercell_count: 6,
            lattice_scale: 1.0,
            temperature: 50.0,
            ensemble: Ensemble::Nvt,
            temp_control: TempControl::default(),
            seed: None,
        }
    }
}

/// The molecular dynamics engine.
///
/// Whoever drives the step loop owns the instance; visualization or logging
/// collaborators borrow it between completed steps through the read-only
/// accessors in [`properties`](crate::system::properties).
pub struct System {
    atoms: Vec<Atom>,
    pairs: Vec<Pair>,
    builder: PairListBuilder,
    sim_box: SimulationBox,
    lj: LennardJones,
    rng: SmallRng,

    nc: u32,
    scale: f64,
    /// Lattice constant, reduced units.
    lat: f64,
    ensemble: Ensemble,
    temp_control: TempControl,

    /// Target temperature, reduced.
    tg: f64,
    /// Instantaneous temperature measured this step, reduced.
    tc: f64,
    /// Kinetic, potential and total energy, reduced.
    uk: f64,
    up: f64,
    utot: f64,
    virial: f64,

    /// Remaining skin-margin budget before the pair list must be rebuilt.
    margin_life: f64,
    rebuilds: u64,

    /// Step counter; starts at 1 after every recompute.
    md_iter: u64,
    /// Elapsed reduced time.
    t: f64,
}

impl System {
    pub fn new(config: SystemConfig) -> Result<Self> {
        Self::validate_supercell_count(config.supercell_count)?;
        Self::validate_lattice_scale(config.lattice_scale)?;
        Self::validate_temperature(config.temperature)?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut system = Self {
            atoms: Vec::new(),
            pairs: Vec::new(),
            builder: PairListBuilder::Exhaustive,
            sim_box: SimulationBox::new(1.0),
            lj: LennardJones::new(),
            rng,
            nc: config.supercell_count,
            scale: config.lattice_scale,
            lat: 0.0,
            ensemble: config.ensemble,
            temp_control: config.temp_control,
            tg: reduced_from_kelvin(config.temperature),
            tc: 0.0,
            uk: 0.0,
            up: 0.0,
            utot: 0.0,
            virial: 0.0,
            margin_life: MARGIN,
            rebuilds: 0,
            md_iter: 1,
            t: 0.0,
        };
        system.recompute();
        Ok(system)
    }

    /// Updates the target temperature. Takes effect on the next step's
    /// thermostat application; does not reinitialize the run.
    pub fn set_temperature_target(&mut self, kelvin: f64) -> Result<()> {
        Self::validate_temperature(kelvin)?;
        self.tg = reduced_from_kelvin(kelvin);
        Ok(())
    }

    /// Updates the lattice scale and reinitializes positions, momenta and
    /// the pair list. A smaller box may flip the neighbour strategy to the
    /// exhaustive search.
    pub fn set_lattice_scale(&mut self, scale: f64) -> Result<()> {
        Self::validate_lattice_scale(scale)?;
        self.scale = scale;
        self.recompute();
        Ok(())
    }

    /// Updates the supercell replication count and reinitializes the run.
    pub fn set_supercell_count(&mut self, nc: u32) -> Result<()> {
        Self::validate_supercell_count(nc)?;
        self.nc = nc;
        self.recompute();
        Ok(())
    }

    /// Switches between NVE and NVT and reinitializes the run.
    pub fn set_ensemble(&mut self, ensemble: Ensemble) {
        self.ensemble = ensemble;
        self.recompute();
    }

    /// Selects the NVT temperature-control mode and reinitializes the run.
    pub fn set_temp_control(&mut self, temp_control: TempControl) {
        self.temp_control = temp_control;
        self.recompute();
    }

    fn validate_supercell_count(nc: u32) -> Result<()> {
        if nc < 1 {
            return Err(ArgonMdError::InvalidSupercellCount { nc });
        }
        Ok(())
    }

    fn validate_lattice_scale(scale: f64) -> Result<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ArgonMdError::InvalidLatticeScale { scale });
        }
        Ok(())
    }

    fn validate_temperature(kelvin: f64) -> Result<()> {
        if !kelvin.is_finite() || kelvin <= 0.0 {
            return Err(ArgonMdError::InvalidTemperature { kelvin });
        }
        Ok(())
    }
}
