use clap::{Parser, ValueEnum};

use argonmd::ensemble::{Ensemble, LangevinThermostat, TempControl, VelocityRescale};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Supercell replication count per axis (4·Nc³ atoms)
    #[arg(short = 'n', long, default_value_t = 6)]
    pub supercell: u32,

    /// Scale applied to the FCC lattice constant
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,

    /// Target temperature in kelvin
    #[arg(short, long, default_value_t = 50.0)]
    pub temperature: f64,

    /// Statistical ensemble
    #[arg(short, long, value_enum, default_value_t = EnsembleArg::Nvt)]
    pub ensemble: EnsembleArg,

    /// Temperature-control mode used by the NVT ensemble
    #[arg(long, value_enum, default_value_t = ThermostatArg::Langevin)]
    pub thermostat: ThermostatArg,

    /// Number of integration steps to run
    #[arg(long, default_value_t = 1000)]
    pub steps: u64,

    /// Print a thermodynamics line every this many steps
    #[arg(long, default_value_t = 100)]
    pub log_every: u64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a LAMMPS-style trajectory dump to this path
    #[arg(long)]
    pub dump: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EnsembleArg {
    Nve,
    Nvt,
}

impl From<EnsembleArg> for Ensemble {
    fn from(arg: EnsembleArg) -> Self {
        match arg {
            EnsembleArg::Nve => Ensemble::Nve,
            EnsembleArg::Nvt => Ensemble::Nvt,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThermostatArg {
    Langevin,
    Rescale,
}

impl From<ThermostatArg> for TempControl {
    fn from(arg: ThermostatArg) -> Self {
        match arg {
            ThermostatArg::Langevin => TempControl::Langevin(LangevinThermostat::default()),
            ThermostatArg::Rescale => TempControl::Rescale(VelocityRescale::default()),
        }
    }
}
