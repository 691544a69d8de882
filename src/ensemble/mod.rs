//! Ensemble selection and the NVT temperature-control modes.
pub mod nvt;

pub use nvt::{LangevinThermostat, VelocityRescale};

/// The statistical constraint applied to the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ensemble {
    /// Constant particle count, volume and energy; no thermostat.
    Nve,
    /// Constant particle count, volume and temperature.
    Nvt,
}

/// How the NVT ensemble controls the temperature.
#[derive(Clone, Debug)]
pub enum TempControl {
    Langevin(LangevinThermostat),
    Rescale(VelocityRescale),
}

impl Default for TempControl {
    fn default() -> Self {
        Self::Langevin(LangevinThermostat::default())
    }
}
