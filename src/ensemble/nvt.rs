use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use crate::atoms::Atom;
use crate::constants::DT;

/// Langevin thermostat: a stochastic Ornstein-Uhlenbeck update applied to
/// every momentum component before the half-kick.
#[derive(Clone, Debug)]
pub struct LangevinThermostat {
    /// Damping coefficient γ.
    pub gamma: f64,
}

impl Default for LangevinThermostat {
    fn default() -> Self {
        Self { gamma: 1.0 }
    }
}

impl LangevinThermostat {
    /// `p += (−γ·p + ξ)·Δt` per component, with ξ drawn from
    /// Normal(0, sqrt(2γ·T_target/Δt)).
    ///
    /// Runs serially so the whole update consumes a single RNG stream.
    pub fn apply(&self, atoms: &mut [Atom], t_target: f64, rng: &mut impl Rng) {
        let d = (2.0 * self.gamma * t_target / DT).sqrt();
        let noise = Normal::new(0.0, d).expect("noise width is positive for a valid temperature");

        for atom in atoms {
            for k in 0..3 {
                atom.p[k] += (-self.gamma * atom.p[k] + noise.sample(rng)) * DT;
            }
        }
    }
}

/// Woodcock velocity rescaling: momenta are scaled so the instantaneous
/// temperature relaxes toward the target by a fixed fraction each
/// application.
#[derive(Clone, Debug)]
pub struct VelocityRescale {
    /// Relaxation coefficient α.
    pub alpha: f64,
}

impl Default for VelocityRescale {
    fn default() -> Self {
        Self { alpha: 0.2 }
    }
}

impl VelocityRescale {
    /// Scales every momentum by `sqrt((T_target + α·(T_current − T_target)) / T_current)`.
    /// Skipped when the current temperature is not positive (nothing to rescale).
    pub fn apply(&self, atoms: &mut [Atom], t_target: f64, t_current: f64) {
        if t_current <= 0.0 {
            return;
        }
        let s = ((t_target + self.alpha * (t_current - t_target)) / t_current).sqrt();
        atoms.par_iter_mut().for_each(|atom| atom.p *= s);
    }
}
