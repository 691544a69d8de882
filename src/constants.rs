//! Physical constants for argon and the reduced/physical unit conversions.

/// Lennard-Jones σ for argon, in metres.
pub const SIGMA: f64 = 3.405E-10;

/// Lennard-Jones ε for argon, in joules.
pub const EPSILON: f64 = 1.6540172624E-21;

/// The Boltzmann constant, in joules per kelvin.
pub const KB: f64 = 1.3806488E-23;

/// The Avogadro constant, per mole.
pub const AVOGADRO_CONSTANT: f64 = 6.022140857E+23;

/// 1 Hartree, in joules.
pub const HARTREE: f64 = 4.35974465054E-18;

/// Standard atmospheres per pascal.
pub const ATM: f64 = 9.86923266716013E-6;

/// Molar mass of argon, in kilograms per mole.
pub const AR_MOLAR_MASS: f64 = 0.039948;

/// Interaction cutoff radius, reduced units.
pub const RCUTOFF: f64 = 2.5;

/// Verlet-list skin margin beyond the cutoff, reduced units.
pub const MARGIN: f64 = 0.75;

/// Squared pair-list search radius, (RCUTOFF + MARGIN)².
pub const ML2: f64 = (RCUTOFF + MARGIN) * (RCUTOFF + MARGIN);

/// Integration timestep Δt, reduced units.
pub const DT: f64 = 0.0001;

/// The reduced time unit τ for argon, in seconds.
pub fn tau() -> f64 {
    (AR_MOLAR_MASS / AVOGADRO_CONSTANT * SIGMA * SIGMA / EPSILON).sqrt()
}

/// Converts a reduced energy to Hartree.
pub fn hartree_from_reduced(e: f64) -> f64 {
    e * EPSILON / HARTREE
}

/// Converts a reduced temperature to kelvin.
pub fn kelvin_from_reduced(t: f64) -> f64 {
    t * EPSILON / KB
}

/// Converts an absolute temperature in kelvin to reduced units.
pub fn reduced_from_kelvin(kelvin: f64) -> f64 {
    kelvin * KB / EPSILON
}

/// Converts a reduced length to nanometres.
pub fn nm_from_reduced(l: f64) -> f64 {
    SIGMA * l * 1.0E+9
}

/// Converts a reduced time to picoseconds.
pub fn picoseconds_from_reduced(t: f64) -> f64 {
    tau() * t * 1.0E+12
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kelvin_round_trip() {
        let t = reduced_from_kelvin(50.0);
        assert_relative_eq!(kelvin_from_reduced(t), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn search_radius_includes_skin() {
        assert_relative_eq!(ML2.sqrt(), RCUTOFF + MARGIN, max_relative = 1e-15);
    }

    #[test]
    fn tau_is_a_few_picoseconds() {
        let tau = tau();
        assert!(tau > 1.0e-12 && tau < 1.0e-11, "τ = {tau}");
    }
}
