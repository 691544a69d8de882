use na::Vector4;

/// One simulated particle, in reduced units.
///
/// Three components of each vector are active; the fourth exists for
/// alignment and stays at exactly 0.0 for the life of the run. The force is
/// recomputed from scratch every step before it is used; position and
/// momentum persist across steps.
#[derive(Clone, Copy, Debug)]
pub struct Atom {
    /// Position.
    pub r: Vector4<f64>,
    /// Momentum (mass is 1 in reduced units, so also the velocity).
    pub p: Vector4<f64>,
    /// Force accumulated during the current step.
    pub f: Vector4<f64>,
}

impl Atom {
    /// An atom at rest at the given position.
    pub fn at(r: Vector4<f64>) -> Self {
        Self {
            r,
            p: Vector4::zeros(),
            f: Vector4::zeros(),
        }
    }
}
