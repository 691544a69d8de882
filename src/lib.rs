//! Molecular dynamics of Lennard-Jones argon in a cubic periodic box.
//!
//! All internal math runs in reduced units (σ = ε = m = 1); physical values
//! are derived only at query time through the accessors on
//! [`system::System`]. The engine supports the NVE and NVT ensembles, the
//! latter with a selectable Langevin or Woodcock velocity-rescaling
//! thermostat, and builds its neighbour pair list either through a spatial
//! cell decomposition or an exhaustive all-pairs search depending on the
//! box geometry.

extern crate nalgebra as na;

pub mod atoms;
pub mod constants;
pub mod ensemble;
pub mod errors;
pub mod neighbour;
pub mod potentials;
pub mod simulation_box;
pub mod system;
pub mod writers;
