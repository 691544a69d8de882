//! Lattice and momentum initialization, and the full reinitialization that
//! follows every geometry or ensemble change.

use na::Vector4;
use rand::Rng;

use crate::atoms::Atom;
use crate::constants::MARGIN;
use crate::neighbour::PairListBuilder;
use crate::simulation_box::SimulationBox;

use super::System;

impl System {
    /// Discards the current trajectory and starts over: rebuilds the FCC
    /// lattice, reseeds momenta for the target temperature, reselects the
    /// neighbour strategy for the new box length and rebuilds the pair
    /// list.
    pub fn recompute(&mut self) {
        self.t = 0.0;
        self.md_iter = 1;

        self.lat = 2.0_f64.powf(2.0 / 3.0) * self.scale;

        self.init_positions();
        self.init_momenta();

        let length = self.lat * f64::from(self.nc);
        self.sim_box = SimulationBox::new(length);
        self.builder = PairListBuilder::for_box(length);
        self.builder
            .make_pair(&self.atoms, &self.sim_box, &mut self.pairs);

        self.margin_life = MARGIN;
        self.up = 0.0;
        self.uk = 0.0;
        self.utot = 0.0;
        self.tc = 0.0;
        self.virial = 0.0;
    }

    /// Nc³ FCC unit cells with 4 basis atoms each, recentered so the centre
    /// of mass sits at the origin.
    fn init_positions(&mut self) {
        let nc = self.nc as usize;
        let lat = self.lat;
        let half = 0.5 * lat;

        self.atoms.clear();
        self.atoms.reserve(nc * nc * nc * 4);

        for i in 0..nc {
            for j in 0..nc {
                for k in 0..nc {
                    let sx = i as f64 * lat;
                    let sy = j as f64 * lat;
                    let sz = k as f64 * lat;

                    self.atoms.push(Atom::at(Vector4::new(sx, sy, sz, 0.0)));
                    self.atoms
                        .push(Atom::at(Vector4::new(sx + half, sy + half, sz, 0.0)));
                    self.atoms
                        .push(Atom::at(Vector4::new(sx, sy + half, sz + half, 0.0)));
                    self.atoms
                        .push(Atom::at(Vector4::new(sx + half, sy, sz + half, 0.0)));
                }
            }
        }

        let n = self.atoms.len() as f64;
        let com: Vector4<f64> = self.atoms.iter().map(|a| a.r).sum::<Vector4<f64>>() / n;
        for atom in &mut self.atoms {
            atom.r -= com;
        }
    }

    /// Random directions scaled so every speed matches the target
    /// temperature, then corrected so the total momentum is zero.
    fn init_momenta(&mut self) {
        let v = (3.0 * self.tg).sqrt();

        for atom in &mut self.atoms {
            let dir = Vector4::new(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
                0.0,
            );
            atom.p = dir * (v / dir.norm());
            atom.f = Vector4::zeros();
        }

        let n = self.atoms.len() as f64;
        let drift: Vector4<f64> = self.atoms.iter().map(|a| a.p).sum::<Vector4<f64>>() / n;
        for atom in &mut self.atoms {
            atom.p -= drift;
        }
    }
}
