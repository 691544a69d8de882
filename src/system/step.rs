//! One integration step: half-kick, pair-list staleness check, pairwise
//! force evaluation, second half-kick, periodic wrap.

use na::Vector4;
use rayon::prelude::*;

use crate::constants::{DT, MARGIN};
use crate::ensemble::{Ensemble, TempControl};

use super::System;

impl System {
    /// Advances the system by one timestep. Synchronous: every internal
    /// parallel region completes before the call returns.
    pub fn step(&mut self) {
        self.move_atoms(false);
        self.check_pairlist();
        self.calc_force_pair();
        self.move_atoms(true);
        self.periodic();

        self.t = self.md_iter as f64 * DT;
        self.md_iter += 1;
    }

    /// Half of the velocity-Verlet update. With `kick` set, the freshly
    /// computed forces enter the momenta first (the full-Δt kick between
    /// the two half drifts).
    ///
    /// The instantaneous kinetic energy, total energy and temperature are
    /// remeasured from the momenta before the ensemble perturbs them.
    fn move_atoms(&mut self, kick: bool) {
        if kick {
            self.atoms.par_iter_mut().for_each(|a| a.p += a.f * DT);
        }

        self.uk = 0.5
            * self
                .atoms
                .par_iter()
                .map(|a| a.p.norm_squared())
                .sum::<f64>();
        self.utot = self.uk + self.up;
        self.tc = self.uk / (1.5 * self.atoms.len() as f64);

        match self.ensemble {
            Ensemble::Nve => {}
            Ensemble::Nvt => match &self.temp_control {
                TempControl::Langevin(thermostat) => {
                    thermostat.apply(&mut self.atoms, self.tg, &mut self.rng)
                }
                TempControl::Rescale(thermostat) => {
                    thermostat.apply(&mut self.atoms, self.tg, self.tc)
                }
            },
        }

        self.atoms
            .par_iter_mut()
            .for_each(|a| a.r += a.p * (DT * 0.5));
    }

    /// Decrements the skin-margin budget by the worst-case closing speed of
    /// any pair and rebuilds the pair list once the budget is spent. While
    /// the budget is nonnegative the list still contains every pair within
    /// the true cutoff.
    fn check_pairlist(&mut self) {
        let vmax2 = self
            .atoms
            .par_iter()
            .map(|a| a.p.norm_squared())
            .reduce(|| 0.0, f64::max);

        self.margin_life -= 2.0 * vmax2.sqrt() * DT;

        if self.margin_life < 0.0 {
            self.margin_life = MARGIN;
            self.builder
                .make_pair(&self.atoms, &self.sim_box, &mut self.pairs);
            self.rebuilds += 1;
            log::debug!(
                "pair list rebuilt at step {} ({} pairs)",
                self.md_iter,
                self.pairs.len()
            );
        }
    }

    /// Pairwise Lennard-Jones forces, potential energy and virial over the
    /// current pair list.
    ///
    /// Pairs sharing an atom can land in different parallel partitions, so
    /// each rayon task accumulates into a private force buffer that is
    /// merged after the parallel pass; the merged buffer then overwrites
    /// every force slot. No task ever writes to the shared array.
    fn calc_force_pair(&mut self) {
        let n = self.atoms.len();
        let atoms = &self.atoms;
        let sim_box = &self.sim_box;
        let lj = &self.lj;
        let rc2 = lj.rc2();

        let (forces, up, virial) = self
            .pairs
            .par_iter()
            .fold(
                || (vec![Vector4::zeros(); n], 0.0, 0.0),
                |(mut f, mut up, mut virial), &(i, j)| {
                    let mut d = atoms[j].r - atoms[i].r;
                    sim_box.minimum_image(&mut d);
                    let r2 = d.norm_squared();

                    if r2 <= rc2 {
                        let dfdr = lj.dfdr(r2);
                        f[i] += d * dfdr;
                        f[j] -= d * dfdr;
                        up += lj.pair_energy(r2);
                        virial += r2 * dfdr;
                    }
                    (f, up, virial)
                },
            )
            .reduce(
                || (vec![Vector4::zeros(); n], 0.0, 0.0),
                |(mut fa, ua, va), (fb, ub, vb)| {
                    for (a, b) in fa.iter_mut().zip(&fb) {
                        *a += *b;
                    }
                    (fa, ua + ub, va + vb)
                },
            );

        self.up = up;
        self.virial = virial;
        for (atom, f) in self.atoms.iter_mut().zip(forces) {
            atom.f = f;
        }
    }

    /// Folds every atom back into the box, one axis at a time.
    fn periodic(&mut self) {
        let sim_box = self.sim_box;
        self.atoms
            .par_iter_mut()
            .for_each(|a| sim_box.wrap(&mut a.r));
    }
}
