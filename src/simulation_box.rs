use na::Vector4;

/// The cubic periodic domain, side length in reduced units.
#[derive(Clone, Copy, Debug)]
pub struct SimulationBox {
    length: f64,
}

impl SimulationBox {
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn half_length(&self) -> f64 {
        self.length * 0.5
    }

    /// Replaces a raw displacement with the shortest equivalent vector under
    /// periodic wrap-around (the minimum image convention).
    ///
    /// Each component is corrected independently and at most once; the
    /// skin/cutoff constraints guarantee a raw component never exceeds L/2
    /// by more than one box length.
    pub fn minimum_image(&self, d: &mut Vector4<f64>) {
        let lh = self.half_length();
        for k in 0..3 {
            if d[k] < -lh {
                d[k] += self.length;
            } else if d[k] > lh {
                d[k] -= self.length;
            }
        }
    }

    /// Folds a position back into [0, L) per axis, tolerating at most one
    /// box length of displacement.
    pub fn wrap(&self, r: &mut Vector4<f64>) {
        for k in 0..3 {
            if r[k] >= self.length {
                r[k] -= self.length;
            } else if r[k] < 0.0 {
                r[k] += self.length;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimum_image_shortens_long_components() {
        let sim_box = SimulationBox::new(10.0);
        let raw = Vector4::new(5.2, -6.1, 2.0, 0.0);
        let mut d = raw;
        sim_box.minimum_image(&mut d);

        for k in 0..3 {
            assert!(d[k].abs() <= sim_box.half_length() + 1e-12);
            let shift = (raw[k] - d[k]) / sim_box.length();
            assert_relative_eq!(shift, shift.round(), epsilon = 1e-12);
        }
        assert_relative_eq!(d[0], -4.8, epsilon = 1e-12);
        assert_relative_eq!(d[1], 3.9, epsilon = 1e-12);
        assert_relative_eq!(d[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn minimum_image_leaves_short_vectors_alone() {
        let sim_box = SimulationBox::new(10.0);
        let mut d = Vector4::new(1.0, -4.9, 0.0, 0.0);
        let before = d;
        sim_box.minimum_image(&mut d);
        assert_eq!(d, before);
    }

    #[test]
    fn wrap_lands_in_box_and_is_idempotent() {
        let sim_box = SimulationBox::new(7.5);
        let mut r = Vector4::new(-0.3, 8.1, 7.5, 0.0);
        sim_box.wrap(&mut r);

        for k in 0..3 {
            assert!((0.0..sim_box.length()).contains(&r[k]), "r[{k}] = {}", r[k]);
        }

        let once = r;
        sim_box.wrap(&mut r);
        assert_eq!(r, once);
    }
}
