use ovalis_data::geometry::{Ellipse, Point};
use rand::{prelude::StdRng, SeedableRng};
use tracing::debug;

/// Owns the random number generator used to pick points inside shapes
///
/// Use [`Sampler::from_seed`] wherever the same sequence of points has to come out every time,
/// e.g. in tests.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn point_in(&mut self, ellipse: &Ellipse) -> Point {
        ellipse.random(&mut self.rng)
    }

    pub fn point_in_into<'a>(&mut self, ellipse: &Ellipse, out: &'a mut Point) -> &'a mut Point {
        ellipse.random_into(&mut self.rng, out)
    }

    /// Picks `count` points inside `ellipse`
    pub fn scatter(&mut self, ellipse: &Ellipse, count: usize) -> Vec<Point> {
        if ellipse.w <= 0.0 || ellipse.h <= 0.0 {
            debug!("Scattering {count} points over the degenerate ellipse {ellipse}");
        }

        (0..count).map(|_| self.point_in(ellipse)).collect()
    }

    /// Direct access to the generator, for drawing values that aren't points
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}
