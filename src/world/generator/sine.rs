use crate::utils::math::remap_unit;
use noise::NoiseFn;

/// Two-axis sine field: `0.7 * remap(sin(x*fx + seed)) + 0.3 * remap(sin(y*fy + seed*k))`.
///
/// Output lies in `[0, 1]`. The field is smooth but strongly periodic, which
/// gives the rolling hills and banded caves this world is built around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineNoise {
    pub seed: f64,
    pub frequency_x: f64,
    pub frequency_y: f64,
    pub seed_factor: f64,
}

impl SineNoise {
    pub const PRIMARY_WEIGHT: f64 = 0.7;
    pub const DETAIL_WEIGHT: f64 = 0.3;

    pub fn new(seed: u32, frequency_x: f64, frequency_y: f64, seed_factor: f64) -> Self {
        Self {
            seed: seed as f64,
            frequency_x,
            frequency_y,
            seed_factor,
        }
    }
}

impl NoiseFn<f64, 2> for SineNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        let primary = remap_unit((point[0] * self.frequency_x + self.seed).sin());
        let detail = remap_unit((point[1] * self.frequency_y + self.seed * self.seed_factor).sin());
        Self::PRIMARY_WEIGHT * primary + Self::DETAIL_WEIGHT * detail
    }
}

/// Adapts a `[-1, 1]` noise source (Perlin and friends) to the `[0, 1]` range
/// the cave threshold is expressed in.
#[derive(Debug, Clone)]
pub struct Remapped<N>(pub N);

impl<N: NoiseFn<f64, 2>> NoiseFn<f64, 2> for Remapped<N> {
    fn get(&self, point: [f64; 2]) -> f64 {
        remap_unit(self.0.get(point)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::Perlin;

    #[test]
    fn test_sine_noise_range_and_determinism() {
        let noise = SineNoise::new(42, 0.1, 0.1, 0.7);
        for x in -50..50 {
            let v = noise.get([x as f64, (x * 3) as f64]);
            assert!((0.0..=1.0).contains(&v));
            assert_eq!(v, noise.get([x as f64, (x * 3) as f64]));
        }
    }

    #[test]
    fn test_sine_noise_matches_formula() {
        let noise = SineNoise::new(0, 0.1, 0.2, 0.7);
        // seed 0: 0.7 * remap(sin(1.0)) + 0.3 * remap(sin(0.4))
        let expected = 0.7 * (1.0f64.sin() * 0.5 + 0.5) + 0.3 * (0.4f64.sin() * 0.5 + 0.5);
        assert!((noise.get([10.0, 2.0]) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_remapped_perlin_in_unit_range() {
        let perlin = Remapped(Perlin::new(9));
        for i in 0..100 {
            let v = perlin.get([i as f64 * 0.37, i as f64 * -0.21]);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
