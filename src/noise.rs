use rand::{Rng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::error::{AquarelaError, AquarelaResult};

/// Sigma of the native grain noise, matched to the paper texture preset.
pub const GRAIN_SIGMA: f32 = 12.0;

/// Floor of the uniform fallback range; values land in [240, 252).
pub const FALLBACK_FLOOR: u8 = 240;
pub const FALLBACK_SPAN: u8 = 12;

/// A source of monochrome noise samples.
///
/// Two variants exist: [`EffectNoise`] (Gaussian, the native backend) and
/// [`UniformFallback`]. Callers see no difference beyond timing; the pipeline
/// switches to the fallback if the native backend errors.
pub trait NoiseSource {
    fn fill(&mut self, rng: &mut StdRng, dst: &mut [u8]) -> AquarelaResult<()>;
}

/// Gaussian monochrome noise centered at mid-gray.
pub struct EffectNoise {
    normal: Normal<f64>,
}

impl EffectNoise {
    pub fn new(sigma: f32) -> AquarelaResult<Self> {
        // Normal::new only rejects non-finite std-devs; guard the rest here.
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(AquarelaError::noise(format!(
                "grain sigma must be finite and > 0, got {sigma}"
            )));
        }
        let normal = Normal::new(128.0, f64::from(sigma))
            .map_err(|e| AquarelaError::noise(format!("bad grain sigma {sigma}: {e}")))?;
        Ok(Self { normal })
    }
}

impl NoiseSource for EffectNoise {
    fn fill(&mut self, rng: &mut StdRng, dst: &mut [u8]) -> AquarelaResult<()> {
        for px in dst.iter_mut() {
            *px = self.normal.sample(rng).clamp(0.0, 255.0) as u8;
        }
        Ok(())
    }
}

/// Per-pixel uniform noise in [240, 252), used when the native backend fails.
pub struct UniformFallback;

impl UniformFallback {
    pub fn fill_uniform(rng: &mut StdRng, dst: &mut [u8]) {
        for px in dst.iter_mut() {
            *px = FALLBACK_FLOOR + rng.gen_range(0..FALLBACK_SPAN);
        }
    }
}

impl NoiseSource for UniformFallback {
    fn fill(&mut self, rng: &mut StdRng, dst: &mut [u8]) -> AquarelaResult<()> {
        Self::fill_uniform(rng, dst);
        Ok(())
    }
}

/// Pick the grain backend: the native Gaussian source when its parameters
/// are valid, otherwise the uniform fallback.
pub fn select_noise_source(sigma: f32) -> Box<dyn NoiseSource> {
    match EffectNoise::new(sigma) {
        Ok(native) => Box::new(native),
        Err(err) => {
            tracing::warn!(%err, "grain noise backend unavailable, using uniform fallback");
            Box::new(UniformFallback)
        }
    }
}

/// Fill `dst` from the selected backend, recovering locally if the native
/// source fails mid-fill.
///
/// This is the only recovery path in the pipeline; the caller never observes
/// the failure.
pub fn fill_grain(rng: &mut StdRng, dst: &mut [u8], sigma: f32) {
    let mut source = select_noise_source(sigma);
    if let Err(err) = source.fill(rng, dst) {
        tracing::warn!(%err, "grain fill failed, using uniform fallback");
        UniformFallback::fill_uniform(rng, dst);
    }
}
