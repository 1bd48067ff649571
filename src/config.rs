use std::path::PathBuf;

use crate::error::{AquarelaError, AquarelaResult};

pub const DEFAULT_OUTPUT_PATH: &str = "public/assets/_bg_aquarela.png";

/// High resolution for print.
pub const DEFAULT_WIDTH_PX: u32 = 2000;

pub const DEFAULT_SEED: u64 = 12;

/// Height for an A4 landscape sheet (210:297) at the given width.
pub fn a4_landscape_height(width_px: u32) -> u32 {
    (f64::from(width_px) * (210.0 / 297.0)).round() as u32
}

#[derive(Clone, Debug)]
pub struct SynthesisConfig {
    pub output_path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
    pub seed: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width_px: DEFAULT_WIDTH_PX,
            height_px: a4_landscape_height(DEFAULT_WIDTH_PX),
            seed: DEFAULT_SEED,
        }
    }
}

impl SynthesisConfig {
    pub fn validate(&self) -> AquarelaResult<()> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(AquarelaError::validation(
                "canvas dimensions must be positive",
            ));
        }
        (self.width_px as usize)
            .checked_mul(self.height_px as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| AquarelaError::validation("canvas byte size overflow"))?;
        Ok(())
    }
}
