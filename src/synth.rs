use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;
use image::{
    RgbImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    blur_cpu::blur_rgba8,
    composite_cpu::{flatten_over_rgb, over_in_place},
    config::SynthesisConfig,
    draw::{paint_corner_splashes, paint_header_wash},
    error::{AquarelaError, AquarelaResult},
    grain::blend_grain,
    noise::{GRAIN_SIGMA, fill_grain},
};

/// Near-white base fill, the "aged paper" tone.
pub const BASE_FILL: [u8; 3] = [247, 246, 238];

/// Blur sigmas for the two overlay passes; the wash diffuses wider.
pub const SPLASH_BLUR_SIGMA: f32 = 38.0;
pub const WASH_BLUR_SIGMA: f32 = 55.0;

/// Synthesize the watercolor paper background.
///
/// Single linear pass: seed → base → grain → corner splashes → blur →
/// header wash → blur → composite → flatten. All randomness comes from one
/// `StdRng` seeded from the config, so equal configs give equal pixels.
#[tracing::instrument(skip_all, fields(width = cfg.width_px, height = cfg.height_px, seed = cfg.seed))]
pub fn synthesize(cfg: &SynthesisConfig) -> AquarelaResult<RgbImage> {
    cfg.validate()?;
    let (w, h) = (cfg.width_px, cfg.height_px);
    let pixels = (w as usize) * (h as usize);
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let mut base: Vec<u8> = BASE_FILL.repeat(pixels);

    tracing::info!("blending paper grain");
    let mut grain = vec![0u8; pixels];
    fill_grain(&mut rng, &mut grain, GRAIN_SIGMA);
    blend_grain(&mut base, &grain)?;
    drop(grain);

    tracing::info!("painting corner splashes");
    let mut overlay = vec![0u8; pixels * 4];
    paint_corner_splashes(&mut overlay, w, h, &mut rng)?;
    let mut overlay = blur_rgba8(&overlay, w, h, SPLASH_BLUR_SIGMA)?;

    tracing::info!("painting header wash");
    let mut wash = vec![0u8; pixels * 4];
    paint_header_wash(&mut wash, w, h, &mut rng)?;
    let wash = blur_rgba8(&wash, w, h, WASH_BLUR_SIGMA)?;

    tracing::info!("compositing");
    over_in_place(&mut overlay, &wash)?;
    flatten_over_rgb(&mut base, &overlay)?;

    RgbImage::from_raw(w, h, base)
        .ok_or_else(|| AquarelaError::raster("flattened buffer does not match canvas size"))
}

/// Write the flattened image as an optimized PNG, creating the parent
/// directory if it does not exist.
pub fn write_png(image: &RgbImage, path: &Path) -> AquarelaResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("create png '{}'", path.display()))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    image
        .write_with_encoder(encoder)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn small_cfg(seed: u64) -> SynthesisConfig {
        SynthesisConfig {
            output_path: PathBuf::from("target/unused.png"),
            width_px: 48,
            height_px: 34,
            seed,
        }
    }

    #[test]
    fn synthesize_rejects_invalid_dimensions() {
        let cfg = SynthesisConfig {
            width_px: 0,
            ..small_cfg(1)
        };
        assert!(matches!(
            synthesize(&cfg),
            Err(AquarelaError::Validation(_))
        ));
    }

    #[test]
    fn output_is_opaque_rgb_of_requested_size() {
        let img = synthesize(&small_cfg(12)).unwrap();
        assert_eq!(img.dimensions(), (48, 34));
        assert_eq!(img.as_raw().len(), 48 * 34 * 3);
    }

    #[test]
    fn result_reads_as_light_paper_with_paint() {
        let img = synthesize(&small_cfg(12)).unwrap();

        // Translucent splashes over near-white paper keep the mean bright.
        let raw = img.as_raw();
        let mean = raw.iter().map(|&c| u64::from(c)).sum::<u64>() / raw.len() as u64;
        assert!(mean > 170, "mean channel {mean} too dark for a paper texture");

        // But the canvas is not a flat fill.
        let first = img.get_pixel(0, 0);
        assert!(img.pixels().any(|p| p != first));
    }
}
