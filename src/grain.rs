use crate::error::{AquarelaError, AquarelaResult};

/// Blend weight of the grain layer against the base (result = 0.75·base + 0.25·grain).
pub const GRAIN_WEIGHT_NUM: u16 = 1;
pub const GRAIN_WEIGHT_DEN: u16 = 4;

/// Compress a raw noise sample into the light paper-grain range.
///
/// Saturates at white: a mid-gray sample (128) maps to 240 + 16 = 256 → 255.
pub fn remap_grain(p: u8) -> u8 {
    240u8.saturating_add(p / 8)
}

/// Blend a remapped grayscale grain layer into an opaque RGB canvas in place.
///
/// `base` is a packed RGB8 buffer, `grain` one raw noise sample per pixel.
pub fn blend_grain(base: &mut [u8], grain: &[u8]) -> AquarelaResult<()> {
    if base.len() != grain.len() * 3 {
        return Err(AquarelaError::raster(
            "blend_grain expects base rgb buffer of 3x grain length",
        ));
    }
    for (px, &raw) in base.chunks_exact_mut(3).zip(grain.iter()) {
        let g = u16::from(remap_grain(raw));
        for c in px.iter_mut() {
            let b = u16::from(*c);
            let num = (GRAIN_WEIGHT_DEN - GRAIN_WEIGHT_NUM) * b + GRAIN_WEIGHT_NUM * g;
            *c = ((num + GRAIN_WEIGHT_DEN / 2) / GRAIN_WEIGHT_DEN) as u8;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_saturates_at_white() {
        assert_eq!(remap_grain(128), 255);
        assert_eq!(remap_grain(255), 255);
    }

    #[test]
    fn remap_compresses_dark_samples() {
        assert_eq!(remap_grain(0), 240);
        assert_eq!(remap_grain(96), 252);
    }

    #[test]
    fn blend_is_quarter_weighted() {
        let mut base = vec![200u8, 100, 0];
        // raw 0 remaps to 240
        blend_grain(&mut base, &[0]).unwrap();
        assert_eq!(base, vec![210, 135, 60]);
    }

    #[test]
    fn blend_rejects_mismatched_lengths() {
        let mut base = vec![0u8; 5];
        assert!(blend_grain(&mut base, &[0, 0]).is_err());
    }

    #[test]
    fn blend_stays_in_channel_range() {
        let mut base = vec![255u8; 3];
        blend_grain(&mut base, &[255]).unwrap();
        assert_eq!(base, vec![255, 255, 255]);
    }
}
