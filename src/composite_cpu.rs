use crate::error::{AquarelaError, AquarelaResult};

pub type Rgba8 = [u8; 4];

/// Source-over for straight (non-premultiplied) RGBA8.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255 - sa;
    let da_scaled = (u32::from(dst[3]) * inv + 127) / 255;
    let oa = sa + da_scaled;
    if oa == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = oa as u8;
    for i in 0..3 {
        let sc = u32::from(src[i]) * sa;
        let dc = u32::from(dst[i]) * da_scaled;
        out[i] = ((sc + dc + oa / 2) / oa) as u8;
    }
    out
}

/// Composite `src` over `dst`, both straight RGBA8 buffers of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AquarelaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AquarelaError::raster(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a straight RGBA8 overlay onto an opaque RGB8 canvas, flattening
/// the result. The canvas stays 3-channel.
pub fn flatten_over_rgb(base: &mut [u8], overlay: &[u8]) -> AquarelaResult<()> {
    if base.len() * 4 != overlay.len() * 3 || !overlay.len().is_multiple_of(4) {
        return Err(AquarelaError::raster(
            "flatten_over_rgb expects rgb base matching rgba overlay pixel count",
        ));
    }
    for (d, s) in base.chunks_exact_mut(3).zip(overlay.chunks_exact(4)) {
        let sa = u32::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255 - sa;
        for i in 0..3 {
            let v = u32::from(s[i]) * sa + u32::from(d[i]) * inv;
            d[i] = ((v + 127) / 255) as u8;
        }
    }
    Ok(())
}
