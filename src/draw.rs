use rand::{Rng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::{
    composite_cpu,
    error::{AquarelaError, AquarelaResult},
    palette::{Rgba, SPLASH_PALETTE},
};

pub const SPLASHES_PER_CORNER: u32 = 8;
pub const WASH_BLOB_COUNT: u32 = 12;

/// Splash radius bounds as fractions of canvas width.
const SPLASH_RADIUS_MIN: f64 = 0.05;
const SPLASH_RADIUS_MAX: f64 = 0.13;

/// Std-dev of splash center scatter, as a fraction of width/height.
const ANCHOR_SIGMA: f64 = 0.07;

/// Alpha multiplier for the jittered second lobe of a splash.
const LOBE_ALPHA: f32 = 0.7;

/// Wash radius bounds and placement band, as fractions of width/height.
const WASH_RADIUS_MIN: f64 = 0.08;
const WASH_RADIUS_MAX: f64 = 0.16;
const WASH_X_MIN: f64 = 0.34;
const WASH_X_MAX: f64 = 0.66;
const WASH_Y_MIN: f64 = 0.05;
const WASH_Y_MAX: f64 = 0.20;
const WASH_ALPHA: f32 = 0.5;

/// One of the four regions where splash clusters gather.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerAnchor {
    pub const ALL: [CornerAnchor; 4] = [
        CornerAnchor::TopLeft,
        CornerAnchor::TopRight,
        CornerAnchor::BottomLeft,
        CornerAnchor::BottomRight,
    ];

    /// Fractional (x, y) position used as the mean of the center distribution.
    pub fn fraction(self) -> (f64, f64) {
        match self {
            CornerAnchor::TopLeft => (0.18, 0.25),
            CornerAnchor::TopRight => (0.82, 0.25),
            CornerAnchor::BottomLeft => (0.18, 0.78),
            CornerAnchor::BottomRight => (0.82, 0.78),
        }
    }
}

/// An ephemeral drawing instruction, consumed immediately by the rasterizer.
#[derive(Clone, Copy, Debug)]
pub struct Splash {
    pub cx: i64,
    pub cy: i64,
    pub radius: i64,
    pub color: Rgba,
}

/// Rasterize a filled circle onto a straight RGBA8 layer with source-over
/// blending, clipped to the layer bounds. Centers may lie off-canvas.
pub fn fill_circle(layer: &mut [u8], width: u32, height: u32, splash: &Splash) {
    let w = i64::from(width);
    let h = i64::from(height);
    let r = splash.radius;
    if r < 0 {
        return;
    }

    let x0 = (splash.cx - r).max(0);
    let x1 = (splash.cx + r).min(w - 1);
    let y0 = (splash.cy - r).max(0);
    let y1 = (splash.cy + r).min(h - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }

    let src = [splash.color.r, splash.color.g, splash.color.b, splash.color.a];
    let rr = r * r;
    for y in y0..=y1 {
        let dy = y - splash.cy;
        for x in x0..=x1 {
            let dx = x - splash.cx;
            if dx * dx + dy * dy > rr {
                continue;
            }
            let idx = ((y * w + x) as usize) * 4;
            let dst = [layer[idx], layer[idx + 1], layer[idx + 2], layer[idx + 3]];
            layer[idx..idx + 4].copy_from_slice(&composite_cpu::over(dst, src));
        }
    }
}

/// Paint the four corner splash clusters: per corner, 8 two-lobed blotches
/// with Gaussian-scattered centers and a random palette color each.
pub fn paint_corner_splashes(
    layer: &mut [u8],
    width: u32,
    height: u32,
    rng: &mut StdRng,
) -> AquarelaResult<()> {
    let w = f64::from(width);
    let h = f64::from(height);
    let r_min = (w * SPLASH_RADIUS_MIN) as i64;
    let r_max = (w * SPLASH_RADIUS_MAX) as i64;

    for anchor in CornerAnchor::ALL {
        let (fx, fy) = anchor.fraction();
        let cx_dist = scatter(w * fx, w * ANCHOR_SIGMA)?;
        let cy_dist = scatter(h * fy, h * ANCHOR_SIGMA)?;

        for _ in 0..SPLASHES_PER_CORNER {
            let color = SPLASH_PALETTE[rng.gen_range(0..SPLASH_PALETTE.len())];
            let radius = rng.gen_range(r_min..=r_max);
            let cx = cx_dist.sample(rng) as i64;
            let cy = cy_dist.sample(rng) as i64;

            fill_circle(layer, width, height, &Splash { cx, cy, radius, color });

            // Second lobe: jittered copy at reduced alpha.
            let jitter = radius / 3;
            let ox = rng.gen_range(-jitter..=jitter);
            let oy = rng.gen_range(-jitter..=jitter);
            fill_circle(
                layer,
                width,
                height,
                &Splash {
                    cx: cx + ox,
                    cy: cy + oy,
                    radius,
                    color: color.scale_alpha(LOBE_ALPHA),
                },
            );
        }
    }
    Ok(())
}

/// Paint the header wash: a band of large faint blobs across the top middle,
/// meant to sit behind a logo or title.
pub fn paint_header_wash(
    layer: &mut [u8],
    width: u32,
    height: u32,
    rng: &mut StdRng,
) -> AquarelaResult<()> {
    let w = f64::from(width);
    let h = f64::from(height);
    let r_min = (w * WASH_RADIUS_MIN) as i64;
    let r_max = (w * WASH_RADIUS_MAX) as i64;
    let x_min = (w * WASH_X_MIN) as i64;
    let x_max = (w * WASH_X_MAX) as i64;
    let y_min = (h * WASH_Y_MIN) as i64;
    let y_max = (h * WASH_Y_MAX) as i64;

    for _ in 0..WASH_BLOB_COUNT {
        let color = SPLASH_PALETTE[rng.gen_range(0..SPLASH_PALETTE.len())];
        let radius = rng.gen_range(r_min..=r_max);
        let cx = rng.gen_range(x_min..=x_max);
        let cy = rng.gen_range(y_min..=y_max);
        fill_circle(
            layer,
            width,
            height,
            &Splash {
                cx,
                cy,
                radius,
                color: color.scale_alpha(WASH_ALPHA),
            },
        );
    }
    Ok(())
}

fn scatter(mean: f64, sigma: f64) -> AquarelaResult<Normal<f64>> {
    // Normal::new only rejects non-finite std-devs; guard the rest here.
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(AquarelaError::raster(format!(
            "splash scatter sigma must be finite and > 0, got {sigma}"
        )));
    }
    Normal::new(mean, sigma)
        .map_err(|e| AquarelaError::raster(format!("bad splash scatter sigma {sigma}: {e}")))
}
