/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `factor` (truncating, clamped to [0, 1]).
    pub fn scale_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (f32::from(self.a) * factor) as u8,
            ..self
        }
    }
}

/// The five splash colors, fixed for every run.
pub const SPLASH_PALETTE: [Rgba; 5] = [
    Rgba::new(14, 99, 48, 90),   // green
    Rgba::new(240, 212, 24, 75), // gold
    Rgba::new(0, 150, 136, 60),  // teal
    Rgba::new(233, 30, 99, 55),  // magenta
    Rgba::new(255, 152, 0, 55),  // orange
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_alpha_truncates() {
        let c = Rgba::new(14, 99, 48, 90);
        assert_eq!(c.scale_alpha(0.7).a, 63);
        assert_eq!(c.scale_alpha(0.7).r, 14);
    }

    #[test]
    fn scale_alpha_clamps_factor() {
        let c = Rgba::new(0, 0, 0, 100);
        assert_eq!(c.scale_alpha(2.0).a, 100);
        assert_eq!(c.scale_alpha(-1.0).a, 0);
    }

    #[test]
    fn palette_alphas_stay_translucent() {
        for c in SPLASH_PALETTE {
            assert!((55..=90).contains(&c.a));
        }
    }
}
