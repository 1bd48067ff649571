#![forbid(unsafe_code)]

pub mod blur_cpu;
pub mod composite_cpu;
pub mod config;
pub mod draw;
pub mod error;
pub mod grain;
pub mod noise;
pub mod palette;
pub mod synth;

pub use config::SynthesisConfig;
pub use error::{AquarelaError, AquarelaResult};
pub use noise::{EffectNoise, NoiseSource, UniformFallback, select_noise_source};
pub use palette::{Rgba, SPLASH_PALETTE};
pub use synth::{synthesize, write_png};
