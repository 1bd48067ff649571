use std::path::PathBuf;

use aquarela::{SynthesisConfig, synthesize, write_png};

fn cfg(width: u32, height: u32, seed: u64) -> SynthesisConfig {
    SynthesisConfig {
        output_path: PathBuf::from("target/synth_suite/unused.png"),
        width_px: width,
        height_px: height,
        seed,
    }
}

#[test]
fn fixed_seed_reproduces_identical_pixels() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let a = synthesize(&cfg(64, 45, 12)).unwrap();
    let b = synthesize(&cfg(64, 45, 12)).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn different_seeds_diverge() {
    let a = synthesize(&cfg(64, 45, 12)).unwrap();
    let b = synthesize(&cfg(64, 45, 13)).unwrap();
    assert_ne!(a.as_raw(), b.as_raw());
}

#[test]
fn default_config_targets_a4_landscape() {
    let cfg = SynthesisConfig::default();
    assert_eq!(
        (cfg.width_px, cfg.height_px),
        (2000, (2000.0f64 * 210.0 / 297.0).round() as u32)
    );
}

#[test]
fn write_png_creates_missing_directories() {
    let dir = PathBuf::from("target").join("synth_suite").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("bg.png");

    let img = synthesize(&cfg(40, 28, 3)).unwrap();
    write_png(&img, &out).unwrap();

    let reloaded = image::open(&out).unwrap();
    assert_eq!(reloaded.color(), image::ColorType::Rgb8);
    assert_eq!(reloaded.width(), 40);
    assert_eq!(reloaded.height(), 28);

    // Round-trips the exact flattened pixels.
    assert_eq!(reloaded.into_rgb8().as_raw(), img.as_raw());
}

#[test]
fn dimensions_are_honored_exactly() {
    let img = synthesize(&cfg(97, 61, 5)).unwrap();
    assert_eq!(img.dimensions(), (97, 61));
}
