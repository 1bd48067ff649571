use std::path::PathBuf;

use clap::Parser;

use aquarela::{
    SynthesisConfig,
    config::{DEFAULT_OUTPUT_PATH, DEFAULT_SEED, DEFAULT_WIDTH_PX, a4_landscape_height},
};

/// Generate the watercolor paper background asset.
#[derive(Parser, Debug)]
#[command(name = "aquarela", version)]
struct Cli {
    /// Output PNG path.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH_PX)]
    width: u32,

    /// Canvas height in pixels (defaults to A4 landscape ratio of the width).
    #[arg(long)]
    height: Option<u32>,

    /// Seed for the splash/grain randomness.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = SynthesisConfig {
        height_px: cli.height.unwrap_or_else(|| a4_landscape_height(cli.width)),
        width_px: cli.width,
        output_path: cli.out,
        seed: cli.seed,
    };

    println!(
        "Generating optimized watercolor background to {}...",
        cfg.output_path.display()
    );
    let image = aquarela::synthesize(&cfg)?;
    aquarela::write_png(&image, &cfg.output_path)?;
    println!("Done.");
    Ok(())
}
