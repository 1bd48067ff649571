use std::path::PathBuf;

#[test]
fn cli_writes_png_with_defaults_overridden() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("bg.png");
    let _ = std::fs::remove_file(&out_path);

    let exe = std::env::var_os("CARGO_BIN_EXE_aquarela")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "aquarela.exe"
            } else {
                "aquarela"
            });
            p
        });

    let out_arg = out_path.to_string_lossy().to_string();
    let output = std::process::Command::new(&exe)
        .args([
            "--out", &out_arg, "--width", "64", "--height", "44", "--seed", "7",
        ])
        .output()
        .expect("spawn aquarela");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating"));
    assert!(stdout.contains("Done."));

    let img = image::open(&out_path).unwrap();
    assert_eq!((img.width(), img.height()), (64, 44));
    assert_eq!(img.color(), image::ColorType::Rgb8);
}
