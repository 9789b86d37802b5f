use std::path::{Path, PathBuf};
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_solid_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    image::RgbaImage::from_pixel(width, height, image::Rgba(rgba))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn scanimate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scanimate"))
}

#[test]
fn cli_writes_composite_and_mask() {
    let dir = scratch_dir("cli_writes");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    write_solid_png(&a, 100, 50, [255, 0, 0, 255]);
    write_solid_png(&b, 100, 50, [0, 0, 255, 255]);

    let status = scanimate()
        .args(["--bar-width", "10", "--out"])
        .arg(&dir)
        .arg(&a)
        .arg(&b)
        .status()
        .unwrap();

    assert!(status.success());

    let composite = image::open(dir.join("output.png")).unwrap().into_rgba8();
    assert_eq!(composite.dimensions(), (100, 50));
    assert_eq!(composite.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(composite.get_pixel(10, 0).0, [0, 0, 255, 255]);

    let mask = image::open(dir.join("mask.png")).unwrap().into_rgba8();
    assert_eq!(mask.dimensions(), (100, 50));
}

#[test]
fn cli_fails_on_bar_width_mismatch() {
    let dir = scratch_dir("cli_mismatch");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    write_solid_png(&a, 100, 50, [255, 0, 0, 255]);
    write_solid_png(&b, 100, 50, [0, 0, 255, 255]);

    let output = scanimate()
        .args(["-w", "7", "-o"])
        .arg(&dir)
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be a divider"), "{stderr}");
    assert!(!dir.join("output.png").exists());
    assert!(!dir.join("mask.png").exists());
}

#[test]
fn cli_rejects_single_image() {
    let dir = scratch_dir("cli_single");
    let a = dir.join("a.png");
    write_solid_png(&a, 20, 20, [0, 255, 0, 255]);

    let status = scanimate()
        .args(["-w", "10", "-o"])
        .arg(&dir)
        .arg(&a)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!dir.join("output.png").exists());
}
