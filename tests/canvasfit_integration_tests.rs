use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba};

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_canvasfit")
}

/// A fresh directory under the target tmpdir, unique per test.
fn workdir(test_name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(test_name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    let pixels = RgbImage::from_pixel(width, height, Rgb([40, 90, 160]));
    DynamicImage::ImageRgb8(pixels)
        .save_with_format(path, format)
        .unwrap();
}

/// A canvasfit command that does not see the caller's `CANVASFIT_*` settings
/// and always logs at `info`.
fn canvasfit() -> Command {
    let mut command = Command::new(binary());
    for var in [
        "CANVASFIT_SIZE",
        "CANVASFIT_BG",
        "CANVASFIT_FORMAT",
        "CANVASFIT_MAX_TOTAL_SIZE",
    ] {
        command.env_remove(var);
    }
    command.env("RUST_LOG", "info");
    command
}

/// Runs canvasfit on one input with everything else left at its defaults.
fn run(input: &Path, output: &Path) -> Output {
    canvasfit()
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .output()
        .expect("canvasfit could not be started")
}

#[test]
fn test_jpeg_to_transparent_png() {
    let dir = workdir("jpeg_to_png");
    let input = dir.join("photo.jpg");
    let output = dir.join("photo.png");
    write_image(&input, 600, 400, ImageFormat::Jpeg);

    let result = run(&input, &output);
    assert!(result.status.success(), "{result:?}");

    let canvas = image::open(&output).unwrap().to_rgba8();
    assert_eq!(canvas.dimensions(), (1200, 1200));
    assert_eq!(canvas.get_pixel(300, 400).0[3], 255);
    assert_eq!(canvas.get_pixel(899, 799).0[3], 255);
    assert_eq!(canvas.get_pixel(299, 400).0[3], 0);
    assert_eq!(canvas.get_pixel(300, 800).0[3], 0);
}

#[test]
fn test_size_and_background_options() {
    let dir = workdir("size_and_bg");
    let input = dir.join("small.png");
    let output = dir.join("small.webp");
    write_image(&input, 10, 6, ImageFormat::Png);

    let result = canvasfit()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--size", "20", "--bg", "#ffffff"])
        .output()
        .unwrap();
    assert!(result.status.success(), "{result:?}");

    let canvas = image::open(&output).unwrap();
    assert_eq!(canvas.dimensions(), (20, 20));
    assert_eq!(image::guess_format(&fs::read(&output).unwrap()).unwrap(), ImageFormat::WebP);
    assert_eq!(canvas.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    assert_eq!(canvas.get_pixel(5, 7), Rgba([40, 90, 160, 255]));
}

#[test]
fn test_directory_batch_skips_bad_files() {
    let dir = workdir("directory_batch");
    let inputs = dir.join("in");
    let outputs = dir.join("out");
    fs::create_dir_all(&inputs).unwrap();
    write_image(&inputs.join("a.png"), 30, 20, ImageFormat::Png);
    write_image(&inputs.join("b.bmp"), 40, 40, ImageFormat::Bmp);
    write_image(&inputs.join("too_big.png"), 41, 10, ImageFormat::Png);
    fs::write(inputs.join("broken.jpg"), b"not really a jpeg").unwrap();
    fs::write(inputs.join("readme.txt"), b"hello").unwrap();

    let result = canvasfit()
        .arg("-i")
        .arg(&inputs)
        .arg("-o")
        .arg(&outputs)
        .args(["--size", "40"])
        .output()
        .unwrap();
    assert!(result.status.success(), "{result:?}");

    let mut produced: Vec<_> = fs::read_dir(&outputs)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    produced.sort();
    assert_eq!(produced, ["a.png", "b.png"]);

    let log = String::from_utf8_lossy(&result.stderr);
    assert!(log.contains("too_big.png: skipped: too large for canvas"), "{log}");
    assert!(log.contains("broken.jpg: skipped: unreadable image"), "{log}");
    assert!(log.contains("readme.txt: skipped: unsupported file type"), "{log}");
    assert!(log.contains("2 processed, 3 skipped"), "{log}");
}

#[test]
fn test_zip_output() {
    let dir = workdir("zip_output");
    let first = dir.join("one.png");
    let second = dir.join("two.jpg");
    let archive_path = dir.join("formatted_images.zip");
    write_image(&first, 8, 8, ImageFormat::Png);
    write_image(&second, 5, 9, ImageFormat::Jpeg);

    let result = canvasfit()
        .arg("-i")
        .arg(&first)
        .arg("-i")
        .arg(&second)
        .arg("-o")
        .arg(&archive_path)
        .args(["--size", "16"])
        .output()
        .unwrap();
    assert!(result.status.success(), "{result:?}");

    let mut archive = zip::ZipArchive::new(fs::File::open(&archive_path).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    assert_eq!(names, ["one.png", "two.png"]);

    let mut bytes = Vec::new();
    archive
        .by_name("two.png")
        .unwrap()
        .read_to_end(&mut bytes)
        .unwrap();
    let canvas = image::load_from_memory(&bytes).unwrap();
    assert_eq!(canvas.dimensions(), (16, 16));
}

#[test]
fn test_single_oversize_image_fails() {
    let dir = workdir("single_oversize");
    let input = dir.join("wide.png");
    let output = dir.join("wide_out.png");
    write_image(&input, 1300, 800, ImageFormat::Png);

    let result = run(&input, &output);
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_total_size_limit_is_fatal() {
    let dir = workdir("total_size_limit");
    let input = dir.join("photo.png");
    let output = dir.join("out");
    write_image(&input, 64, 64, ImageFormat::Png);

    let result = canvasfit()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--max-total-size", "10"])
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("exceeds the limit"));
}

#[test]
fn test_missing_input_fails() {
    let dir = workdir("missing_input");
    let result = run(&dir.join("nope.png"), &dir.join("out.png"));
    assert!(!result.status.success());
}

#[test]
fn test_file_as_directory_output_fails_early() {
    let dir = workdir("file_as_directory");
    let first = dir.join("one.png");
    let second = dir.join("two.png");
    let output = dir.join("not_a_directory");
    write_image(&first, 4, 4, ImageFormat::Png);
    write_image(&second, 4, 4, ImageFormat::Png);
    fs::write(&output, b"already here").unwrap();

    let result = canvasfit()
        .arg("-i")
        .arg(&first)
        .arg("-i")
        .arg(&second)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    let log = String::from_utf8_lossy(&result.stderr);
    assert!(log.contains("output path must be a directory"), "{log}");
    assert!(!log.contains("Processing file"), "{log}");
    assert_eq!(fs::read(&output).unwrap(), b"already here");
}
