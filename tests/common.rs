#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

pub fn sample_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 9 % 256) as u8, 128])
    })
}

/// Writes a real image, format picked from the extension.
pub fn write_image(path: &Path) -> PathBuf {
    sample_image(24, 16).save(path).unwrap();
    path.to_path_buf()
}

pub fn write_image_as(path: &Path, format: ImageFormat) -> PathBuf {
    sample_image(24, 16)
        .save_with_format(path, format)
        .unwrap();
    path.to_path_buf()
}

pub fn write_corrupt_file(path: &Path) -> PathBuf {
    fs::write(path, b"this is not image data at all").unwrap();
    path.to_path_buf()
}

pub fn write_text_file(path: &Path) -> PathBuf {
    fs::write(path, b"not an image").unwrap();
    path.to_path_buf()
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
