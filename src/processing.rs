use crate::constants::{
    MAX_JPEG_QUALITY, MAX_QUALITY, MIN_JPEG_QUALITY, MIN_QUALITY, OUTPUT_EXTENSION,
};
use crate::error::Result;
use crate::utils::{describe_size_change, format_file_size};
use crate::{diagnostic, verbose};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// Clamps a requested quality into `[0.0, 1.0]`.
///
/// # Example
/// ```
/// use imgcmp::clamp_quality;
///
/// assert_eq!(clamp_quality(1.5), 1.0);
/// assert_eq!(clamp_quality(-0.2), 0.0);
/// assert_eq!(clamp_quality(0.42), 0.42);
/// ```
pub fn clamp_quality(quality: f32) -> f32 {
    if quality < MIN_QUALITY {
        MIN_QUALITY
    } else if quality > MAX_QUALITY {
        MAX_QUALITY
    } else {
        quality
    }
}

/// Maps a compression factor onto the encoder's `1..=100` scale.
///
/// A factor of 0 asks for the smallest output, which is quality 1.
pub fn jpeg_quality(quality: f32) -> u8 {
    let scaled = (clamp_quality(quality) * f32::from(MAX_JPEG_QUALITY)).round() as u8;
    scaled.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}

/// Decodes an image, sniffing the format from its content first and
/// falling back to the extension.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Drops the final extension: `a/photo.png` becomes `a/photo`.
pub fn strip_extension(path: &Path) -> PathBuf {
    path.with_extension("")
}

/// First free output path for `source`: `stem.jpg`, then `stem1.jpg`,
/// `stem2.jpg` and so on. There is no upper bound on the search.
pub fn next_output_path(source: &Path) -> PathBuf {
    let stem = strip_extension(source);

    let mut candidate = with_suffix(&stem, "");
    let mut iteration: u64 = 1;
    while candidate.exists() {
        candidate = with_suffix(&stem, &iteration.to_string());
        iteration += 1;
    }
    candidate
}

fn with_suffix(stem: &Path, counter: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(counter);
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Encodes `img` as baseline JPEG.
///
/// The image is flattened to 8-bit RGB first since JPEG carries no alpha
/// channel and the encoder rejects 16-bit and float buffers.
pub fn encode_jpeg(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let rgb = img.to_rgb8();
    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality));
        encoder.encode_image(&rgb)?;
    }
    Ok(bytes)
}

/// Writes `bytes` to a new file at `path`. Fails if something already
/// exists there. A partial write is removed rather than left behind.
pub fn write_new_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    write_or_remove(file, path, bytes)
}

fn write_or_remove<W: Write>(mut writer: W, path: &Path, bytes: &[u8]) -> Result<()> {
    match writer.write_all(bytes).and_then(|_| writer.flush()) {
        Ok(()) => Ok(()),
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(path);
            Err(e.into())
        }
    }
}

/// Decode, pick a free name, encode and write. The source is never touched.
pub fn convert_image(source: &Path, quality: f32) -> Result<ConversionReport> {
    let img = decode_image(source)?;
    save_as_jpeg(&img, source, quality)
}

fn save_as_jpeg(img: &DynamicImage, source: &Path, quality: f32) -> Result<ConversionReport> {
    let output = next_output_path(source);
    let bytes = encode_jpeg(img, quality)?;
    write_new_file(&output, &bytes)?;

    let original_size = fs::metadata(source).map(|m| m.len()).unwrap_or(0);
    Ok(ConversionReport {
        source: source.to_path_buf(),
        output,
        original_size,
        compressed_size: bytes.len() as u64,
    })
}

/// Converts one file and reports whether it worked.
///
/// Only a decode failure prints a diagnostic. Encode and write failures are
/// silent unless verbose output is on.
pub fn recompress_file(source: &Path, quality: f32) -> bool {
    let img = match decode_image(source) {
        Ok(img) => img,
        Err(e) => {
            diagnostic!("Failed to open image: {}!", source.display());
            verbose!("{}", e);
            return false;
        }
    };

    match save_as_jpeg(&img, source, quality) {
        Ok(report) => {
            verbose!(
                "{} -> {} ({} -> {}, {})",
                report.source.display(),
                report.output.display(),
                format_file_size(report.original_size),
                format_file_size(report.compressed_size),
                describe_size_change(report.original_size, report.compressed_size)
            );
            true
        }
        Err(e) => {
            verbose!("Failed to convert {}: {}", source.display(), e);
            false
        }
    }
}
