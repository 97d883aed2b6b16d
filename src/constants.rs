pub const MIN_QUALITY: f32 = 0.0;
pub const MAX_QUALITY: f32 = 1.0;

/// Bounds of the JPEG encoder's integer quality scale.
pub const MIN_JPEG_QUALITY: u8 = 1;
pub const MAX_JPEG_QUALITY: u8 = 100;

/// Accepted input suffixes. Matched case-sensitively against the full path.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".bmp"];

pub const OUTPUT_EXTENSION: &str = ".jpg";

pub const USAGE: &str = "usage: imgcmp [file or folder] [quality: 0...1]";
pub const INVALID_TARGET_MESSAGE: &str = "Input is not a file or directory.";

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";
