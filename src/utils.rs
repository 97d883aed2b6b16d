//! Small helpers shared by the converter and the batch driver.

use crate::constants::{PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};
use crate::logger;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for `total` files.
///
/// The bar is hidden in quiet mode. indicatif also skips drawing when
/// stderr is not a terminal, so scripted runs only see the plain messages.
pub fn create_progress_bar(total: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS)),
        Err(_) => pb.set_style(ProgressStyle::default_bar()),
    }
    pb
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Size reduction as a percentage. Negative when the output grew.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

pub fn describe_size_change(original_size: u64, compressed_size: u64) -> String {
    let ratio = calculate_compression_ratio(original_size, compressed_size);
    if ratio >= 0.0 {
        format!("{:.1}% smaller", ratio)
    } else {
        format!("{:.1}% larger", ratio.abs())
    }
}
