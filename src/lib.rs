pub mod batch;
pub mod classify;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;
pub mod walk;

pub use batch::{recompress_directory, recompress_target, RunSummary};
pub use classify::{classify_target, TargetKind};
pub use error::{RecompressError, Result};
pub use processing::{
    clamp_quality, convert_image, decode_image, encode_jpeg, jpeg_quality, next_output_path,
    recompress_file, strip_extension, ConversionReport,
};
pub use walk::{
    collect_candidates, is_allowed_file, select_candidates, walk_entries, EntryKind, TreeWalker,
    WalkEntry,
};
