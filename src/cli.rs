use crate::constants::USAGE;
use crate::error::{RecompressError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "imgcmp",
    about = "Recompress JPEG, PNG and BMP images to JPEG at a chosen quality",
    long_about = "imgcmp decodes a single image, or every .jpg/.jpeg/.png/.bmp file below a folder, \
                  and writes a JPEG copy next to it. Originals are never modified: the copy goes to \
                  name.jpg, or name1.jpg, name2.jpg... when that name is taken.",
    version,
    override_usage = "imgcmp [file or folder] [quality: 0...1]",
    after_help = "EXAMPLES:\n  \
    imgcmp photo.png 0.8\n  \
    imgcmp ./holiday 0.5 --verbose"
)]
pub struct Args {
    #[arg(help = "Image file or folder to recompress", allow_hyphen_values = true)]
    pub target: PathBuf,

    #[arg(
        help = "JPEG quality between 0 and 1",
        long_help = "Compression factor from 0 (smallest file) to 1 (best quality). \
                     Values outside that range are clamped.",
        value_parser = parse_quality,
        allow_negative_numbers = true
    )]
    pub quality: f32,

    #[arg(short = 'q', long, help = "Hide the progress bar and per-file details")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        conflicts_with = "quiet",
        help = "Print one line per converted file"
    )]
    pub verbose: bool,

    /// Anything after the quality is accepted and ignored.
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ignored: Vec<OsString>,
}

/// Parses the quality argument. Anything `f32` accepts is fine except NaN,
/// which has no place in the clamped range. Surrounding whitespace is an
/// error.
pub fn parse_quality(raw: &str) -> Result<f32> {
    match raw.parse::<f32>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(RecompressError::InvalidQuality(raw.to_string())),
    }
}

/// Result of reading the command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Bad or missing arguments: the usage line is printed and nothing runs.
    Usage,
}

/// Parses `argv`. Help and version requests print and exit as usual; every
/// other parse problem becomes [`Invocation::Usage`].
pub fn parse_invocation<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Run(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => Invocation::Usage,
    }
}

pub fn usage() -> &'static str {
    USAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quality() {
        assert_eq!(parse_quality("0.5").unwrap(), 0.5);
        assert_eq!(parse_quality("1").unwrap(), 1.0);
        assert_eq!(parse_quality("-0.2").unwrap(), -0.2);
        assert_eq!(parse_quality("1.5").unwrap(), 1.5);
        assert_eq!(parse_quality("inf").unwrap(), f32::INFINITY);
    }

    #[test]
    fn test_parse_quality_rejects_garbage() {
        assert!(matches!(
            parse_quality("high"),
            Err(RecompressError::InvalidQuality(_))
        ));
        assert!(parse_quality("").is_err());
        assert!(parse_quality("NaN").is_err());
        assert!(parse_quality("0,5").is_err());
        assert!(parse_quality(" 0.5").is_err());
        assert!(parse_quality("0.25 ").is_err());
    }

    #[test]
    fn test_parse_invocation_two_arguments() {
        match parse_invocation(["imgcmp", "photos", "0.7"]) {
            Invocation::Run(args) => {
                assert_eq!(args.target, PathBuf::from("photos"));
                assert_eq!(args.quality, 0.7);
                assert!(!args.quiet);
                assert!(!args.verbose);
            }
            Invocation::Usage => panic!("expected a run"),
        }
    }

    #[test]
    fn test_parse_invocation_negative_quality() {
        match parse_invocation(["imgcmp", "photo.png", "-0.2"]) {
            Invocation::Run(args) => assert_eq!(args.quality, -0.2),
            Invocation::Usage => panic!("negative quality should parse"),
        }
    }

    #[test]
    fn test_parse_invocation_flags() {
        match parse_invocation(["imgcmp", "--verbose", "photo.png", "1"]) {
            Invocation::Run(args) => assert!(args.verbose),
            Invocation::Usage => panic!("expected a run"),
        }
    }

    #[test]
    fn test_parse_invocation_ignores_extra_arguments() {
        match parse_invocation(["imgcmp", "photo.png", "0.5", "extra", "-x", "more"]) {
            Invocation::Run(args) => {
                assert_eq!(args.target, PathBuf::from("photo.png"));
                assert_eq!(args.quality, 0.5);
                assert_eq!(args.ignored.len(), 3);
            }
            Invocation::Usage => panic!("extra arguments should be ignored"),
        }
    }

    #[test]
    fn test_parse_invocation_target_starting_with_dash() {
        match parse_invocation(["imgcmp", "-photo.png", "0.5"]) {
            Invocation::Run(args) => assert_eq!(args.target, PathBuf::from("-photo.png")),
            Invocation::Usage => panic!("a dashed file name is still a target"),
        }
    }

    #[test]
    fn test_parse_invocation_usage_cases() {
        assert!(matches!(parse_invocation(["imgcmp"]), Invocation::Usage));
        assert!(matches!(
            parse_invocation(["imgcmp", "photo.png"]),
            Invocation::Usage
        ));
        assert!(matches!(
            parse_invocation(["imgcmp", "photo.png", "great"]),
            Invocation::Usage
        ));
        assert!(matches!(
            parse_invocation(["imgcmp", "photo.png", " 0.5"]),
            Invocation::Usage
        ));
        assert!(matches!(
            parse_invocation(["imgcmp", "-q", "-v", "photo.png", "0.5"]),
            Invocation::Usage
        ));
    }
}
