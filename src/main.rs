use imgcmp::cli::{self, Args, Invocation};
use imgcmp::constants::INVALID_TARGET_MESSAGE;
use imgcmp::error::{RecompressError, Result};
use imgcmp::{diagnostic, logger, recompress_target};

fn main() -> Result<()> {
    let args = match cli::parse_invocation(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            diagnostic!("{}", cli::usage());
            return Ok(());
        }
    };

    setup_logger(&args);

    match recompress_target(&args.target, args.quality) {
        Ok(summary) => {
            diagnostic!("{}", summary);
            Ok(())
        }
        Err(RecompressError::InvalidTarget(_)) => {
            diagnostic!("{}", INVALID_TARGET_MESSAGE);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn setup_logger(args: &Args) {
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);
}
