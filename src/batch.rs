use crate::classify::{classify_target, TargetKind};
use crate::error::Result;
use crate::processing::recompress_file;
use crate::utils::create_progress_bar;
use crate::walk::collect_candidates;
use std::fmt;
use std::path::Path;

/// Success and failure counts for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub successes: usize,
    pub failures: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }

    pub fn attempted(&self) -> usize {
        self.successes + self.failures
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Finished with {} successes and {} failures.",
            self.successes, self.failures
        )
    }
}

/// Recompresses whatever `target` names: one file, or every candidate
/// below a directory.
///
/// # Errors
/// `InvalidTarget` when nothing exists at `target`. Per-file problems are
/// counted in the summary instead of being returned.
pub fn recompress_target(target: &Path, quality: f32) -> Result<RunSummary> {
    match classify_target(target)? {
        TargetKind::Directory => Ok(recompress_directory(target, quality)),
        TargetKind::File => {
            let mut summary = RunSummary::new();
            summary.record(recompress_file(target, quality));
            Ok(summary)
        }
    }
}

/// Converts every candidate below `root`, one file at a time.
pub fn recompress_directory(root: &Path, quality: f32) -> RunSummary {
    let candidates = collect_candidates(root);
    let mut summary = RunSummary::new();

    let progress = create_progress_bar(candidates.len() as u64);
    for path in &candidates {
        progress.set_message(path.display().to_string());
        let succeeded = progress.suspend(|| recompress_file(path, quality));
        summary.record(succeeded);
        progress.inc(1);
    }
    progress.finish_and_clear();

    summary
}
