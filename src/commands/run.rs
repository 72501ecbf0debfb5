// src/commands/run.rs

use anyhow::Result;
use colored::*;
use std::path::Path;
use tracing::{debug, info};

use crate::core::{
    config::Invocation,
    document::DocumentError,
    extract::extract_file,
};
use crate::reporting::JobReporter;

/// Counts of the input files handled by one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files extracted and written to every sink.
    pub processed: usize,
    /// Files that could not be loaded or written.
    pub failed: usize,
}

/// Processes every input of `invocation` in order, reporting to the console
/// and appending to the configured output file.
pub fn execute(invocation: &Invocation) -> Summary {
    let mut reporter = JobReporter::new(&invocation.output);
    execute_with(invocation, &mut reporter)
}

/// Like [`execute`], delivering jobs through `reporter`.
///
/// A failure on one file is printed as a diagnostic on standard error and the
/// remaining files are still processed.
pub fn execute_with(invocation: &Invocation, reporter: &mut JobReporter) -> Summary {
    let mut summary = Summary::default();
    info!(
        inputs = invocation.inputs.len(),
        output = %invocation.output.display(),
        "starting extraction"
    );

    for path in &invocation.inputs {
        match process_file(path, reporter) {
            Ok(()) => summary.processed += 1,
            Err(e) => {
                summary.failed += 1;
                print_failure(path, &e);
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "extraction finished"
    );
    summary
}

fn process_file(path: &Path, reporter: &mut JobReporter) -> Result<()> {
    let run = extract_file(path)?;
    reporter.report(&run)?;
    Ok(())
}

fn print_failure(path: &Path, error: &anyhow::Error) {
    let category = error
        .downcast_ref::<DocumentError>()
        .map_or("output", DocumentError::category);
    debug!(path = %path.display(), category, "input failed: {error:#}");
    eprintln!("{}", error.to_string().red());
}
