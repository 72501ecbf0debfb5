use jenkins_extractor::{cli, commands, infra};
use std::process::ExitCode;

fn main() -> ExitCode {
    infra::logging::init();

    // Parse command line arguments
    let invocation = cli::parse_args();

    // Per-file failures are reported as they happen and never fail the batch.
    commands::run::execute(&invocation);
    ExitCode::SUCCESS
}
