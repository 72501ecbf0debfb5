// src/cli.rs
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::core::config::Invocation;

/// The flag whose following token names the output file.
pub const OUTPUT_FLAG: &str = "-o";

/// Every token is collected verbatim, hyphen-prefixed ones included, and split
/// by [`partition_args`]. `-o` is the only flag; anything else is an input path.
pub fn build_cli() -> Command {
    Command::new("jenkins-extractor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts suite and test results from Jenkins XML reports into a text report.")
        .override_usage("jenkins-extractor [INPUTS]... [-o <PATH>] [INPUTS]...")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("args")
                .help("Jenkins XML report files, and `-o <PATH>` for the output file")
                .value_name("ARGS")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .value_parser(clap::value_parser!(OsString))
                .action(ArgAction::Append),
        )
}

/// Parses the process arguments, exiting with clap's usage message on error.
pub fn parse_args() -> Invocation {
    invocation_from_matches(&build_cli().get_matches())
}

/// Parses an explicit argument list; the first item is the program name.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(invocation_from_matches(&matches))
}

fn invocation_from_matches(matches: &ArgMatches) -> Invocation {
    let tokens: Vec<OsString> = matches
        .get_many::<OsString>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    partition_args(tokens)
}

/// Splits raw tokens into input paths and the output path.
///
/// The token right after `-o` is the output file, whatever it looks like; all
/// other tokens are inputs, in order. A trailing `-o` with nothing after it
/// leaves the default output. When `-o` is repeated the last one wins.
///
/// 将原始参数拆分为输入路径和输出路径。`-o` 之后紧跟的参数为输出文件，其余参数均为输入。
pub fn partition_args<I>(tokens: I) -> Invocation
where
    I: IntoIterator<Item = OsString>,
{
    let mut inputs = Vec::new();
    let mut output = None;
    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        if token.as_os_str() == OsStr::new(OUTPUT_FLAG) {
            if let Some(path) = tokens.next() {
                output = Some(PathBuf::from(path));
            }
        } else {
            inputs.push(PathBuf::from(token));
        }
    }
    Invocation::new(inputs, output)
}
