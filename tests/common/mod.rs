// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// The binary, run from `cwd` so the default `output.txt` lands there.
pub fn extractor(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jenkins-extractor").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

/// Writes `xml` to `dir/relative`, creating parent directories.
pub fn write_report(dir: &Path, relative: &str, xml: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create report directory");
    }
    fs::write(&path, xml).expect("Failed to write report");
    path
}

/// A well-formed `test` node.
pub fn test_node(id: &str, name: &str, status: &str, tag: &str) -> String {
    format!(
        r#"<test id="{id}" name="{name}"><tags><tag>{tag}</tag></tags><status status="{status}"/></test>"#
    )
}

/// The job block (with its trailing line terminator) expected for the
/// `login/output.xml` fixture read from `path`.
pub fn login_job(path: &Path) -> String {
    let label = path.parent().unwrap().display().to_string();
    format!(
        "JENKINS JOB BEGIN==========={label}===========JENKINS JOB BEGIN\
         SUITE BEGIN===========Login===========SUITE BEGIN\n\n\
         Test:   should_login\nId: TC-42 \nResult: PASS\n\n\
         SUITE END==============Login==============SUITE END\n\n\
         JENKINS JOB END==========={label}===========JENKINS JOB END\n"
    )
}
