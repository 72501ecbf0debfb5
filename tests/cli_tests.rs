mod common;

use common::{extractor, fixture, login_job};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Runs the extractor against the single-suite fixture and checks that the
/// console and the default output file receive the same job block.
///
/// 针对单套件样例运行提取器，检查控制台和默认输出文件收到相同的作业文本块。
#[test]
fn test_single_report_to_console_and_default_file() {
    let work = tempdir().unwrap();
    let input = fixture("login/output.xml");

    extractor(work.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(login_job(&input));

    let written = fs::read_to_string(work.path().join("output.txt")).unwrap();
    assert_eq!(written, login_job(&input));
}

/// The `-o` flag may sit between inputs; both inputs are processed in order.
/// `-o` 标志可以位于输入之间；两个输入都按顺序处理。
#[test]
fn test_output_flag_between_inputs() {
    let work = tempdir().unwrap();
    let login = fixture("login/output.xml");
    let nightly = fixture("nightly/output.xml");

    extractor(work.path())
        .arg(&login)
        .arg("-o")
        .arg("out.txt")
        .arg(&nightly)
        .assert()
        .success();

    let written = fs::read_to_string(work.path().join("out.txt")).unwrap();
    assert!(written.starts_with(&login_job(&login)));
    let nightly_begin = written.find("SUITE BEGIN===========Nightly").unwrap();
    assert!(nightly_begin > written.find("SUITE END==============Login").unwrap());
    assert!(!work.path().join("output.txt").exists());
}

/// Nested suites, nameless suites and incomplete tests in a realistic report.
/// 在真实报告中测试嵌套套件、无名套件和不完整的测试。
#[test]
fn test_nested_report_contents() {
    let work = tempdir().unwrap();
    let nightly = fixture("nightly/output.xml");

    let output = extractor(work.path()).arg(&nightly).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let suites: Vec<_> = stdout
        .match_indices("SUITE BEGIN===========")
        .map(|(at, marker)| {
            let rest = &stdout[at + marker.len()..];
            rest[..rest.find('=').unwrap()].to_string()
        })
        .collect();
    assert_eq!(suites, vec!["Nightly", "Checkout"]);

    // Skipped: a test without a tag, and the nameless suite as its own block.
    assert!(!stdout.contains("pay_with_voucher"));
    assert_eq!(stdout.matches("Test:   orphan").count(), 1);
    assert_eq!(
        stdout
            .matches("Test:   pay_with_card\nId: TC-100 \nResult: FAIL")
            .count(),
        2
    );
    assert_eq!(
        stdout
            .matches("Test:   pay_with_transfer\nId: TC-102 \nResult: PASS")
            .count(),
        2
    );
}

/// Two invocations append to the same file instead of overwriting it.
/// 两次调用追加写入同一文件，而不是覆盖它。
#[test]
fn test_repeated_invocations_append() {
    let work = tempdir().unwrap();
    let input = fixture("login/output.xml");

    for _ in 0..2 {
        extractor(work.path())
            .args([input.as_os_str(), "-o".as_ref(), "shared.txt".as_ref()])
            .assert()
            .success();
    }

    let written = fs::read_to_string(work.path().join("shared.txt")).unwrap();
    assert_eq!(written, login_job(&input).repeat(2));
}

/// Without inputs nothing is printed and the run still succeeds.
/// 没有输入时不输出任何内容，运行仍然成功。
#[test]
fn test_no_inputs() {
    let work = tempdir().unwrap();

    extractor(work.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_trailing_output_flag_falls_back_to_default() {
    let work = tempdir().unwrap();
    let input = fixture("login/output.xml");

    extractor(work.path()).arg(&input).arg("-o").assert().success();

    assert!(work.path().join("output.txt").exists());
}
