//! # Text Rendering Module / 文本渲染模块
//!
//! Renders the extraction model as the plain-text report format. Every suite
//! and every job is wrapped in matching BEGIN/END markers.
//!
//! 将提取模型渲染为纯文本报告格式。每个套件和每个作业都被成对的 BEGIN/END 标记包围。
//!
//! # Output Format / 输出格式
//! ```text
//! JENKINS JOB BEGIN===========jobs/nightly===========JENKINS JOB BEGINSUITE BEGIN===========Login===========SUITE BEGIN
//!
//! Test:   should_login
//! Id: TC-42 
//! Result: PASS
//!
//! SUITE END==============Login==============SUITE END
//!
//! JENKINS JOB END===========jobs/nightly===========JENKINS JOB END
//! ```

use crate::core::models::{ExtractionRun, TestResult, TestSuite};
use std::fmt::Write;

/// Renders one test result.
pub fn render_result(result: &TestResult) -> String {
    let mut out = String::new();
    write_result(&mut out, result);
    out
}

/// Renders one suite and all of its results.
pub fn render_suite(suite: &TestSuite) -> String {
    let mut out = String::new();
    write_suite(&mut out, suite);
    out
}

/// Renders every suite of a run inside the job markers. The label is the
/// directory portion of the run's source path.
///
/// 在作业标记内渲染运行中的每个套件。标签为运行源路径的目录部分。
pub fn render_job(run: &ExtractionRun) -> String {
    let label = run.job_label();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "JENKINS JOB BEGIN==========={label}===========JENKINS JOB BEGIN");
    for suite in run.suites() {
        write_suite(&mut out, suite);
    }
    let _ = write!(out, "JENKINS JOB END==========={label}===========JENKINS JOB END");
    out
}

fn write_suite(out: &mut String, suite: &TestSuite) {
    let name = suite.name();
    let _ = write!(out, "SUITE BEGIN==========={name}===========SUITE BEGIN\n\n");
    for result in suite.results() {
        write_result(out, result);
    }
    let _ = write!(out, "SUITE END=============={name}==============SUITE END\n\n");
}

fn write_result(out: &mut String, result: &TestResult) {
    let outcome = if result.passed() { "PASS" } else { "FAIL" };
    let _ = write!(
        out,
        "Test:   {}\nId: {} \nResult: {}\n\n",
        result.name(),
        result.id(),
        outcome
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_suite() -> TestSuite {
        let mut suite = TestSuite::new("Login");
        suite.push(TestResult::new("should_login", "TC-42", true));
        suite
    }

    #[test]
    fn test_render_result_format() {
        assert_eq!(
            render_result(&TestResult::new("t", "TC-1", false)),
            "Test:   t\nId: TC-1 \nResult: FAIL\n\n"
        );
    }

    #[test]
    fn test_render_suite_format() {
        assert_eq!(
            render_suite(&login_suite()),
            "SUITE BEGIN===========Login===========SUITE BEGIN\n\n\
             Test:   should_login\nId: TC-42 \nResult: PASS\n\n\
             SUITE END==============Login==============SUITE END\n\n"
        );
    }

    #[test]
    fn test_render_empty_suite() {
        assert_eq!(
            render_suite(&TestSuite::new("Empty")),
            "SUITE BEGIN===========Empty===========SUITE BEGIN\n\n\
             SUITE END==============Empty==============SUITE END\n\n"
        );
    }

    #[test]
    fn test_render_job_wraps_suites_with_directory_label() {
        let run = ExtractionRun::new("jobs/nightly/output.xml", vec![login_suite()]);
        let rendered = render_job(&run);
        assert!(rendered.starts_with(
            "JENKINS JOB BEGIN===========jobs/nightly===========JENKINS JOB BEGINSUITE BEGIN"
        ));
        assert!(rendered.ends_with(
            "SUITE END\n\nJENKINS JOB END===========jobs/nightly===========JENKINS JOB END"
        ));
        assert!(rendered.contains(&render_suite(&login_suite())));
    }

    #[test]
    fn test_render_job_without_suites() {
        let run = ExtractionRun::new("report.xml", vec![]);
        assert_eq!(
            render_job(&run),
            "JENKINS JOB BEGIN======================JENKINS JOB BEGIN\
             JENKINS JOB END======================JENKINS JOB END"
        );
    }
}
