//! # Extraction Module / 提取模块
//!
//! Walks a loaded report document and collects its suites and test results.
//! The walk is tolerant: a suite without a name or a test missing any of its
//! required pieces is dropped silently, and the rest of the document is still
//! extracted.
//!
//! 遍历已加载的报告文档并收集其中的套件和测试结果。
//! 遍历是宽容的：缺少名称的套件或缺少任何必需部分的测试会被静默丢弃，
//! 文档的其余部分仍会被提取。

use crate::core::document::{Document, DocumentError, Node};
use crate::core::models::{ExtractionRun, TestResult, TestSuite};
use std::path::Path;
use tracing::{debug, trace};

pub const SUITE_TAG: &str = "suite";
pub const TEST_TAG: &str = "test";
pub const STATUS_TAG: &str = "status";
pub const ID_TAG: &str = "tag";

const PASS: &str = "pass";

/// Loads the document at `path` and extracts it.
pub fn extract_file(path: &Path) -> Result<ExtractionRun, DocumentError> {
    let document = Document::load(path)?;
    let run = extract(&document, path);
    debug!(
        path = %path.display(),
        suites = run.suites().len(),
        results = run.result_count(),
        passed = run.suites().iter().map(TestSuite::passed_count).sum::<usize>(),
        "extracted report"
    );
    Ok(run)
}

/// Collects every named suite of `document`, in document order.
pub fn extract(document: &Document, source_path: &Path) -> ExtractionRun {
    let suites = document
        .descendants(SUITE_TAG)
        .filter_map(suite_from_node)
        .collect();
    ExtractionRun::new(source_path, suites)
}

/// Builds a suite from a `suite` node, or `None` when its name is missing
/// or empty.
pub fn suite_from_node(node: Node<'_>) -> Option<TestSuite> {
    let Some(name) = node.attribute("name").filter(|name| !name.is_empty()) else {
        trace!("skipping suite without a name");
        return None;
    };
    let mut suite = TestSuite::new(name);
    for result in node.descendants(TEST_TAG).filter_map(result_from_node) {
        suite.push(result);
    }
    Some(suite)
}

/// Builds a result from a `test` node.
///
/// The node needs an `id` and a `name` attribute, a direct `status` child
/// carrying a `status` attribute, and at least one `tag` descendant. The
/// first `tag` node's text becomes the result identifier; the node's own `id`
/// attribute is only required, never reported.
pub fn result_from_node(node: Node<'_>) -> Option<TestResult> {
    let result = node.attribute("id").and_then(|_| {
        let name = node.attribute("name")?;
        let status = node.child(STATUS_TAG)?.attribute("status")?;
        let id = node.first_descendant(ID_TAG)?.text();
        Some(TestResult::new(name, id, is_pass(status)))
    });
    if result.is_none() {
        trace!(id = node.attribute("id"), "skipping incomplete test");
    }
    result
}

/// Whether a status attribute value denotes a pass, ignoring case.
pub fn is_pass(status: &str) -> bool {
    status.to_lowercase() == PASS
}
