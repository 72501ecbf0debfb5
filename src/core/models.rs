//! # Data Models Module / 数据模型模块
//!
//! This module defines the normalized in-memory model produced by the
//! extractor: individual test results, the suites that group them, and the
//! extraction run that owns every suite found in one input document.
//!
//! 此模块定义了提取器生成的规范化内存模型：单个测试结果、将其分组的测试套件，
//! 以及拥有从单个输入文档中找到的所有套件的提取运行。

use std::path::{Path, PathBuf};

/// The outcome of a single test case.
/// 单个测试用例的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    name: String,
    id: String,
    passed: bool,
}

impl TestResult {
    pub fn new(name: impl Into<String>, id: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            passed,
        }
    }

    /// The test's `name` attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identifier taken from the test's first `tag` node.
    /// 取自测试中第一个 `tag` 节点的标识符。
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// A named, ordered group of test results.
/// 一个具名的、有序的测试结果分组。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    name: String,
    results: Vec<TestResult>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Results in the order they were encountered in the document.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Number of results that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }
}

/// Everything extracted from one input document.
/// 从单个输入文档中提取的全部内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRun {
    source_path: PathBuf,
    suites: Vec<TestSuite>,
}

impl ExtractionRun {
    pub fn new(source_path: impl Into<PathBuf>, suites: Vec<TestSuite>) -> Self {
        Self {
            source_path: source_path.into(),
            suites,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn suites(&self) -> &[TestSuite] {
        &self.suites
    }

    /// The label used in the job markers: the directory portion of the
    /// source path, or an empty string when the path is a bare file name.
    ///
    /// 作业标记中使用的标签：源路径的目录部分；当路径只是文件名时为空字符串。
    pub fn job_label(&self) -> String {
        self.source_path
            .parent()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    }

    /// Total number of results across all suites.
    pub fn result_count(&self) -> usize {
        self.suites.iter().map(|s| s.results().len()).sum()
    }
}
