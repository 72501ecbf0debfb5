//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Jenkins Extractor:
//! document loading, the data model, and the extraction walk.
//!
//! 此模块包含 Jenkins Extractor 的核心功能：
//! 文档加载、数据模型以及提取遍历。

pub mod config;
pub mod document;
pub mod extract;
pub mod models;

// Re-exports
pub use config::Invocation;
pub use document::{Document, DocumentError};
pub use extract::{extract, extract_file};
pub use models::{ExtractionRun, TestResult, TestSuite};
