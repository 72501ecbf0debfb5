//! # Jenkins Extractor Library / Jenkins Extractor 库
//!
//! This library reads Jenkins XML test reports, extracts every named suite
//! with the pass/fail outcome and identifier of each of its tests, and renders
//! the result as a plain-text job report for the console and an output file.
//!
//! 此库读取 Jenkins XML 测试报告，提取每个具名套件及其中每个测试的通过/失败结果和标识符，
//! 并将结果渲染为纯文本作业报告，输出到控制台和输出文件。
//!
//! ## Modules / 模块
//!
//! - `core` - Document loading, data model and the extraction walk
//! - `reporting` - Text rendering and output sinks
//! - `infra` - Logging set-up
//! - `cli` - Command-line parsing
//! - `commands` - The per-file driver loop
//!
//! - `core` - 文档加载、数据模型和提取遍历
//! - `reporting` - 文本渲染和输出目标
//! - `infra` - 日志初始化
//! - `cli` - 命令行解析
//! - `commands` - 逐文件驱动循环

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config;
pub use crate::core::extract;
