//! # Reporting Module / 报告模块
//!
//! This module renders extraction runs as the plain-text job report and
//! delivers it to the console and the output file.
//!
//! 此模块将提取运行渲染为纯文本作业报告，并将其输出到控制台和输出文件。

pub mod job;
pub mod sink;
pub mod text;

// Re-export common reporting items
pub use job::{JobReporter, ReportError};
pub use sink::{ConsoleSink, FileSink, Sink};
pub use text::{render_job, render_result, render_suite};
