//! # Job Reporter Module / 作业报告模块
//!
//! Frames one extraction run as a job block and hands the same block to every
//! configured sink, console first.
//!
//! 将一次提取运行组织为一个作业文本块，并把同一文本块依次交给每个已配置的输出目标，
//! 控制台优先。

use crate::core::models::ExtractionRun;
use crate::reporting::sink::{ConsoleSink, FileSink, Sink};
use crate::reporting::text::render_job;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while delivering a job block.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A sink could not accept the block.
    /// 某个输出目标无法接收文本块。
    #[error("Failed to write report for {job} to {sink}: {source}")]
    Sink {
        job: String,
        sink: String,
        #[source]
        source: io::Error,
    },
}

/// Delivers rendered jobs to an ordered set of sinks.
pub struct JobReporter {
    sinks: Vec<Box<dyn Sink>>,
}

impl JobReporter {
    /// A reporter writing to standard output and appending to `output`.
    pub fn new(output: &Path) -> Self {
        Self::with_sinks(vec![
            Box::new(ConsoleSink::stdout()),
            Box::new(FileSink::new(output)),
        ])
    }

    pub fn with_sinks(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self { sinks }
    }

    /// Renders `run` once and writes it, followed by a line terminator, to
    /// every sink. A failing sink does not stop the remaining ones; the first
    /// failure is returned.
    ///
    /// 渲染一次 `run`，并将其（后跟换行符）写入每个输出目标。
    /// 某个目标失败不会阻止其余目标；返回第一个失败。
    pub fn report(&mut self, run: &ExtractionRun) -> Result<(), ReportError> {
        let mut block = render_job(run);
        block.push('\n');

        let mut first_error = None;
        for sink in &mut self.sinks {
            match sink.accept(&block) {
                Ok(()) => debug!(sink = %sink.label(), bytes = block.len(), "wrote job"),
                Err(source) => {
                    if first_error.is_none() {
                        first_error = Some(ReportError::Sink {
                            job: run.source_path().display().to_string(),
                            sink: sink.label(),
                            source,
                        });
                    }
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
