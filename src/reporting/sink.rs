//! # Output Sinks Module / 输出目标模块
//!
//! A sink accepts rendered text blocks. The console sink writes to standard
//! output; the file sink appends to a file, reopening it for each block so
//! that several jobs and several invocations accumulate in the same file.
//!
//! 输出目标接收渲染后的文本块。控制台目标写入标准输出；
//! 文件目标以追加方式写入文件，每个文本块都重新打开文件，
//! 因此多个作业和多次调用的结果会累积在同一个文件中。

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Something that accepts a rendered text block.
pub trait Sink {
    /// Human-readable name used in diagnostics.
    fn label(&self) -> String;

    /// Writes `block` in full.
    fn accept(&mut self, block: &str) -> io::Result<()>;
}

/// Writes blocks to a console-like stream, flushing after each one.
pub struct ConsoleSink<W = io::Stdout> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn label(&self) -> String {
        "console".to_string()
    }

    fn accept(&mut self, block: &str) -> io::Result<()> {
        self.out.write_all(block.as_bytes())?;
        self.out.flush()
    }
}

/// Appends blocks to a file, creating it when needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for FileSink {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn accept(&mut self, block: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_console_sink_writes_block_verbatim() {
        let mut sink = ConsoleSink::new(Vec::<u8>::new());
        sink.accept("first\n").unwrap();
        sink.accept("second").unwrap();
        assert_eq!(sink.into_inner(), b"first\nsecond");
    }

    #[test]
    fn test_file_sink_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "existing\n").unwrap();

        FileSink::new(&path).accept("one\n").unwrap();
        FileSink::new(&path).accept("two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\none\ntwo\n");
    }

    #[test]
    fn test_file_sink_reports_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("missing").join("out.txt"));
        assert!(sink.accept("block").is_err());
    }
}
