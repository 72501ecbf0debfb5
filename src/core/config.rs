use std::path::PathBuf;

/// File the report is appended to when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Represents one invocation of the extractor: the report documents to read
/// and the file the rendered jobs are appended to.
/// 代表提取器的一次调用：要读取的报告文档以及渲染后作业追加写入的文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Input documents, processed in this order.
    /// 输入文档，按此顺序处理。
    pub inputs: Vec<PathBuf>,
    /// Output file, opened in append mode for every job.
    /// 输出文件，每个作业都以追加模式打开。
    pub output: PathBuf,
}

impl Invocation {
    pub fn new(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            inputs,
            output: output.unwrap_or_else(default_output),
        }
    }
}

impl Default for Invocation {
    fn default() -> Self {
        Self::new(vec![], None)
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
