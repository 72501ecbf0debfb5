//! # Document Loading Module / 文档加载模块
//!
//! This module turns a Jenkins XML report into a small, owned, read-only tree
//! that the extractor can walk. Parsing is done with the `quick-xml` pull
//! parser; the resulting nodes are stored in document (pre-)order in a flat
//! arena, so the descendants of a node are always a contiguous index range.
//!
//! 此模块将 Jenkins XML 报告转换为一个小型的、自有的只读树，供提取器遍历。
//! 解析使用 `quick-xml` 拉取式解析器完成；节点按文档（先序）顺序存储在一个扁平数组中，
//! 因此一个节点的所有后代始终是一个连续的索引区间。

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a report document from disk.
/// 从磁盘加载报告文档时产生的错误。
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The process lacks permission to read the file.
    /// 进程没有读取该文件的权限。
    #[error("Access rights are not granted to {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file does not exist.
    /// 文件不存在。
    #[error("File {} can't be opened (not found)", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Any other I/O failure while reading the file.
    /// 读取文件时发生的其他 I/O 错误。
    #[error("File {} can't be opened: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but is not a well-formed XML document.
    /// 文件已读取，但不是格式正确的 XML 文档。
    #[error("File {} is not a well-formed report: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl DocumentError {
    /// A short, stable name for the failure category, used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            DocumentError::PermissionDenied { .. } => "permission-denied",
            DocumentError::NotFound { .. } => "not-found",
            DocumentError::Unreadable { .. } => "unreadable",
            DocumentError::Malformed { .. } => "malformed",
        }
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => DocumentError::PermissionDenied { path, source },
            io::ErrorKind::NotFound => DocumentError::NotFound { path, source },
            _ => DocumentError::Unreadable { path, source },
        }
    }
}

/// A well-formedness failure found while parsing document text.
/// 解析文档文本时发现的格式错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(String);

impl ParseError {
    fn new(reason: impl Into<String>) -> Self {
        ParseError(reason.into())
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        ParseError(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ParseError(err.to_string())
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<usize>,
    /// Exclusive end of this node's subtree in the arena.
    end: usize,
}

/// A parsed XML document.
/// 已解析的 XML 文档。
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Reads and parses the document at `path`.
    ///
    /// I/O failures are classified by kind; content that is not valid UTF-8 or
    /// not well-formed XML is reported as [`DocumentError::Malformed`].
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|e| DocumentError::from_io(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| DocumentError::Malformed {
            path: path.to_path_buf(),
            reason: format!("invalid UTF-8: {}", e.utf8_error()),
        })?;
        Self::parse_str(&text).map_err(|e| DocumentError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parses a document held in memory.
    pub fn parse_str(text: &str) -> Result<Self, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = Reader::from_str(text);
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut roots = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if open.is_empty() {
                        roots += 1;
                    }
                    let index = nodes.len();
                    nodes.push(element(&start, open.last().copied())?);
                    open.push(index);
                }
                Event::Empty(start) => {
                    if open.is_empty() {
                        roots += 1;
                    }
                    let mut node = element(&start, open.last().copied())?;
                    node.end = nodes.len() + 1;
                    nodes.push(node);
                }
                Event::End(end) => {
                    let index = open.pop().ok_or_else(|| {
                        ParseError::new(format!(
                            "unexpected closing tag `{}`",
                            String::from_utf8_lossy(end.name().as_ref())
                        ))
                    })?;
                    nodes[index].end = nodes.len();
                }
                Event::Text(raw) => {
                    if raw.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }
                    let parent = open
                        .last()
                        .copied()
                        .ok_or_else(|| ParseError::new("text outside the root element"))?;
                    let value = raw.unescape()?.into_owned();
                    push_text(&mut nodes, parent, value);
                }
                Event::CData(raw) => {
                    let parent = open
                        .last()
                        .copied()
                        .ok_or_else(|| ParseError::new("CDATA outside the root element"))?;
                    let value = std::str::from_utf8(&raw)
                        .map_err(|e| ParseError::new(format!("invalid UTF-8 in CDATA: {e}")))?
                        .to_string();
                    push_text(&mut nodes, parent, value);
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes carry no data.
                _ => {}
            }
            if roots > 1 {
                return Err(ParseError::new("more than one root element"));
            }
        }

        if let Some(&index) = open.last() {
            let name = match &nodes[index].kind {
                NodeKind::Element { name, .. } => name.as_str(),
                NodeKind::Text(_) => "",
            };
            return Err(ParseError::new(format!("element `{name}` is never closed")));
        }
        if nodes.is_empty() {
            return Err(ParseError::new("root element is missing"));
        }
        Ok(Document { nodes })
    }

    /// The document's root element.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            index: 0,
        }
    }

    /// Every element named `tag` in the whole document, root included, in
    /// document order.
    pub fn descendants<'doc>(&'doc self, tag: &str) -> impl Iterator<Item = Node<'doc>> {
        (0..self.nodes.len())
            .map(move |index| Node { doc: self, index })
            .filter(move |node| node.name() == Some(tag))
    }
}

fn element(start: &BytesStart<'_>, parent: Option<usize>) -> Result<NodeData, ParseError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(NodeData {
        kind: NodeKind::Element { name, attributes },
        parent,
        end: 0,
    })
}

fn push_text(nodes: &mut Vec<NodeData>, parent: usize, value: String) {
    let end = nodes.len() + 1;
    nodes.push(NodeData {
        kind: NodeKind::Text(value),
        parent: Some(parent),
        end,
    });
}

/// A borrowed handle to one node of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'doc> {
    doc: &'doc Document,
    index: usize,
}

impl<'doc> Node<'doc> {
    fn data(&self) -> &'doc NodeData {
        &self.doc.nodes[self.index]
    }

    /// The element's qualified name, or `None` for text nodes.
    pub fn name(&self) -> Option<&'doc str> {
        match &self.data().kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// The unescaped value of the attribute called `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&'doc str> {
        match &self.data().kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Elements named `tag` anywhere below this node, in document order.
    /// The node itself is not included.
    pub fn descendants(self, tag: &str) -> impl Iterator<Item = Node<'doc>> {
        let doc = self.doc;
        (self.index + 1..self.data().end)
            .map(move |index| Node { doc, index })
            .filter(move |node| node.name() == Some(tag))
    }

    /// The first element named `tag` below this node, if any.
    pub fn first_descendant(self, tag: &str) -> Option<Node<'doc>> {
        self.descendants(tag).next()
    }

    /// The first direct child element named `tag`, if any.
    pub fn child(self, tag: &str) -> Option<Node<'doc>> {
        let parent = self.index;
        self.descendants(tag)
            .find(|node| node.data().parent == Some(parent))
    }

    /// Concatenated text content of every text and CDATA node below this one.
    pub fn text(&self) -> String {
        self.doc.nodes[self.index + 1..self.data().end]
            .iter()
            .filter_map(|node| match &node.kind {
                NodeKind::Text(value) => Some(value.as_str()),
                NodeKind::Element { .. } => None,
            })
            .collect()
    }
}
