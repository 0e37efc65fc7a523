use serde::Serialize;

/// Name of the synthetic node every parsed tree is rooted at.
pub const ROOT_NAME: &str = ".";

/// Whether a [`Node`] is realised as a directory or as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry of a parsed folder structure.
///
/// Every parser produces a tree of these rooted at a directory named [`ROOT_NAME`], which stands
/// for the output base directory. Children keep the order they were written in, and siblings may
/// share a name: nothing here de-duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// The path segment, without separators.
    pub name: String,
    #[serde(rename = "is_directory", serialize_with = "serialize_kind")]
    pub kind: NodeKind,
    /// Inline annotation, written as a header line when the file is created.
    pub comment: Option<String>,
    pub children: Vec<Node>,
}
impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            comment: None,
            children: Vec::new(),
        }
    }
    pub fn root() -> Self {
        Self::directory(ROOT_NAME)
    }
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Directory)
    }
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::File)
    }
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
    /// Finds the first direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }
}

fn serialize_kind<S: serde::Serializer>(kind: &NodeKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(*kind == NodeKind::Directory)
}
