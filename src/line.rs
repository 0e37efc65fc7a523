//! Pieces shared by the line-oriented parsers: comment splitting, name cleanup, the extension
//! heuristic and the depth stack that turns indented lines into a tree.
use crate::node::{Node, NodeKind, ROOT_NAME};

pub const COMMENT_MARKER: char = '#';
const ESCAPE: char = '\\';

/// Splits `text` at the first unescaped `#`.
///
/// The left side is returned trimmed with `\#` unescaped to `#`. The right side is the trimmed
/// comment, or `None` when there is no marker or nothing follows it.
pub fn split_comment(text: &str) -> (String, Option<String>) {
    let mut name = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        match ch {
            ESCAPE if matches!(chars.peek(), Some((_, COMMENT_MARKER))) => {
                name.push(COMMENT_MARKER);
                chars.next();
            }
            COMMENT_MARKER => {
                let comment = text[index + ch.len_utf8()..].trim();
                let comment = (!comment.is_empty()).then(|| comment.to_string());

                return (name.trim().to_string(), comment);
            }
            other => name.push(other),
        }
    }

    (name.trim().to_string(), None)
}

/// Entries standing in for omitted content, such as `...`, `(generated)` or
/// `cache/  # git ignored`. The "ignored" marker is looked for in the comment as well.
pub fn is_placeholder(name: &str, comment: Option<&str>) -> bool {
    let name = name.trim();
    let ignored = |text: &str| text.to_lowercase().contains("ignored");

    name.is_empty()
        || (name != ROOT_NAME && name.chars().all(|c| c == '.' || c == '…'))
        || name.starts_with('(')
        || ignored(name)
        || comment.is_some_and(ignored)
}

/// Extension heuristic: a name containing a `.` anywhere is a file.
///
/// A dot that is not the first character marks an ordinary extension. A name whose only dot is
/// the leading one (`.gitignore`, `.env`) is a hidden configuration file and counts as a file too.
pub fn has_extension(name: &str) -> bool {
    let dotfile = name.starts_with('.') && name.matches('.').count() == 1;

    dotfile || name.char_indices().any(|(index, c)| c == '.' && index > 0)
}

pub fn has_trailing_separator(token: &str) -> bool {
    token.ends_with('/') || token.ends_with('\\')
}

/// Removes leading and trailing path separators from a name token.
///
/// Leading ones are dropped so that a name can never point outside the output directory.
pub fn clean_name(token: &str) -> String {
    token
        .trim()
        .trim_matches(|c| c == '/' || c == '\\')
        .to_string()
}

/// Counts leading blank columns, expanding tabs to four spaces.
pub fn leading_columns(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Rebuilds a tree from `(node, depth)` pairs arriving in document order.
///
/// The stack is seeded with the root at depth -1. Before a node is pushed, every entry whose
/// depth is greater than or equal to the new depth is popped and attached to the entry below it,
/// so siblings always land under the same parent and children keep their written order. A file
/// that ends up with nested entries is turned into a directory.
#[derive(Debug)]
pub struct ParentStack {
    stack: Vec<(Node, isize)>,
}
impl ParentStack {
    pub fn new() -> Self {
        Self {
            stack: vec![(Node::root(), -1)],
        }
    }
    pub fn push(&mut self, node: Node, depth: usize) {
        let depth = depth as isize;

        while self.stack.len() > 1 && self.top_depth() >= depth {
            self.attach_top();
        }

        // a file cannot hold entries: anything nested under one turns it into a directory
        if let Some((parent, _)) = self.stack.last_mut() {
            if parent.kind == NodeKind::File {
                log::debug!("'{}' has nested entries, treating it as a directory", parent.name);
                parent.kind = NodeKind::Directory;
            }
        }

        self.stack.push((node, depth));
    }
    /// Closes every open level and returns the root.
    pub fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.attach_top();
        }

        self.stack
            .pop()
            .map(|(root, _)| root)
            .unwrap_or_else(Node::root)
    }
    fn top_depth(&self) -> isize {
        self.stack.last().map(|(_, depth)| *depth).unwrap_or(-1)
    }
    fn attach_top(&mut self) {
        if let Some((node, _)) = self.stack.pop() {
            if let Some((parent, _)) = self.stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}
impl Default for ParentStack {
    fn default() -> Self {
        Self::new()
    }
}
