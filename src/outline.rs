//! Parser for plain indented outlines:
//!
//! ```text
//! api/
//!     routes.py  # FastAPI endpoints
//! main.py
//! ```
//!
//! One level of nesting is four columns. A name is a directory when it ends with `/` or has no
//! extension.
use crate::{
    line::{self, ParentStack},
    node::{Node, NodeKind, ROOT_NAME},
};

const INDENT_WIDTH: usize = 4;

/// Parses an indented outline into a tree rooted at `.`.
pub fn parse(content: &str) -> Node {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.trim() != ROOT_NAME)
        .collect();

    let mut stack = ParentStack::new();

    for raw in lines {
        let depth = line::leading_columns(raw) / INDENT_WIDTH;
        let (token, comment) = line::split_comment(raw);

        if line::is_placeholder(&token, comment.as_deref()) {
            log::debug!("dropping outline line '{}'", raw.trim());
            continue;
        }

        let name = line::clean_name(&token);
        if name.is_empty() {
            continue;
        }

        let kind = if line::has_trailing_separator(&token) || !line::has_extension(&name) {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        log::trace!("depth {} for '{}' ({:?})", depth, name, kind);

        let mut node = Node::new(name, kind);
        node.comment = comment;

        stack.push(node, depth);
    }

    stack.finish()
}
