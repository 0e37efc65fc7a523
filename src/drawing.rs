//! Parser for `tree`-style drawings:
//!
//! ```text
//! .
//! ├── api/
//! │   └── routes.py  # FastAPI endpoints
//! └── main.py
//! ```
//!
//! Nesting comes from the glyph run in front of each name. Directories are not always written
//! with a trailing `/`, so a name is also treated as a directory when the next entry is drawn
//! one level deeper.
use crate::{
    line::{self, ParentStack},
    node::{Node, NodeKind, ROOT_NAME},
};

/// Glyphs that open an entry: `├──`, `└──` and their ASCII forms `+--`, `` `-- ``.
const BRANCH_GLYPHS: [char; 6] = ['├', '└', '┣', '┗', '+', '`'];
/// Glyphs that carry an ancestor's column down: `│` and `|`.
const CONTINUATION_GLYPHS: [char; 3] = ['│', '┃', '|'];
/// Filler allowed after a glyph as part of the same depth unit.
const CONNECTORS: [char; 5] = ['─', '━', '-', ' ', '\u{a0}'];
/// Columns taken by one level of nesting, glyph and connector included.
const UNIT_WIDTH: usize = 4;

pub fn is_glyph(c: char) -> bool {
    BRANCH_GLYPHS.contains(&c) || CONTINUATION_GLYPHS.contains(&c)
}

fn is_dash(c: char) -> bool {
    matches!(c, '─' | '━' | '-')
}

/// Whether `line`, once trimmed, starts with a drawing glyph.
pub fn starts_with_glyph(line: &str) -> bool {
    let trimmed = line.trim_start();

    match trimmed.chars().next() {
        Some(c) if BRANCH_GLYPHS.contains(&c) => {
            // `+` and `` ` `` only count when followed by a dash, as in `+--`
            !matches!(c, '+' | '`') || trimmed[c.len_utf8()..].starts_with('-')
        }
        Some(c) => CONTINUATION_GLYPHS.contains(&c),
        None => false,
    }
}

/// One entry of the drawing, before kinds are decided.
#[derive(Debug)]
struct DrawnLine<'a> {
    depth: usize,
    content: &'a str,
}

/// Splits a line into its nesting depth and the text after the glyph run.
///
/// `indent` columns of leading blank space shared by the whole drawing are ignored first. After
/// that, every glyph together with up to three connector characters is one level, and so is every
/// run of four blank columns, which is what `tree` leaves under a last child. Returns `None` when
/// nothing but glyphs and blanks is left.
fn measure(line: &str, indent: usize) -> Option<DrawnLine<'_>> {
    let mut chars = line.char_indices().peekable();
    let mut skipped = 0;

    while skipped < indent {
        match chars.peek() {
            Some((_, c)) if c.is_whitespace() => {
                skipped += if *c == '\t' { UNIT_WIDTH } else { 1 };
                chars.next();
            }
            _ => break,
        }
    }

    let mut depth = 0;
    let mut blanks = 0;

    while let Some(&(index, c)) = chars.peek() {
        if is_glyph(c) {
            depth += 1;
            blanks = 0;
            chars.next();

            let mut filler = 0;
            let mut last = c;
            while filler < UNIT_WIDTH - 1 {
                match chars.peek() {
                    Some(&(_, next)) if CONNECTORS.contains(&next) => {
                        filler += 1;
                        last = next;
                        chars.next();
                    }
                    _ => break,
                }
            }

            // a branch drawn with a longer dash run still opens a single entry
            if BRANCH_GLYPHS.contains(&c) && is_dash(last) {
                while chars.next_if(|&(_, next)| is_dash(next)).is_some() {}
                while chars
                    .next_if(|&(_, next)| next == ' ' || next == '\u{a0}')
                    .is_some()
                {}
            }
        } else if c.is_whitespace() {
            blanks += if c == '\t' { UNIT_WIDTH } else { 1 };
            chars.next();

            if blanks >= UNIT_WIDTH {
                depth += 1;
                blanks -= UNIT_WIDTH;
            }
        } else {
            let content = line[index..].trim_end();

            log::trace!("depth {} for '{}'", depth, content);

            return Some(DrawnLine { depth, content });
        }
    }

    None
}

/// Parses a box-drawing sketch into a tree rooted at `.`.
pub fn parse(content: &str) -> Node {
    let indent = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(line::leading_columns)
        .min()
        .unwrap_or(0);

    let lines: Vec<DrawnLine> = content
        .lines()
        .filter_map(|line| measure(line, indent))
        .filter(|drawn| !(drawn.depth == 0 && drawn.content == ROOT_NAME))
        .collect();

    let mut stack = ParentStack::new();

    for (index, drawn) in lines.iter().enumerate() {
        let (token, comment) = line::split_comment(drawn.content);

        if line::is_placeholder(&token, comment.as_deref()) {
            log::debug!("dropping placeholder line '{}'", drawn.content);
            continue;
        }

        let name = line::clean_name(&token);
        if name.is_empty() {
            continue;
        }

        let is_directory = line::has_trailing_separator(&token)
            || lines
                .get(index + 1)
                .is_some_and(|next| next.depth > drawn.depth);

        if is_directory && !line::has_trailing_separator(&token) {
            log::debug!("next entry is nested under '{}', treating it as a directory", name);
        }

        let kind = if is_directory {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        let mut node = Node::new(name, kind);
        node.comment = comment;

        stack.push(node, drawn.depth);
    }

    stack.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_format() {
        let content = "
        ├── api/
        │   └── routes.py
        ├── core/
        │   └── classifier.py
        └── main.py
        ";

        let tree = parse(content);

        assert_eq!(tree.name, ".");
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[0].name, "api");
        assert!(tree.children[0].is_directory());
        assert_eq!(tree.children[0].children[0].name, "routes.py");
        assert!(!tree.children[0].children[0].is_directory());
        assert_eq!(tree.children[1].children[0].name, "classifier.py");
        assert_eq!(tree.children[2].name, "main.py");
    }

    #[test]
    fn test_lookahead_marks_unslashed_directories() {
        let content = "├── src\n│   └── lib.rs\n└── README";

        let tree = parse(content);

        assert!(tree.children[0].is_directory());
        assert_eq!(tree.children[0].children[0].name, "lib.rs");
        assert!(!tree.children[1].is_directory());
    }

    #[test]
    fn test_children_of_last_branch_use_blank_columns() {
        let content = ".\n├── main.py\n└── api\n    ├── v1\n    │   └── users.py\n    └── deps.py";

        let tree = parse(content);
        let api = tree.child("api").unwrap();

        assert_eq!(tree.children.len(), 2);
        assert!(api.is_directory());
        assert_eq!(api.children.len(), 2);
        assert_eq!(api.children[0].name, "v1");
        assert_eq!(api.children[0].children[0].name, "users.py");
        assert_eq!(api.children[1].name, "deps.py");
    }

    #[test]
    fn test_named_top_line_becomes_parent() {
        let content = "project/\n├── Cargo.toml\n└── src/\n    └── main.rs";

        let tree = parse(content);
        let project = &tree.children[0];

        assert_eq!(tree.children.len(), 1);
        assert_eq!(project.name, "project");
        assert_eq!(project.children.len(), 2);
        assert_eq!(project.children[1].children[0].name, "main.rs");
    }

    #[test]
    fn test_ascii_glyphs() {
        let content = "|-- docs\n|   `-- index.md\n`-- setup.cfg";

        let tree = parse(content);

        assert_eq!(tree.children.len(), 2);
        assert!(tree.children[0].is_directory());
        assert_eq!(tree.children[0].children[0].name, "index.md");
        assert_eq!(tree.children[1].name, "setup.cfg");
    }

    #[test]
    fn test_comments_and_placeholders() {
        let content = "\
├── main.py          # Entry point
├── node_modules/    # git ignored
├── assets/
│   └── ...
├── (generated files)
│
└── config.yaml  #";

        let tree = parse(content);
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["main.py", "assets", "config.yaml"]);
        assert_eq!(tree.children[0].comment.as_deref(), Some("Entry point"));
        assert!(tree.children[1].children.is_empty());
        assert_eq!(tree.children[2].comment, None);
    }

    #[test]
    fn test_lookahead_sees_dropped_lines() {
        let content = "├── vendor\n│   └── ...\n└── main.go";

        let tree = parse(content);

        assert!(tree.children[0].is_directory());
        assert!(tree.children[0].children.is_empty());
    }

    #[test]
    fn test_long_connectors_stay_out_of_names() {
        let tree = parse("├──── api/\n│     └──── x.py\n└━━━━━ main.py");

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].name, "api");
        assert!(tree.children[0].is_directory());
        assert_eq!(tree.children[0].children[0].name, "x.py");
        assert_eq!(tree.children[1].name, "main.py");
    }

    #[test]
    fn test_root_only_document_is_empty() {
        assert!(parse(".").children.is_empty());
        assert!(parse("").children.is_empty());
        assert!(parse("│\n│").children.is_empty());
    }

    #[test]
    fn test_starts_with_glyph() {
        assert!(starts_with_glyph("├── api/"));
        assert!(starts_with_glyph("   │   └── x"));
        assert!(starts_with_glyph("`-- x"));
        assert!(starts_with_glyph("+-- x"));
        assert!(!starts_with_glyph("+x"));
        assert!(!starts_with_glyph("- item"));
        assert!(!starts_with_glyph("api/"));
    }
}
