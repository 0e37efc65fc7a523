use crate::{
    drawing,
    node::Node,
    outline,
    structured::{self, StructuredError},
};
use miette::Diagnostic;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Hint value asking for the notation to be detected from the text.
pub const AUTO: &str = "auto";

#[derive(Debug, Error, Diagnostic)]
pub enum NotationError {
    #[error("Unsupported format: {name}")]
    #[diagnostic(
        code(treescaffold::notation::unsupported_format),
        help("Valid formats are: ['tree', 'simple', 'yaml', 'auto']")
    )]
    UnsupportedFormat { name: String },
}

/// The textual conventions a folder structure can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `tree`-style drawings with `├──`/`└──` branches.
    TreeDrawing,
    /// Plain names indented by four spaces per level.
    Indented,
    /// Nested YAML/JSON mappings and sequences.
    StructuredData,
}
impl Notation {
    fn as_str(&self) -> &str {
        match self {
            Self::TreeDrawing => "tree",
            Self::Indented => "simple",
            Self::StructuredData => "yaml",
        }
    }
    /// Reads a format hint. `auto` yields `None`.
    pub fn from_hint(hint: &str) -> Result<Option<Self>, NotationError> {
        if hint.trim().eq_ignore_ascii_case(AUTO) {
            return Ok(None);
        }

        hint.parse().map(Some)
    }
    /// Runs the parser for this notation.
    pub fn parse(&self, content: &str) -> Result<Node, StructuredError> {
        match self {
            Self::TreeDrawing => Ok(drawing::parse(content)),
            Self::Indented => Ok(outline::parse(content)),
            Self::StructuredData => structured::parse(content),
        }
    }
}
impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "tree" | "tree-drawing" | "drawing" => Ok(Self::TreeDrawing),
            "simple" | "indented" | "outline" => Ok(Self::Indented),
            "yaml" | "yml" | "json" | "structured" | "structured-data" => Ok(Self::StructuredData),
            _ => Err(NotationError::UnsupportedFormat {
                name: value.to_string(),
            }),
        }
    }
}
impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Picks the notation of `content`. An explicit `hint` always wins.
///
/// Without a hint: any line starting with a drawing glyph means a tree drawing; a document
/// opening with `- `, `key:`, `{` or `[` means structured data; anything else is an outline.
pub fn detect(content: &str, hint: Option<Notation>) -> Notation {
    if let Some(notation) = hint {
        return notation;
    }

    let notation = if content.lines().any(drawing::starts_with_glyph) {
        Notation::TreeDrawing
    } else if looks_structured(content) {
        Notation::StructuredData
    } else {
        Notation::Indented
    };

    log::debug!("detected {} notation", notation);

    notation
}

fn looks_structured(content: &str) -> bool {
    lazy_static::lazy_static! {
        static ref STRUCTURED_START: regex::Regex = regex::Regex::new(
            r#"(?x)
            ^(?:
                # sequence entry
                -(?:\s|$)
                |
                # mapping key, optionally quoted
                ["']?[^\s:\#"'\[\]{}]+["']?\s*:(?:\s|$)
                |
                # flow mapping or sequence
                [\[{]
            )"#
        ).expect("a valid regex pattern");
    }

    // leading YAML comments and document markers say nothing about the shape
    let first = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && *line != "---");

    first.is_some_and(|line| STRUCTURED_START.is_match(line))
}
