//! Fixed rules applied while generating: which names are never created, how comment headers
//! are written per extension, and the Python package marker.
use indexmap::IndexMap;
use std::path::Path;

/// Empty file dropped into a directory holding Python sources.
pub const PACKAGE_MARKER: &str = "__init__.py";
/// Suffix of the files that call for a [`PACKAGE_MARKER`].
pub const PACKAGE_SOURCE_SUFFIX: &str = ".py";

/// Build artifacts and tooling metadata. Entries match exactly, as `*suffix` or as `prefix*`.
const SKIP_PATTERNS: [&str; 17] = [
    "__pycache__",
    "*.pyc",
    ".git",
    ".gitignore",
    ".DS_Store",
    "Thumbs.db",
    "*.log",
    ".pytest_cache",
    ".venv",
    "venv",
    ".env",
    "node_modules",
    ".coverage",
    "htmlcov",
    "*.egg-info",
    "build",
    "dist",
];

pub fn should_skip(name: &str) -> bool {
    SKIP_PATTERNS.iter().any(|pattern| {
        if let Some(suffix) = pattern.strip_prefix('*') {
            name.ends_with(suffix)
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            name.starts_with(prefix)
        } else {
            name == *pattern
        }
    })
}

/// How a one-line comment header is written for a given file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    Line(&'static str),
    Block(&'static str, &'static str),
}
impl CommentStyle {
    pub fn render(&self, comment: &str) -> String {
        match self {
            Self::Line(prefix) => format!("{} {}\n", prefix, comment),
            Self::Block(open, close) => format!("{} {} {}\n", open, comment, close),
        }
    }
}

pub const DEFAULT_COMMENT_STYLE: CommentStyle = CommentStyle::Line("#");

lazy_static::lazy_static! {
    static ref COMMENT_STYLES: IndexMap<&'static str, CommentStyle> = {
        use CommentStyle::{Block, Line};

        let mut styles = IndexMap::new();
        for ext in ["py", "yml", "yaml", "sh", "bash", "zsh", "fish", "ps1", "rb", "r", "pl"] {
            styles.insert(ext, Line("#"));
        }
        for ext in [
            "js", "ts", "java", "cpp", "c", "h", "hpp", "go", "rs", "php", "swift", "kt", "scala",
            "dart", "vue", "jsx", "tsx",
        ] {
            styles.insert(ext, Line("//"));
        }
        for ext in ["sql", "lua", "hs", "elm"] {
            styles.insert(ext, Line("--"));
        }
        for ext in ["m", "tex"] {
            styles.insert(ext, Line("%"));
        }
        styles.insert("clj", Line(";"));
        styles.insert("css", Block("/*", "*/"));
        styles.insert("html", Block("<!--", "-->"));
        styles.insert("xml", Block("<!--", "-->"));
        styles
    };
}

/// Picks the comment style from the file extension, falling back to `#`.
pub fn comment_style(path: &Path) -> CommentStyle {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| COMMENT_STYLES.get(ext.as_str()).copied())
        .unwrap_or(DEFAULT_COMMENT_STYLE)
}
