//! Parser for nested mapping/sequence documents (YAML, and JSON as a subset of it).
//!
//! ```yaml
//! src:
//!   - main.py
//!   - utils:
//!       - helpers.py
//! docs: readme.md
//! ```
//!
//! Keys become directories. Scalars become leaves, typed by the extension heuristic. Mappings
//! listed inside a sequence are flattened into the enclosing directory. A mapping with a `name`
//! key is read as an exported node (`{name, children}`), see [`crate::api::export`].
use crate::{
    line,
    node::{Node, NodeKind, ROOT_NAME},
};
use miette::Diagnostic;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

const NAME_KEY: &str = "name";
const CHILDREN_KEY: &str = "children";

#[derive(Debug, Error, Diagnostic)]
pub enum StructuredError {
    #[error("Invalid structured-data (YAML/JSON) document: {source}")]
    #[diagnostic(
        code(treescaffold::structured::malformed),
        help("Check indentation, brackets and quoting, or force another notation with --format")
    )]
    Malformed {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parses a structured document into a tree rooted at `.`.
///
/// # Errors
///
/// Returns [`StructuredError::Malformed`] if the text is not a valid YAML/JSON document.
pub fn parse(content: &str) -> Result<Node, StructuredError> {
    let document: Value =
        serde_yaml::from_str(content).map_err(|source| StructuredError::Malformed { source })?;

    if let Value::Mapping(map) = &document {
        if let Some(name) = serialized_name(map) {
            if name == ROOT_NAME {
                return Ok(import(map, name));
            }
        }
    }

    Ok(directory(&document, ROOT_NAME))
}

/// Builds directory `name` whose entries are described by `value`.
fn directory(value: &Value, name: &str) -> Node {
    let mut node = Node::directory(name);

    collect(value, &mut node.children);

    node
}

/// Appends the entries described by `value` to `children`.
fn collect(value: &Value, children: &mut Vec<Node>) {
    match value {
        Value::Null => {}
        Value::Mapping(map) => match serialized_name(map) {
            Some(name) => children.push(import(map, name)),
            None => {
                for (key, value) in map {
                    match scalar_text(key) {
                        Some(key) => children.push(directory(value, &key)),
                        None => log::warn!("ignoring non-scalar mapping key {:?}", key),
                    }
                }
            }
        },
        Value::Sequence(items) => {
            for item in items {
                collect(item, children);
            }
        }
        Value::Tagged(tagged) => collect(&tagged.value, children),
        scalar => {
            if let Some(text) = scalar_text(scalar) {
                children.push(leaf(&text));
            }
        }
    }
}

/// Rebuilds an exported node.
///
/// Every imported node is a directory, whatever the export said about it, so files in an
/// exported tree come back as empty directories.
fn import(map: &Mapping, name: &str) -> Node {
    let mut node = Node::directory(name);

    if let Some(Value::Sequence(entries)) = map.get(CHILDREN_KEY) {
        for entry in entries {
            match entry {
                Value::Mapping(child) => match serialized_name(child) {
                    Some(child_name) => node.children.push(import(child, child_name)),
                    None => collect(entry, &mut node.children),
                },
                other => collect(other, &mut node.children),
            }
        }
    }

    node
}

fn serialized_name(map: &Mapping) -> Option<&str> {
    map.get(NAME_KEY).and_then(Value::as_str)
}

fn leaf(text: &str) -> Node {
    let name = line::clean_name(text);
    let kind = if line::has_trailing_separator(text.trim()) || !line::has_extension(&name) {
        NodeKind::Directory
    } else {
        NodeKind::File
    };

    Node::new(name, kind)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_leaf_under_key() {
        let tree = parse(r#"{"docs": "readme.md"}"#).unwrap();

        assert_eq!(tree.name, ".");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "docs");
        assert!(tree.children[0].is_directory());
        assert_eq!(tree.children[0].children[0].name, "readme.md");
        assert!(!tree.children[0].children[0].is_directory());
    }

    #[test]
    fn test_nested_mappings_and_sequences() {
        let content = "
src:
  - main.py
  - utils:
      - helpers.py
  - models/
tests: []
docs:
";

        let tree = parse(content).unwrap();
        let src = tree.child("src").unwrap();
        let names: Vec<&str> = src.children.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["main.py", "utils", "models"]);
        assert!(src.child("utils").unwrap().is_directory());
        assert_eq!(src.child("utils").unwrap().children[0].name, "helpers.py");
        assert!(src.child("models").unwrap().is_directory());
        assert!(tree.child("tests").unwrap().children.is_empty());
        assert!(tree.child("docs").unwrap().is_directory());
    }

    #[test]
    fn test_mapping_entries_in_sequence_are_flattened() {
        let tree = parse("- a.txt\n- lib: x.rs\n  bin: y.rs\n- b.txt").unwrap();
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["a.txt", "lib", "bin", "b.txt"]);
        assert_eq!(tree.children[1].children[0].name, "x.rs");
    }

    #[test]
    fn test_top_level_scalar() {
        let tree = parse("main.py").unwrap();

        assert_eq!(tree.children.len(), 1);
        assert!(!tree.children[0].is_directory());
    }

    #[test]
    fn test_numbers_and_bools_use_string_form() {
        let tree = parse("releases:\n  - 2024\n  - true").unwrap();
        let releases = tree.child("releases").unwrap();

        assert_eq!(releases.children[0].name, "2024");
        assert_eq!(releases.children[1].name, "true");
    }

    #[test]
    fn test_serialized_root_is_imported_as_directories() {
        let content = "
name: .
children:
  - name: api
    is_directory: true
    children:
      - name: routes.py
        is_directory: false
        children: []
";

        let tree = parse(content).unwrap();
        let api = &tree.children[0];

        assert_eq!(tree.name, ".");
        assert_eq!(api.name, "api");
        assert_eq!(api.children[0].name, "routes.py");
        // exported files come back as directories
        assert!(api.children[0].is_directory());
    }

    #[test]
    fn test_serialized_named_node_is_nested_under_root() {
        let tree = parse(r#"{"name": "project", "children": [{"name": "src"}]}"#).unwrap();

        assert_eq!(tree.name, ".");
        assert_eq!(tree.children[0].name, "project");
        assert_eq!(tree.children[0].children[0].name, "src");
    }

    #[test]
    fn test_empty_document_is_empty_root() {
        assert!(parse("").unwrap().children.is_empty());
        assert!(parse("{}").unwrap().children.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let error = parse("src: [main.py").unwrap_err();

        assert!(matches!(error, StructuredError::Malformed { .. }));
        assert!(error.to_string().contains("structured-data"));
    }
}
