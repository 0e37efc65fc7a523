use crate::{
    config::Settings,
    generator::{self, Generator, Report},
    node::Node,
    notation::{self, Notation},
    structured,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Notation(#[from] notation::NotationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Structured(#[from] structured::StructuredError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] generator::GenerateError),

    #[error("unable to export the folder structure: {source}")]
    #[diagnostic(code(treescaffold::export))]
    Export {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parses `content` into a tree, detecting the notation unless `format` forces one.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the content is structured data that cannot be parsed.
pub fn parse(content: &str, format: Option<Notation>) -> Result<Node, ScaffoldError> {
    let notation = notation::detect(content, format);

    log::debug!("parsing input as {}", notation);

    Ok(notation.parse(content)?)
}

/// Creates `tree` on disk as described by `settings`.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if a directory or file cannot be created. Entries created before
/// the failure are left in place.
pub fn generate(tree: &Node, settings: &Settings) -> Result<Report, ScaffoldError> {
    let report = Generator::from_settings(settings).generate(tree)?;

    Ok(report)
}

/// Parses `content` and generates the resulting tree.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The content is structured data that cannot be parsed.
/// - A directory or file cannot be created.
pub fn scaffold(content: &str, settings: &Settings) -> Result<Report, ScaffoldError> {
    let tree = parse(content, settings.format)?;

    generate(&tree, settings)
}

/// Serializes `tree` as a YAML `{name, is_directory, comment, children}` document.
///
/// The output is accepted by the structured-data parser, which rebuilds every entry as a
/// directory.
///
/// # Errors
///
/// Returns [`ScaffoldError::Export`] if serialization fails.
pub fn export(tree: &Node) -> Result<String, ScaffoldError> {
    serde_yaml::to_string(tree).map_err(|source| ScaffoldError::Export { source })
}
