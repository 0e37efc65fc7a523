use crate::notation::{Notation, NotationError};
use std::path::PathBuf;

/// Where and how a parsed structure gets generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory the tree is created under.
    pub output: PathBuf,
    /// Report what would be created without touching the filesystem.
    pub dry_run: bool,
    /// Forced input notation; `None` detects it from the text.
    pub format: Option<Notation>,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            dry_run: false,
            format: None,
        }
    }
}
impl Settings {
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
    /// Sets the notation from a hint such as `tree`, `simple`, `yaml` or `auto`.
    pub fn with_format(mut self, hint: &str) -> Result<Self, NotationError> {
        self.format = Notation::from_hint(hint)?;
        Ok(self)
    }
}
