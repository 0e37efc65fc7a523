use crate::{
    config::Settings,
    errors::{FileOperation, IoError},
    node::Node,
    policy::{self, PACKAGE_MARKER, PACKAGE_SOURCE_SUFFIX},
};
use miette::Diagnostic;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("I/O error while generating the folder structure")]
    #[diagnostic(code(treescaffold::generate::io))]
    Io(#[from] IoError),
}

/// What a [`Generator::generate`] call did, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub created_directories: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    /// Bare names of entries left out by the skip policy.
    pub skipped_items: Vec<String>,
}
impl Report {
    pub fn is_empty(&self) -> bool {
        self.total() == 0 && self.skipped_items.is_empty()
    }
    /// Number of directories and files created.
    pub fn total(&self) -> usize {
        self.created_directories.len() + self.created_files.len()
    }
}

/// Creates the directories and files described by a [`Node`] tree under a base directory.
///
/// Nothing is rolled back on failure: whatever was created before an error stays on disk. In
/// dry-run mode every decision is made and reported, but the filesystem is left untouched.
#[derive(Debug, Clone)]
pub struct Generator {
    base_path: PathBuf,
    dry_run: bool,
}
impl Generator {
    pub fn new(base_path: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            base_path: base_path.into(),
            dry_run,
        }
    }
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.output.clone(), settings.dry_run)
    }
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
    /// Materializes the children of `tree` under the base directory.
    ///
    /// Every call starts from an empty [`Report`], so a generator can be reused.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerateError`] as soon as a directory or file cannot be created, or a
    /// directory cannot be listed for the package marker check.
    pub fn generate(&self, tree: &Node) -> Result<Report, GenerateError> {
        let mut report = Report::default();

        if !self.dry_run {
            fs::create_dir_all(&self.base_path).map_err(|error| {
                IoError::new(FileOperation::Mkdir, self.base_path.clone(), error)
            })?;
        }

        self.generate_children(tree, &self.base_path, &mut report)?;

        log::debug!(
            "generated {} directories and {} files under {} ({} skipped)",
            report.created_directories.len(),
            report.created_files.len(),
            self.base_path.display(),
            report.skipped_items.len()
        );

        Ok(report)
    }
    fn generate_children(
        &self,
        node: &Node,
        current: &Path,
        report: &mut Report,
    ) -> Result<(), GenerateError> {
        for child in &node.children {
            if policy::should_skip(&child.name) {
                log::debug!("skipping {}", child.name);
                report.skipped_items.push(child.name.clone());
                continue;
            }

            let path = current.join(&child.name);

            if child.is_directory() {
                self.create_directory(&path, report)?;
                self.generate_children(child, &path, report)?;
                // only meaningful once everything below has been written
                self.ensure_package_marker(&path, report)?;
            } else {
                self.create_file(&path, child.comment.as_deref(), report)?;
            }
        }

        Ok(())
    }
    fn create_directory(&self, path: &Path, report: &mut Report) -> Result<(), GenerateError> {
        if !self.dry_run {
            fs::create_dir_all(path)
                .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;
        }

        log::debug!("create dir {}", path.display());
        report.created_directories.push(path.to_path_buf());

        Ok(())
    }
    /// Writes a one-line comment header when `comment` is set, otherwise touches the file.
    ///
    /// A comment header replaces existing content. A touch leaves existing content alone.
    fn create_file(
        &self,
        path: &Path,
        comment: Option<&str>,
        report: &mut Report,
    ) -> Result<(), GenerateError> {
        if !self.dry_run {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|error| IoError::new(FileOperation::Mkdir, parent.into(), error))?;
            }

            match comment {
                Some(comment) => {
                    let header = policy::comment_style(path).render(comment);

                    fs::write(path, header)
                        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;
                }
                None => touch(path)?,
            }
        }

        log::debug!("create file {}", path.display());
        report.created_files.push(path.to_path_buf());

        Ok(())
    }
    fn ensure_package_marker(&self, dir: &Path, report: &mut Report) -> Result<(), GenerateError> {
        if self.dry_run || !contains_package_sources(dir)? {
            return Ok(());
        }

        let marker = dir.join(PACKAGE_MARKER);
        if marker.exists() {
            return Ok(());
        }

        touch(&marker)?;

        log::debug!("create package marker {}", marker.display());
        report.created_files.push(marker);

        Ok(())
    }
}

fn touch(path: &Path) -> Result<(), IoError> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|error| IoError::new(FileOperation::Touch, path.into(), error))
}

/// Whether `dir` directly holds at least one file ending in [`PACKAGE_SOURCE_SUFFIX`].
fn contains_package_sources(dir: &Path) -> Result<bool, IoError> {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(dir).to_path_buf();

            IoError::new(FileOperation::ListDir, path, error.into())
        })?;

        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(PACKAGE_SOURCE_SUFFIX)
        {
            return Ok(true);
        }
    }

    Ok(false)
}
