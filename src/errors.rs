use miette::Diagnostic;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Filesystem step that was running when an [`IoError`] happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileOperation {
    #[error("read file")]
    Read,
    #[error("write comment header to")]
    Write,
    #[error("touch file")]
    Touch,
    #[error("create directory")]
    Mkdir,
    #[error("list directory")]
    ListDir,
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to {operation} '{}'", path.display())]
#[diagnostic(
    code(treescaffold::io),
    help("Check that the output location is writable and that no file stands where a directory is expected.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operation_and_path() {
        let error = IoError::new(
            FileOperation::Mkdir,
            PathBuf::from("out/api"),
            io::Error::new(io::ErrorKind::AlreadyExists, "file exists"),
        );

        assert_eq!(error.to_string(), "Failed to create directory 'out/api'");
        assert_eq!(error.source.kind(), io::ErrorKind::AlreadyExists);
    }
}
