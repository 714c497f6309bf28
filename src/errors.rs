use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem call that failed, used to label [`IoError`].
#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading the site config")]
    Read,
    #[error("writing a theme file")]
    Write,
    #[error("creating a theme directory")]
    Mkdir,
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} at '{path}'")]
#[diagnostic(
    code(brutal::io),
    help("Check permissions and free disk space, then re-run. Files written so far are left in place.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self {
            operation,
            path: path.into(),
            source: error,
        }
    }
}
