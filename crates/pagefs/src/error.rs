use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in filesystem operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Path does not resolve, or resolves to the wrong node type
    NotFound(PathBuf),
    /// Non-recursive create where a node already occupies the path
    AlreadyExists(PathBuf),
    /// Non-recursive removal of a directory that still has children
    NotEmpty(PathBuf),
    /// Glob pattern failed to compile
    InvalidPattern(String),
}

impl Error {
    pub fn not_found<P: AsRef<Path>>(path: P) -> Self {
        Error::NotFound(path.as_ref().to_path_buf())
    }

    pub fn already_exists<P: AsRef<Path>>(path: P) -> Self {
        Error::AlreadyExists(path.as_ref().to_path_buf())
    }

    pub fn not_empty<P: AsRef<Path>>(path: P) -> Self {
        Error::NotEmpty(path.as_ref().to_path_buf())
    }

    pub fn invalid_pattern<S: AsRef<str>>(pattern: S) -> Self {
        Error::InvalidPattern(pattern.as_ref().into())
    }

    /// True when the error reports a missing (or wrong-typed) target.
    /// Lenient operations use this to decide what to swallow.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "No such file or directory: {}", path.display()),
            Error::AlreadyExists(path) => write!(f, "Entry already exists: {}", path.display()),
            Error::NotEmpty(path) => write!(f, "Directory not empty: {}", path.display()),
            Error::InvalidPattern(pattern) => write!(f, "Invalid glob pattern: {}", pattern),
        }
    }
}

impl std::error::Error for Error {}
