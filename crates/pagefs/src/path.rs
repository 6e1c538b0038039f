//! Lexical path handling for the virtual volume.
//!
//! Every path entering the volume is reduced to a vector of plain name
//! segments before resolution. There are no cached handles: paths are
//! resolved fresh against the tree on every operation, so structural
//! mutation can never dangle a resolver.

use std::path::{Component, Path, PathBuf};

/// Normalizes a POSIX-style path into its name segments.
///
/// Empty and `.` segments collapse, `..` pops (the root's parent is the
/// root itself), and trailing separators drop. Relative paths resolve
/// against `/`.
pub fn segments<P: AsRef<Path>>(path: P) -> Vec<String> {
    let mut segs: Vec<String> = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                let _ = segs.pop();
            }
            Component::Normal(name) => {
                segs.push(name.to_string_lossy().to_string());
            }
        }
    }
    segs
}

/// Renders a path in absolute normalized form.
pub fn absolute<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out = PathBuf::from("/");
    for seg in segments(path) {
        out.push(seg);
    }
    out
}

/// Extracts the final component of a path as a string, if possible
pub fn basename<P: AsRef<Path>>(path: P) -> Option<String> {
    segments(path).pop()
}

/// Extracts the directory component of a path in absolute form.
/// The parent of the root is the root.
pub fn dirname<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut segs = segments(path);
    let _ = segs.pop();
    let mut out = PathBuf::from("/");
    for seg in segs {
        out.push(seg);
    }
    out
}

/// True for `/` and everything that normalizes to it.
pub fn is_root<P: AsRef<Path>>(path: P) -> bool {
    segments(path).is_empty()
}
