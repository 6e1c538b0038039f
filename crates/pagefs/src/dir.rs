//! Directory façade: listing, creation/removal, glob and scoped
//! temporary directories.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::Result;
use crate::fileutils;
use crate::glob;
use crate::path;
use crate::volume::VolumeHandle;

const TMP_ROOT: &str = "/tmp";

/// Path-based directory operations over the volume.
#[derive(Clone)]
pub struct Dirs {
    vol: VolumeHandle,
}

impl Dirs {
    pub fn new(vol: VolumeHandle) -> Self {
        Self { vol }
    }

    /// True when the path exists and is a directory.
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.vol.stat(path).map(|s| s.is_dir()).unwrap_or(false)
    }

    /// Non-recursive create; the parent must already exist.
    pub fn mkdir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.vol.mkdir(path, false)
    }

    /// Removes an empty directory.
    pub fn rmdir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.vol.rmdir(path)
    }

    /// Directory listing with the synthetic `.` and `..` markers the
    /// consumer expects.
    pub fn entries<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let mut names = vec![".".to_string(), "..".to_string()];
        names.extend(self.vol.read_dir(path)?);
        Ok(names)
    }

    /// Directory listing without the synthetic markers.
    pub fn children<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        self.vol.read_dir(path)
    }

    pub fn is_empty<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        Ok(self.children(path)?.is_empty())
    }

    /// Expands a glob pattern against the volume.
    ///
    /// Recursive (`**`) patterns walk the whole tree under `base` and
    /// are returned in traversal order; single-level patterns match only
    /// the direct children of the pattern's directory component; literal
    /// patterns resolve to themselves when they exist.
    pub fn glob<P: AsRef<Path>>(&self, pattern: &str, base: Option<P>) -> Result<Vec<PathBuf>> {
        let base_dir = match &base {
            Some(p) if !p.as_ref().as_os_str().is_empty() => path::absolute(p.as_ref()),
            _ => PathBuf::from("/"),
        };

        if glob::is_recursive(pattern) {
            let regex = glob::to_regex(pattern)?;
            let matches = self
                .walk(&base_dir)
                .into_iter()
                .filter(|p| regex.is_match(&p.to_string_lossy()))
                .collect();
            return Ok(matches);
        }

        if glob::has_wildcard(pattern) {
            // Wildcards are only meaningful in the final component here.
            let (dir_part, name_pattern) = match pattern.rfind('/') {
                Some(0) => ("/", &pattern[1..]),
                Some(idx) => (&pattern[..idx], &pattern[idx + 1..]),
                None => (".", pattern),
            };
            let dir = if dir_part.starts_with('/') {
                PathBuf::from(dir_part)
            } else if dir_part == "." {
                base_dir
            } else {
                base_dir.join(dir_part)
            };
            if !self.exists(&dir) {
                return Ok(Vec::new());
            }
            let regex = glob::to_regex(name_pattern)?;
            let matches = self
                .children(&dir)?
                .into_iter()
                .filter(|name| regex.is_match(name))
                .map(|name| dir.join(name))
                .collect();
            return Ok(matches);
        }

        // Literal pattern: present iff the path exists.
        let full = if pattern.starts_with('/') {
            path::absolute(pattern)
        } else {
            base_dir.join(pattern)
        };
        if self.vol.exists(&full) {
            Ok(vec![full])
        } else {
            Ok(Vec::new())
        }
    }

    /// All paths under `base` in traversal order, parents before
    /// children, directories included. Iterative to stay safe on deeply
    /// nested trees.
    fn walk(&self, base: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let mut stack: Vec<PathBuf> = match self.vol.read_dir(base) {
            Ok(names) => names.into_iter().rev().map(|n| base.join(n)).collect(),
            Err(_) => return found,
        };
        while let Some(current) = stack.pop() {
            found.push(current.clone());
            if let Ok(names) = self.vol.read_dir(&current) {
                for name in names.into_iter().rev() {
                    stack.push(current.join(name));
                }
            }
        }
        found
    }

    /// The fixed temp root.
    pub fn tmpdir(&self) -> PathBuf {
        PathBuf::from(TMP_ROOT)
    }

    /// Creates a fresh directory under the temp root with a randomized
    /// suffix and returns its path. The caller owns cleanup; see
    /// [`Dirs::with_tmpdir`] for the scoped form.
    pub fn mktmpdir(&self, prefix: Option<&str>) -> Result<PathBuf> {
        let prefix = prefix.unwrap_or("tmp");
        self.vol.mkdir(self.tmpdir(), true)?;
        let mut rng = rand::thread_rng();
        let path = loop {
            let candidate = self
                .tmpdir()
                .join(format!("{}_{}", prefix, rng.gen_range(0..100_000)));
            if !self.vol.exists(&candidate) {
                break candidate;
            }
        };
        self.vol.mkdir(&path, false)?;
        Ok(path)
    }

    /// Scoped temporary directory: best-effort recursive cleanup runs on
    /// every exit path. Cleanup failures are swallowed so they can never
    /// mask the caller's own error.
    pub fn with_tmpdir<T, F>(&self, prefix: Option<&str>, f: F) -> Result<T>
    where
        F: FnOnce(&Path) -> Result<T>,
    {
        let path = self.mktmpdir(prefix)?;
        let result = f(&path);
        fileutils::remove_tree(&self.vol, &path);
        result
    }
}
