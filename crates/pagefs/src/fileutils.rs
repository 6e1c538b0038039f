//! Bulk utility façade: composite create/remove/copy/move operations
//! with the leniency split the consuming compiler relies on.

use std::path::Path;

use diagnostics::log_warn;

use crate::error::{Error, Result};
use crate::path;
use crate::volume::VolumeHandle;

/// Composite file operations over the volume.
#[derive(Clone)]
pub struct FileUtils {
    vol: VolumeHandle,
}

impl FileUtils {
    pub fn new(vol: VolumeHandle) -> Self {
        Self { vol }
    }

    /// Recursive create with `mkdir -p` semantics: idempotent, missing
    /// ancestors are synthesized, "already exists" is not an error.
    pub fn mkdir_p<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match self.vol.mkdir(path, true) {
            Err(Error::AlreadyExists(_)) => Ok(()),
            other => other,
        }
    }

    /// Non-recursive create that tolerates an existing target.
    pub fn mkdir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match self.vol.mkdir(path, false) {
            Err(Error::AlreadyExists(_)) => Ok(()),
            other => other,
        }
    }

    /// Best-effort recursive remove; traversal errors are swallowed.
    pub fn rm_rf<P: AsRef<Path>>(&self, path: P) {
        remove_tree(&self.vol, path.as_ref());
    }

    /// Alias of [`FileUtils::rm_rf`].
    pub fn rm_r<P: AsRef<Path>>(&self, path: P) {
        self.rm_rf(path);
    }

    /// Force-remove a single file: missing targets are ignored.
    pub fn rm_f<P: AsRef<Path>>(&self, path: P) {
        let _ = self.vol.unlink(path);
    }

    /// Strict remove: fails with `NotFound` when the target is absent.
    pub fn rm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.vol.unlink(path)
    }

    /// Copies a file. When the destination is an existing directory the
    /// source's base name is appended to form the real destination.
    pub fn cp<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dest: Q) -> Result<()> {
        let src = src.as_ref();
        let content = self.vol.read_file(src)?;
        let dest = self.resolve_dest(src, dest.as_ref())?;
        self.vol.write_file(&dest, &content)
    }

    /// Recursive copy: directories are recreated at the destination and
    /// copied child by child; files delegate to [`FileUtils::cp`].
    pub fn cp_r<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dest: Q) -> Result<()> {
        let mut work = vec![(src.as_ref().to_path_buf(), dest.as_ref().to_path_buf())];
        while let Some((src, dest)) = work.pop() {
            if self.vol.stat(&src).map(|s| s.is_dir()).unwrap_or(false) {
                self.mkdir_p(&dest)?;
                // Reversed so the LIFO stack copies children in listing
                // order, keeping the destination's insertion order.
                for name in self.vol.read_dir(&src)?.into_iter().rev() {
                    work.push((src.join(&name), dest.join(&name)));
                }
            } else {
                self.cp(&src, &dest)?;
            }
        }
        Ok(())
    }

    /// Move: copy with the same destination convention as [`FileUtils::cp`],
    /// then a best-effort recursive delete of the source.
    pub fn mv<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dest: Q) -> Result<()> {
        self.cp(&src, dest)?;
        remove_tree(&self.vol, src.as_ref());
        Ok(())
    }

    /// Symbolic links are not representable here; degrades to a copy
    /// and warns, never errors.
    pub fn ln_s<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dest: Q) {
        log_warn!(
            "ln_s: symbolic links are not supported, copying {src} instead",
            src: src.as_ref().display().to_string(),
        );
        let _ = self.cp(src, dest);
    }

    /// Hard links are not representable here; degrades to a copy and
    /// warns, never errors.
    pub fn ln<P: AsRef<Path>, Q: AsRef<Path>>(&self, src: P, dest: Q) {
        log_warn!(
            "ln: hard links are not supported, copying {src} instead",
            src: src.as_ref().display().to_string(),
        );
        let _ = self.cp(src, dest);
    }

    /// Creates an empty file (with its parent chain) only when the path
    /// does not already exist. The model carries no timestamps, so an
    /// existing file is left untouched.
    pub fn touch<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.vol.exists(path) {
            return Ok(());
        }
        self.mkdir_p(path::dirname(path))?;
        self.vol.write_file(path, b"")
    }

    fn resolve_dest(&self, src: &Path, dest: &Path) -> Result<std::path::PathBuf> {
        if self.vol.stat(dest).map(|s| s.is_dir()).unwrap_or(false) {
            let name = path::basename(src).ok_or_else(|| Error::not_found(src))?;
            Ok(dest.join(name))
        } else {
            Ok(dest.to_path_buf())
        }
    }
}

/// Depth-first best-effort delete of a whole subtree. Every traversal
/// error is swallowed. Uses an explicit work stack so deeply nested
/// trees cannot exhaust the call stack.
pub(crate) fn remove_tree(vol: &VolumeHandle, path: &Path) {
    // Phase one: walk the subtree, unlinking files as they appear and
    // recording directories for the second pass.
    let mut dirs = Vec::new();
    let mut stack = vec![path.to_path_buf()];
    while let Some(current) = stack.pop() {
        match vol.stat(&current) {
            Ok(stat) if stat.is_dir() => {
                if let Ok(names) = vol.read_dir(&current) {
                    for name in names {
                        stack.push(current.join(name));
                    }
                }
                dirs.push(current);
            }
            Ok(_) => {
                let _ = vol.unlink(&current);
            }
            Err(_) => {}
        }
    }
    // Phase two: directories in reverse discovery order, children
    // before their parents.
    for dir in dirs.iter().rev() {
        let _ = vol.rmdir(dir);
    }
}
