//! Public surface: the operations a hosting application needs to drive
//! an entire compilation session — load a project, let the compiler run
//! against the façades, read the generated artifacts back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use diagnostics::{log_debug, log_info};
use serde_json::Value;

use crate::dir::Dirs;
use crate::error::Result;
use crate::file::Files;
use crate::fileutils::FileUtils;
use crate::path;
use crate::volume::{MemoryVolume, NullVolume, Volume, VolumeHandle};

/// A complete virtual filesystem: one volume plus the façades the
/// document compiler calls into.
///
/// Each instance owns an independent tree, so several can coexist and
/// tests never share state.
pub struct VirtualFileSystem {
    vol: VolumeHandle,
    files: Files,
    dirs: Dirs,
    utils: FileUtils,
}

impl VirtualFileSystem {
    /// A filesystem backed by a real in-memory volume.
    pub fn new() -> Self {
        Self::with_volume(Box::new(MemoryVolume::new()))
    }

    /// A filesystem backed by the no-op volume, for hosts that provide
    /// no backing store.
    pub fn null() -> Self {
        Self::with_volume(Box::new(NullVolume))
    }

    pub fn with_volume(volume: Box<dyn Volume>) -> Self {
        diagnostics::init();
        let vol = VolumeHandle::new(volume);
        Self {
            files: Files::new(vol.clone()),
            dirs: Dirs::new(vol.clone()),
            utils: FileUtils::new(vol.clone()),
            vol,
        }
    }

    pub fn files(&self) -> &Files {
        &self.files
    }

    pub fn dirs(&self) -> &Dirs {
        &self.dirs
    }

    pub fn utils(&self) -> &FileUtils {
        &self.utils
    }

    /// Writes a file, creating any missing parent directories.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: &str) -> Result<()> {
        self.files.write(path, content)
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.files.read(path)
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.vol.exists(path)
    }

    /// Deletes a file; a missing target is a no-op, not an error.
    pub fn delete_file<P: AsRef<Path>>(&self, path: P) {
        let _ = self.vol.unlink(path);
    }

    pub fn mkdir<P: AsRef<Path>>(&self, path: P, recursive: bool) -> Result<()> {
        self.vol.mkdir(path, recursive)
    }

    /// Lists the entries of a directory; a missing path lists as empty.
    pub fn list_files<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        if !self.vol.exists(&path) {
            return Ok(Vec::new());
        }
        self.vol.read_dir(path)
    }

    /// Bulk-loads a path→content mapping, synthesizing intermediate
    /// directories. Additive: existing content is merged over, not
    /// cleared.
    pub fn from_map(&self, files: &BTreeMap<String, String>) -> Result<()> {
        log_info!("bulk import of {count} files", count: files.len());
        for (p, content) in files {
            self.files.write(p, content)?;
        }
        Ok(())
    }

    /// Flattens every file node to an absolute-path key with its full
    /// content. Directories are implicit and carry no keys.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let mut stack = vec![PathBuf::from("/")];
        while let Some(dir) = stack.pop() {
            let Ok(names) = self.vol.read_dir(&dir) else {
                continue;
            };
            for name in names {
                let child = dir.join(&name);
                match self.vol.stat(&child) {
                    Ok(stat) if stat.is_dir() => stack.push(child),
                    Ok(_) => {
                        if let Ok(content) = self.files.read(&child) {
                            out.insert(path::absolute(&child).to_string_lossy().into_owned(), content);
                        }
                    }
                    Err(_) => {}
                }
            }
        }
        log_debug!("bulk export of {count} files", count: out.len());
        out
    }

    /// JSON form of [`VirtualFileSystem::from_map`]: accepts an object
    /// of path keys to string content. Non-string values are skipped.
    pub fn from_json(&self, json: &Value) -> Result<()> {
        let Some(object) = json.as_object() else {
            return Ok(());
        };
        for (p, v) in object {
            if let Some(content) = v.as_str() {
                self.files.write(p, content)?;
            }
        }
        Ok(())
    }

    /// JSON form of [`VirtualFileSystem::to_map`].
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.to_map()
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }

    /// Discards the whole tree, restoring an empty root.
    pub fn reset(&self) {
        self.vol.reset();
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}
