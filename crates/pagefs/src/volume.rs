//! The backing store and the synchronous operation set over it.
//!
//! `Volume` is the single layer permitted to raise `NotFound`,
//! `AlreadyExists` and `NotEmpty`. The façades built on top either
//! propagate these unchanged or soften them where the operation name
//! implies leniency.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::node::{Node, Stat};
use crate::path;

/// The low-level synchronous operation set of the backing store.
///
/// Implemented by the real in-memory volume and by a null stand-in,
/// selected at construction time.
pub trait Volume {
    /// Never raises.
    fn exists(&self, path: &Path) -> bool;

    /// Fails with `NotFound` if no node resolves.
    fn stat(&self, path: &Path) -> Result<Stat>;

    /// Fails with `NotFound` if the path does not resolve to a file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replaces or creates a file node. Fails with `NotFound` when the
    /// parent directory is missing; callers needing auto-creation go
    /// through the recursive-create operation first.
    fn write_file(&mut self, path: &Path, content: &[u8]) -> Result<()>;

    /// Non-recursive: fails with `AlreadyExists` when a node occupies the
    /// path and `NotFound` when the parent is missing. Recursive: creates
    /// all missing ancestors and succeeds silently if the path already
    /// exists as a directory.
    fn mkdir(&mut self, path: &Path, recursive: bool) -> Result<()>;

    /// Child names in insertion order. Fails with `NotFound` if the path
    /// is not a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Removes a file node. Fails with `NotFound` if absent or if the
    /// path is a directory.
    fn unlink(&mut self, path: &Path) -> Result<()>;

    /// Removes an empty directory. Fails with `NotEmpty` if it has
    /// children and `NotFound` if absent or not a directory.
    fn rmdir(&mut self, path: &Path) -> Result<()>;

    /// Discards the entire tree, restoring an empty root.
    fn reset(&mut self);
}

/// The real backing store: exclusive owner of the node tree rooted at `/`.
pub struct MemoryVolume {
    root: Node,
}

impl MemoryVolume {
    pub fn new() -> Self {
        Self {
            root: Node::new_dir(),
        }
    }

    fn node(&self, path: &Path) -> Option<&Node> {
        let mut cur = &self.root;
        for seg in path::segments(path) {
            cur = cur.children()?.get(&seg)?;
        }
        Some(cur)
    }

    fn node_mut(&mut self, path: &Path) -> Option<&mut Node> {
        let mut cur = &mut self.root;
        for seg in path::segments(path) {
            cur = cur.children_mut()?.get_mut(&seg)?;
        }
        Some(cur)
    }
}

impl Default for MemoryVolume {
    fn default() -> Self {
        Self::new()
    }
}

impl Volume for MemoryVolume {
    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }

    fn stat(&self, path: &Path) -> Result<Stat> {
        self.node(path)
            .map(Node::stat)
            .ok_or_else(|| Error::not_found(path))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.node(path)
            .and_then(Node::content)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| Error::not_found(path))
    }

    fn write_file(&mut self, path: &Path, content: &[u8]) -> Result<()> {
        let name = path::basename(path).ok_or_else(|| Error::not_found(path))?;
        if self.node(path).is_some_and(Node::is_dir) {
            return Err(Error::not_found(path));
        }
        let parent = self
            .node_mut(&path::dirname(path))
            .and_then(Node::children_mut)
            .ok_or_else(|| Error::not_found(path))?;
        parent.insert(name, Node::new_file(content.to_vec()));
        Ok(())
    }

    fn mkdir(&mut self, path: &Path, recursive: bool) -> Result<()> {
        if recursive {
            let mut cur = &mut self.root;
            let mut walked = std::path::PathBuf::from("/");
            for seg in path::segments(path) {
                // Checked before pushing so the error names the blocking
                // file, not its would-be child.
                let children = cur
                    .children_mut()
                    .ok_or_else(|| Error::already_exists(&walked))?;
                walked.push(&seg);
                cur = children.entry(seg).or_insert_with(Node::new_dir);
            }
            if cur.is_dir() {
                Ok(())
            } else {
                // The full path itself resolved to a file.
                Err(Error::already_exists(path))
            }
        } else {
            if self.node(path).is_some() {
                return Err(Error::already_exists(path));
            }
            let name = path::basename(path).ok_or_else(|| Error::already_exists(path))?;
            let parent = self
                .node_mut(&path::dirname(path))
                .and_then(Node::children_mut)
                .ok_or_else(|| Error::not_found(path))?;
            parent.insert(name, Node::new_dir());
            Ok(())
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>> {
        self.node(path)
            .and_then(Node::children)
            .map(|children| children.keys().cloned().collect())
            .ok_or_else(|| Error::not_found(path))
    }

    fn unlink(&mut self, path: &Path) -> Result<()> {
        let name = path::basename(path).ok_or_else(|| Error::not_found(path))?;
        if !self.node(path).is_some_and(Node::is_file) {
            return Err(Error::not_found(path));
        }
        let parent = self
            .node_mut(&path::dirname(path))
            .and_then(Node::children_mut)
            .ok_or_else(|| Error::not_found(path))?;
        parent.shift_remove(&name);
        Ok(())
    }

    fn rmdir(&mut self, path: &Path) -> Result<()> {
        // The root directory is never removed.
        let name = path::basename(path).ok_or_else(|| Error::not_found(path))?;
        match self.node(path) {
            Some(node) if node.is_dir() => {
                if node.children().is_some_and(|c| !c.is_empty()) {
                    return Err(Error::not_empty(path));
                }
            }
            _ => return Err(Error::not_found(path)),
        }
        let parent = self
            .node_mut(&path::dirname(path))
            .and_then(Node::children_mut)
            .ok_or_else(|| Error::not_found(path))?;
        parent.shift_remove(&name);
        Ok(())
    }

    fn reset(&mut self) {
        diagnostics::log_debug!("volume reset");
        self.root = Node::new_dir();
    }
}

/// No-op stand-in used when no backing store is available: reads miss,
/// writes are silently dropped.
pub struct NullVolume;

impl Volume for NullVolume {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn stat(&self, path: &Path) -> Result<Stat> {
        Err(Error::not_found(path))
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        Err(Error::not_found(path))
    }

    fn write_file(&mut self, _path: &Path, _content: &[u8]) -> Result<()> {
        Ok(())
    }

    fn mkdir(&mut self, _path: &Path, _recursive: bool) -> Result<()> {
        Ok(())
    }

    fn read_dir(&self, _path: &Path) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn unlink(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn rmdir(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn reset(&mut self) {}
}

/// A handle for the refcounted volume shared by every façade.
///
/// Single-threaded: a threaded host must guard the whole public
/// surface with one external mutex.
#[derive(Clone)]
pub struct VolumeHandle(Rc<RefCell<Box<dyn Volume>>>);

impl VolumeHandle {
    pub fn new(volume: Box<dyn Volume>) -> Self {
        Self(Rc::new(RefCell::new(volume)))
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.0.borrow().exists(path.as_ref())
    }

    pub fn stat<P: AsRef<Path>>(&self, path: P) -> Result<Stat> {
        self.0.borrow().stat(path.as_ref())
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        self.0.borrow().read_file(path.as_ref())
    }

    pub fn write_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> Result<()> {
        self.0.borrow_mut().write_file(path.as_ref(), content)
    }

    pub fn mkdir<P: AsRef<Path>>(&self, path: P, recursive: bool) -> Result<()> {
        self.0.borrow_mut().mkdir(path.as_ref(), recursive)
    }

    pub fn read_dir<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        self.0.borrow().read_dir(path.as_ref())
    }

    pub fn unlink<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.0.borrow_mut().unlink(path.as_ref())
    }

    pub fn rmdir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.0.borrow_mut().rmdir(path.as_ref())
    }

    pub fn reset(&self) {
        self.0.borrow_mut().reset();
    }
}
