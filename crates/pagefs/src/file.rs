//! File façade: whole-file operations and cursor-based open handles.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::node::Stat;
use crate::path;
use crate::volume::VolumeHandle;

/// Mode flag for an open file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
    Append,
}

impl OpenMode {
    /// Interprets a POSIX-style mode string. Unrecognized strings fall
    /// back to read, matching the consumer's lenient calling convention.
    pub fn from_mode_str(mode: &str) -> Self {
        if mode.contains('w') {
            OpenMode::Write
        } else if mode.contains('a') {
            OpenMode::Append
        } else {
            OpenMode::Read
        }
    }

    fn commits(self) -> bool {
        matches!(self, OpenMode::Write | OpenMode::Append)
    }
}

/// Path-based file operations over the volume.
#[derive(Clone)]
pub struct Files {
    vol: VolumeHandle,
}

impl Files {
    pub fn new(vol: VolumeHandle) -> Self {
        Self { vol }
    }

    /// Reads the full content of a file as UTF-8 text.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let bytes = self.vol.read_file(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Overwrites a file, creating missing parent directories. The
    /// consuming compiler expects writes to work without pre-created
    /// directories.
    pub fn write<P: AsRef<Path>>(&self, path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        self.vol.mkdir(path::dirname(path), true)?;
        self.vol.write_file(path, content.as_bytes())
    }

    pub fn size<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        Ok(self.vol.stat(path)?.size)
    }

    pub fn stat<P: AsRef<Path>>(&self, path: P) -> Result<Stat> {
        self.vol.stat(path)
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.vol.exists(path)
    }

    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.vol.stat(path).map(|s| s.is_file()).unwrap_or(false)
    }

    pub fn is_directory<P: AsRef<Path>>(&self, path: P) -> bool {
        self.vol.stat(path).map(|s| s.is_dir()).unwrap_or(false)
    }

    /// Anything present is readable; there are no permissions.
    pub fn is_readable<P: AsRef<Path>>(&self, path: P) -> bool {
        self.exists(path)
    }

    /// Everything is writable; there are no permissions.
    pub fn is_writable<P: AsRef<Path>>(&self, _path: P) -> bool {
        true
    }

    /// Deletes the given files, ignoring missing targets. Returns the
    /// number of paths attempted.
    pub fn delete<P: AsRef<Path>>(&self, paths: &[P]) -> usize {
        for path in paths {
            let _ = self.vol.unlink(path);
        }
        paths.len()
    }

    /// Reads a file split into lines, keeping line terminators.
    pub fn read_lines<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let content = self.read(path)?;
        Ok(content
            .split_inclusive('\n')
            .map(str::to_string)
            .collect())
    }

    /// Opens a cursor-bearing handle. Read mode loads existing content
    /// (a missing path reads as empty); write and append modes start
    /// from empty content and commit on close.
    pub fn open<P: AsRef<Path>>(&self, path: P, mode: OpenMode) -> OpenFile {
        let path = path::absolute(path);
        let content = if mode == OpenMode::Read {
            self.vol.read_file(&path).unwrap_or_default()
        } else {
            Vec::new()
        };
        OpenFile {
            vol: self.vol.clone(),
            path,
            mode,
            content,
            pos: 0,
            closed: false,
        }
    }

    /// Scoped open: the handle is closed on every exit path, including
    /// when the caller's operation fails partway through. A close
    /// failure never masks the caller's own error.
    pub fn open_with<P, T, F>(&self, path: P, mode: OpenMode, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut OpenFile) -> Result<T>,
    {
        let mut file = self.open(path, mode);
        let result = f(&mut file);
        match result {
            Ok(value) => {
                file.close()?;
                Ok(value)
            }
            Err(err) => {
                let _ = file.close();
                Err(err)
            }
        }
    }
}

/// A per-open view over a file's content: private buffer, cursor and
/// mode flag. Uncommitted until closed; the last close on a path wins.
pub struct OpenFile {
    vol: VolumeHandle,
    path: PathBuf,
    mode: OpenMode,
    content: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl OpenFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.content.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sequential read. With a length, returns up to that many bytes
    /// from the cursor; without, returns the remainder.
    pub fn read(&mut self, length: Option<usize>) -> String {
        let start = self.pos.min(self.content.len());
        let end = match length {
            Some(len) => (start + len).min(self.content.len()),
            None => self.content.len(),
        };
        self.pos = end;
        String::from_utf8_lossy(&self.content[start..end]).into_owned()
    }

    /// Returns the next separator-delimited chunk including the
    /// separator, or the unterminated remainder at end of content.
    /// `None` signals end of content.
    pub fn gets(&mut self, sep: &str) -> Option<String> {
        if self.pos >= self.content.len() {
            return None;
        }
        if sep.is_empty() {
            return Some(self.read(None));
        }
        let needle = sep.as_bytes();
        let found = self.content[self.pos..]
            .windows(needle.len())
            .position(|w| w == needle);
        let end = match found {
            Some(offset) => self.pos + offset + needle.len(),
            None => self.content.len(),
        };
        let chunk = String::from_utf8_lossy(&self.content[self.pos..end]).into_owned();
        self.pos = end;
        Some(chunk)
    }

    /// Cursor-relative overwrite: replaces bytes at the cursor,
    /// extending the content as needed, then advances the cursor.
    /// This is deliberately not a truncate-and-append.
    pub fn write(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        let head_end = self.pos.min(self.content.len());
        let tail_start = (self.pos + bytes.len()).min(self.content.len());
        let mut next = Vec::with_capacity(head_end + bytes.len() + self.content.len() - tail_start);
        next.extend_from_slice(&self.content[..head_end]);
        next.extend_from_slice(bytes);
        next.extend_from_slice(&self.content[tail_start..]);
        self.content = next;
        self.pos += bytes.len();
        bytes.len()
    }

    /// Writes the string followed by a newline unless it already ends
    /// with one.
    pub fn puts(&mut self, s: &str) {
        self.write(s);
        if !s.ends_with('\n') {
            self.write("\n");
        }
    }

    pub fn print(&mut self, s: &str) {
        self.write(s);
    }

    /// No-op; content is only committed at close.
    pub fn flush(&self) {}

    /// Commits the buffer back to the volume when the mode permits
    /// writing, synthesizing missing parent directories. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.mode.commits() {
            self.vol.mkdir(path::dirname(&self.path), true)?;
            self.vol.write_file(&self.path, &self.content)?;
        }
        Ok(())
    }
}
