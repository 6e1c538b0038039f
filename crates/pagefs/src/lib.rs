//! An in-memory, POSIX-flavored filesystem for document compilation.
//!
//! A document-compilation engine performs ordinary file and directory
//! operations (read, write, stat, glob, recursive copy/move/delete)
//! against a purely in-memory tree, while a hosting application loads a
//! whole project in and reads every generated artifact back out through
//! one bulk path→content surface.
//!
//! Layering, leaves first:
//!
//! - [`node`] / [`path`]: the volume data model and lexical path handling.
//! - [`volume`]: the synchronous low-level operation set; the only layer
//!   that raises `NotFound`/`AlreadyExists`/`NotEmpty`.
//! - [`file`], [`dir`], [`fileutils`]: the façades the compiler calls,
//!   with the per-operation leniency/strictness split it relies on.
//! - [`vfs`]: the public surface for the hosting application, including
//!   bulk import/export and reset.
//!
//! Everything is single-threaded and fully synchronous; a threaded host
//! must guard the whole surface with one external mutex.

pub mod dir;
pub mod error;
pub mod file;
pub mod fileutils;
pub mod glob;
pub mod node;
pub mod path;
pub mod vfs;
pub mod volume;

pub use dir::Dirs;
pub use error::{Error, Result};
pub use file::{Files, OpenFile, OpenMode};
pub use fileutils::FileUtils;
pub use node::{EntryType, Node, Stat};
pub use vfs::VirtualFileSystem;
pub use volume::{MemoryVolume, NullVolume, Volume, VolumeHandle};

#[cfg(test)]
mod tests;
