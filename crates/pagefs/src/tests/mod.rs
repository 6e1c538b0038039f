mod handles;
mod utils;

use crate::vfs::VirtualFileSystem;

/// A filesystem pre-populated with a small project layout shared by
/// several suites.
pub(crate) fn sample_fs() -> VirtualFileSystem {
    let fs = VirtualFileSystem::new();
    fs.write_file("/content/ch01.re", "= Chapter One\n").unwrap();
    fs.write_file("/content/ch02.re", "= Chapter Two\n").unwrap();
    fs.write_file("/content/images/cover.png", "png-bytes").unwrap();
    fs.write_file("/config.yml", "language: ja\n").unwrap();
    fs
}
