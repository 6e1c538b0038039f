use super::sample_fs;
use crate::error::Error;
use crate::vfs::VirtualFileSystem;

#[test]
fn test_mkdir_p_is_idempotent() {
    let fs = VirtualFileSystem::new();
    fs.utils().mkdir_p("/a/b/c").unwrap();
    fs.utils().mkdir_p("/a/b/c").unwrap();
    assert!(fs.dirs().exists("/a/b/c"));
}

#[test]
fn test_mkdir_tolerates_existing_but_not_missing_parent() {
    let fs = VirtualFileSystem::new();
    fs.utils().mkdir("/d").unwrap();
    fs.utils().mkdir("/d").unwrap();
    assert!(matches!(
        fs.utils().mkdir("/x/y").unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn test_rm_rf_removes_whole_tree() {
    let fs = sample_fs();
    fs.utils().rm_rf("/content");
    assert!(!fs.exists("/content"));
    assert!(fs.exists("/config.yml"));
}

#[test]
fn test_rm_rf_missing_target_is_silent() {
    let fs = VirtualFileSystem::new();
    fs.utils().rm_rf("/never/was");
}

#[test]
fn test_rm_rf_single_file() {
    let fs = sample_fs();
    fs.utils().rm_rf("/config.yml");
    assert!(!fs.exists("/config.yml"));
}

#[test]
fn test_rm_f_versus_rm() {
    let fs = sample_fs();
    fs.utils().rm_f("/config.yml");
    assert!(!fs.exists("/config.yml"));
    // Missing target: forced form is silent, strict form errors.
    fs.utils().rm_f("/config.yml");
    assert!(fs.utils().rm("/config.yml").is_err());

    fs.utils().rm("/content/ch01.re").unwrap();
    assert!(!fs.exists("/content/ch01.re"));
}

#[test]
fn test_cp_to_file_destination() {
    let fs = sample_fs();
    fs.utils().cp("/config.yml", "/config.bak").unwrap();
    assert_eq!(fs.read_file("/config.bak").unwrap(), "language: ja\n");
    // Source is untouched.
    assert!(fs.exists("/config.yml"));
}

#[test]
fn test_cp_to_directory_appends_basename() {
    let fs = sample_fs();
    fs.mkdir("/backup", false).unwrap();
    fs.utils().cp("/config.yml", "/backup").unwrap();
    assert_eq!(fs.read_file("/backup/config.yml").unwrap(), "language: ja\n");
}

#[test]
fn test_cp_missing_source_errors() {
    let fs = VirtualFileSystem::new();
    assert!(matches!(
        fs.utils().cp("/nope", "/dest").unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn test_cp_r_copies_subtree() {
    let fs = sample_fs();
    fs.utils().cp_r("/content", "/copy").unwrap();
    assert_eq!(fs.read_file("/copy/ch01.re").unwrap(), "= Chapter One\n");
    assert_eq!(fs.read_file("/copy/ch02.re").unwrap(), "= Chapter Two\n");
    assert_eq!(fs.read_file("/copy/images/cover.png").unwrap(), "png-bytes");
    assert!(fs.exists("/content/ch01.re"));
}

#[test]
fn test_cp_r_preserves_listing_order() {
    let fs = sample_fs();
    fs.write_file("/content/appendix.re", "= Appendix\n").unwrap();
    fs.utils().cp_r("/content", "/copy").unwrap();
    assert_eq!(
        fs.dirs().children("/copy").unwrap(),
        fs.dirs().children("/content").unwrap()
    );
    assert_eq!(
        fs.dirs().children("/copy").unwrap(),
        vec!["ch01.re", "ch02.re", "images", "appendix.re"]
    );
}

#[test]
fn test_mv_file() {
    let fs = sample_fs();
    fs.utils().mv("/config.yml", "/renamed.yml").unwrap();
    assert_eq!(fs.read_file("/renamed.yml").unwrap(), "language: ja\n");
    assert!(!fs.exists("/config.yml"));
}

#[test]
fn test_mv_into_directory() {
    let fs = sample_fs();
    fs.mkdir("/etc", false).unwrap();
    fs.utils().mv("/config.yml", "/etc").unwrap();
    assert_eq!(fs.read_file("/etc/config.yml").unwrap(), "language: ja\n");
    assert!(!fs.exists("/config.yml"));
}

#[test]
fn test_links_degrade_to_copies() {
    let fs = sample_fs();
    fs.utils().ln_s("/config.yml", "/link.yml");
    assert_eq!(fs.read_file("/link.yml").unwrap(), "language: ja\n");

    fs.utils().ln("/config.yml", "/hard.yml");
    assert_eq!(fs.read_file("/hard.yml").unwrap(), "language: ja\n");

    // A missing source still never errors.
    fs.utils().ln_s("/nope", "/dangling");
    assert!(!fs.exists("/dangling"));
}

#[test]
fn test_touch_creates_but_never_clobbers() {
    let fs = sample_fs();
    fs.utils().touch("/new/dir/empty.txt").unwrap();
    assert_eq!(fs.read_file("/new/dir/empty.txt").unwrap(), "");

    fs.utils().touch("/config.yml").unwrap();
    assert_eq!(fs.read_file("/config.yml").unwrap(), "language: ja\n");
}
