use crate::file::OpenMode;
use crate::vfs::VirtualFileSystem;

fn fs() -> VirtualFileSystem {
    VirtualFileSystem::new()
}

#[test]
fn test_mode_strings() {
    assert_eq!(OpenMode::from_mode_str("r"), OpenMode::Read);
    assert_eq!(OpenMode::from_mode_str("rt:BOM|utf-8"), OpenMode::Read);
    assert_eq!(OpenMode::from_mode_str("w"), OpenMode::Write);
    assert_eq!(OpenMode::from_mode_str("a"), OpenMode::Append);
    assert_eq!(OpenMode::from_mode_str(""), OpenMode::Read);
}

#[test]
fn test_read_mode_loads_content() {
    let fs = fs();
    fs.write_file("/a.txt", "one\ntwo\n").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Read);
    assert_eq!(f.read(None), "one\ntwo\n");
    assert!(f.eof());
}

#[test]
fn test_read_mode_missing_path_reads_empty() {
    let fs = fs();
    let mut f = fs.files().open("/nope.txt", OpenMode::Read);
    assert_eq!(f.read(None), "");
    assert!(f.eof());
}

#[test]
fn test_sequential_read_with_length() {
    let fs = fs();
    fs.write_file("/a.txt", "abcdef").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Read);
    assert_eq!(f.read(Some(2)), "ab");
    assert_eq!(f.pos(), 2);
    assert_eq!(f.read(Some(10)), "cdef");
    assert_eq!(f.read(Some(1)), "");
}

#[test]
fn test_gets_line_iteration() {
    let fs = fs();
    fs.write_file("/a.txt", "one\ntwo\nthree").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Read);
    assert_eq!(f.gets("\n").as_deref(), Some("one\n"));
    assert_eq!(f.gets("\n").as_deref(), Some("two\n"));
    // Unterminated remainder comes back as-is.
    assert_eq!(f.gets("\n").as_deref(), Some("three"));
    assert_eq!(f.gets("\n"), None);
}

#[test]
fn test_write_mode_commits_on_close() {
    let fs = fs();
    let mut f = fs.files().open("/out/gen.html", OpenMode::Write);
    f.puts("<html>");
    f.print("<body>");
    assert!(!fs.exists("/out/gen.html"), "uncommitted until close");

    f.close().unwrap();
    assert_eq!(fs.read_file("/out/gen.html").unwrap(), "<html>\n<body>");
    assert!(f.is_closed());

    // Closing again is a no-op.
    f.close().unwrap();
}

#[test]
fn test_read_mode_discards_on_close() {
    let fs = fs();
    fs.write_file("/a.txt", "original").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Read);
    f.write("clobbered");
    f.close().unwrap();
    assert_eq!(fs.read_file("/a.txt").unwrap(), "original");
}

#[test]
fn test_cursor_write_overwrites_in_place() {
    let fs = fs();
    let mut f = fs.files().open("/a.txt", OpenMode::Write);
    f.write("Hello World");
    f.rewind();
    // Overwrite-at-cursor, not truncate-and-append.
    assert_eq!(f.write("Jello"), 5);
    assert_eq!(f.pos(), 5);
    f.close().unwrap();
    assert_eq!(fs.read_file("/a.txt").unwrap(), "Jello World");
}

#[test]
fn test_cursor_write_extends_content() {
    let fs = fs();
    let mut f = fs.files().open("/a.txt", OpenMode::Write);
    f.write("ab");
    f.write("cdef");
    f.close().unwrap();
    assert_eq!(fs.read_file("/a.txt").unwrap(), "abcdef");
}

#[test]
fn test_rewind_and_set_pos() {
    let fs = fs();
    fs.write_file("/a.txt", "abcdef").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Read);
    let _ = f.read(None);
    f.rewind();
    assert_eq!(f.pos(), 0);
    f.set_pos(4);
    assert_eq!(f.read(None), "ef");
}

#[test]
fn test_scoped_open_commits() {
    let fs = fs();
    fs.files()
        .open_with("/log.txt", OpenMode::Write, |f| {
            f.puts("entry");
            Ok(())
        })
        .unwrap();
    assert_eq!(fs.read_file("/log.txt").unwrap(), "entry\n");
}

#[test]
fn test_scoped_open_closes_on_caller_error() {
    let fs = fs();
    let err = fs
        .files()
        .open_with("/log.txt", OpenMode::Write, |f| {
            f.puts("partial");
            fs.files().read("/does/not/exist")?;
            Ok(())
        })
        .unwrap_err();
    assert!(err.is_not_found());
    // The handle was still closed, so the buffered content committed.
    assert_eq!(fs.read_file("/log.txt").unwrap(), "partial\n");
}

#[test]
fn test_last_close_wins() {
    let fs = fs();
    let mut first = fs.files().open("/a.txt", OpenMode::Write);
    let mut second = fs.files().open("/a.txt", OpenMode::Write);
    first.write("from first");
    second.write("from second");
    first.close().unwrap();
    second.close().unwrap();
    assert_eq!(fs.read_file("/a.txt").unwrap(), "from second");
}

#[test]
fn test_append_mode_starts_empty() {
    let fs = fs();
    fs.write_file("/a.txt", "old").unwrap();

    let mut f = fs.files().open("/a.txt", OpenMode::Append);
    assert!(f.eof());
    f.write("new");
    f.close().unwrap();
    assert_eq!(fs.read_file("/a.txt").unwrap(), "new");
}

#[test]
fn test_read_lines_keep_terminators() {
    let fs = fs();
    fs.write_file("/a.txt", "one\ntwo\nthree").unwrap();
    assert_eq!(
        fs.files().read_lines("/a.txt").unwrap(),
        vec!["one\n", "two\n", "three"]
    );
}
