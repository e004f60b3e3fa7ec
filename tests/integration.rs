//! Integration tests for dirtree


use harness::{TestDir, run_dirtree};

fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().collect()
}

#[test]
fn test_basic_listing() {
    let dir = TestDir::new();
    dir.add_file("main.rs", "fn main() {}");
    dir.add_file("lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[]);
    assert!(success, "dirtree should succeed");
    assert_eq!(lines(&stdout), [".", "  lib.rs", "  main.rs"]);
}

#[test]
fn test_directories_before_files() {
    let dir = TestDir::new();
    // Alphabetically a.txt < b < c.txt < d, but directories come first
    dir.add_file("a.txt", "");
    dir.add_dir("b");
    dir.add_file("c.txt", "");
    dir.add_dir("d");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[]);
    assert!(success);
    assert_eq!(lines(&stdout), [".", "  b", "  d", "  a.txt", "  c.txt"]);
}

#[test]
fn test_summary_scenario() {
    let dir = TestDir::new();
    dir.add_dir("R/A");
    dir.add_file("R/b.txt", "0123456789");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-s", "R"]);
    assert!(success);
    let out = lines(&stdout);
    assert!(out[0].starts_with("Name"), "header expected: {}", stdout);
    assert!(out[0].contains("User:Group"));
    assert!(out[1].starts_with("-----"));
    assert_eq!(&out[2..5], ["R", "  A", "  b.txt"]);
    assert!(out[5].starts_with("-----"));
    assert_eq!(out[6], "1 file, 1 directory, 0 links, 0 pipes, and 0 sockets");
    assert_eq!(out.len(), 7, "no grand total for a single root: {}", stdout);
}

#[test]
fn test_dirs_only_scenario() {
    let dir = TestDir::new();
    dir.add_dir("R/A");
    dir.add_file("R/b.txt", "0123456789");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-d", "-s", "R"]);
    assert!(success);
    assert!(stdout.contains("  A\n"));
    assert!(!stdout.contains("b.txt"), "files must be hidden: {}", stdout);
    assert_eq!(*lines(&stdout).last().unwrap(), "1 directory");
}

#[test]
fn test_dirs_only_recurses() {
    let dir = TestDir::new();
    dir.add_file("top/mid/bottom/file.txt", "x");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-d", "-s"]);
    assert!(success);
    assert_eq!(
        lines(&stdout)[2..6],
        [".", "  top", "    mid", "      bottom"]
    );
    assert_eq!(*lines(&stdout).last().unwrap(), "3 directories");
}

#[test]
fn test_verbose_columns() {
    let dir = TestDir::new();
    dir.add_file("data.bin", "0123456789");
    dir.add_dir("sub");
    dir.set_mode("data.bin", 0o640);
    dir.set_mode("sub", 0o750);

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-v", "-n"]);
    assert!(success);
    let out = lines(&stdout);

    let sub = out.iter().find(|l| l.starts_with("  sub")).unwrap();
    assert!(sub.ends_with("rwxr-x---  d"), "got: {:?}", sub);

    let data = out.iter().find(|l| l.starts_with("  data.bin")).unwrap();
    assert!(data.ends_with("10  rw-r-----"), "got: {:?}", data);
    // Numeric ids in owner:group column
    let ident = data.split_whitespace().nth(1).unwrap();
    let (uid, gid) = ident.split_once(':').unwrap();
    assert!(uid.parse::<u32>().is_ok() && gid.parse::<u32>().is_ok(), "got: {}", ident);
}

#[test]
fn test_verbose_summary_reports_size() {
    let dir = TestDir::new();
    dir.add_file("a", "12345");
    dir.add_file("sub/b", "123");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-v", "-s"]);
    assert!(success);
    assert!(stdout.contains("2 files, 1 directory, 0 links, 0 pipes, and 0 sockets\n"));
    assert!(stdout.contains("Total size: 8 bytes\n"));
}

#[test]
fn test_grand_total_for_multiple_roots() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "1");
    dir.add_file("two/b.txt", "22");
    dir.add_dir("two/c");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-s", "one", "two"]);
    assert!(success);
    assert!(stdout.contains("Analyzed 2 directories:\n"));
    assert!(stdout.contains("  total # of files:                       2\n"));
    assert!(stdout.contains("  total # of directories:                 1\n"));
    assert!(!stdout.contains("total file size"));
    // One header per root
    assert_eq!(stdout.matches("User:Group").count(), 2);
}

#[test]
fn test_grand_total_verbose_and_dirs_only() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "1");
    dir.add_file("two/b.txt", "22");

    let (stdout, _, _) = run_dirtree(dir.path(), &["-s", "-v", "one", "two"]);
    assert!(stdout.contains("  total file size:                        3\n"));

    let (stdout, _, _) = run_dirtree(dir.path(), &["-s", "-d", "one", "two"]);
    assert!(stdout.contains("Analyzed 2 directories:\n  total # of directories:"));
    assert!(!stdout.contains("total # of files"));
}

#[test]
fn test_no_grand_total_without_summary() {
    let dir = TestDir::new();
    dir.add_dir("one");
    dir.add_dir("two");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["one", "two"]);
    assert!(success);
    assert!(!stdout.contains("Analyzed"));
    assert_eq!(lines(&stdout), ["one", "two"]);
}

#[test]
fn test_json_report() {
    let dir = TestDir::new();
    dir.add_file("one/a.txt", "1234");
    dir.add_dir("two/sub");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--json", "one", "two"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["roots"][0]["path"], "one");
    assert_eq!(value["roots"][0]["summary"]["files"], 1);
    assert_eq!(value["roots"][0]["summary"]["size"], 4);
    assert_eq!(value["roots"][1]["summary"]["directories"], 1);
    assert_eq!(value["total"]["roots"], 2);
    assert_eq!(value["total"]["summary"]["files"], 1);
}

#[test]
fn test_parallel_jobs_same_output() {
    let dir = TestDir::new();
    for d in ["a", "b", "c"] {
        for f in ["1", "2", "3"] {
            dir.add_file(&format!("{}/{}/{}.txt", d, f, f), f);
        }
    }

    let (sequential, _, _) = run_dirtree(dir.path(), &["-s", "-v", "-n"]);
    let (parallel, _, success) = run_dirtree(dir.path(), &["-s", "-v", "-n", "-j", "4"]);
    assert!(success);
    assert_eq!(parallel, sequential);
    let (auto, _, _) = run_dirtree(dir.path(), &["-s", "-v", "-n", "-j", "0"]);
    assert_eq!(auto, sequential);
}

#[test]
fn test_max_entries() {
    let dir = TestDir::new();
    for name in ["a", "b", "c"] {
        dir.add_file(name, "");
    }

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["--max-entries", "1", "-s"]);
    assert!(success);
    assert!(stdout.contains("  a\n"));
    assert!(!stdout.contains("  b\n"));
    assert!(stdout.contains("WARNING: 2 of 3 entries not shown (limit 1)"));
    assert!(stdout.contains("1 file, 0 directories"));
}
