use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn mdline<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_mdline"))
        .args(args)
        .output()
        .expect("failed to run mdline")
}

/// Run against a fresh `doc.md` with `RUST_LOG` cleared so flags alone pick the log level.
fn convert_with_flags(flags: &[&str], markdown: &str) -> (Output, String) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, markdown).unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_mdline"))
        .env_remove("RUST_LOG")
        .args(flags)
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run mdline");
    let html = fs::read_to_string(&output).unwrap_or_default();
    (result, html)
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_converts_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "# Hi\n- a\n- b\n").unwrap();

    let result = mdline([&input, &output]);

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<h1>Hi</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn test_no_arguments_prints_usage() {
    let result = mdline(Vec::<&OsStr>::new());
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Usage: mdline <markdown_file> <html_file>"));
}

#[test]
fn test_one_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "# Hi").unwrap();

    let result = mdline([&input]);
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Usage:"));
}

#[test]
fn test_three_arguments_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.md");
    let b = dir.path().join("b.html");
    let c = dir.path().join("c.html");
    fs::write(&a, "# Hi").unwrap();

    let result = mdline([&a, &b, &c]);
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Usage:"));
    assert!(!b.exists());
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.md");
    let output = dir.path().join("out.html");

    let result = mdline([&input, &output]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains(&format!("Missing {}", input.display())));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_leaves_existing_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.md");
    let output = dir.path().join("out.html");
    fs::write(&output, "keep me").unwrap();

    let result = mdline([&input, &output]);

    assert_eq!(result.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn test_directory_input_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.html");

    let result = mdline([dir.path(), output.as_path()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Missing"));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, "text").unwrap();
    let output = dir.path().join("no-such-dir").join("out.html");

    let result = mdline([&input, &output]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("error: failed to write"));
}

#[test]
fn test_raw_paragraphs_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "hello\n  world  \n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_mdline"))
        .arg("--raw-paragraphs")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "hello\nworld");
}

#[test]
fn test_stdin_to_stdout() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mdline"))
        .args(["-", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"* one\n* two\n")
        .unwrap();
    let result = child.wait_with_output().unwrap();

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(result.stdout).unwrap(),
        "<ol>\n<li>one</li>\n<li>two</li>\n</ol>"
    );
}

#[test]
fn test_escape_html_flag() {
    let (result, html) = convert_with_flags(&["--escape-html"], "# a & b\n- <x>\n");
    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(html, "<h1>a &amp; b</h1>\n<ul>\n<li>&lt;x&gt;</li>\n</ul>");
}

#[test]
fn test_text_verbatim_without_escape_flag() {
    let (result, html) = convert_with_flags(&[], "# a & b");
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(html, "<h1>a & b</h1>");
}

#[test]
fn test_default_run_is_silent() {
    let (result, _) = convert_with_flags(&[], "# Hi");
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(stderr(&result), "");
}

#[test]
fn test_single_verbose_logs_info() {
    let (result, html) = convert_with_flags(&["-v"], "# Hi");
    let log = stderr(&result);
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(html, "<h1>Hi</h1>");
    assert!(log.contains("wrote"), "stderr: {log}");
    assert!(!log.contains("converted"), "stderr: {log}");
}

#[test]
fn test_double_verbose_logs_debug() {
    let (result, _) = convert_with_flags(&["-vv"], "# Hi");
    let log = stderr(&result);
    assert_eq!(result.status.code(), Some(0));
    assert!(log.contains("converted"), "stderr: {log}");
    assert!(log.contains("wrote"), "stderr: {log}");
}

#[test]
fn test_quiet_flag() {
    let (result, html) = convert_with_flags(&["-q"], "- a");
    assert_eq!(result.status.code(), Some(0));
    assert_eq!(stderr(&result), "");
    assert_eq!(html, "<ul>\n<li>a</li>\n</ul>");
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let (result, html) = convert_with_flags(&["-v", "-q"], "# Hi");
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Usage: mdline <markdown_file> <html_file>"));
    assert_eq!(html, "");
}

#[test]
fn test_unknown_flag_prints_usage() {
    let (result, html) = convert_with_flags(&["--bogus"], "# Hi");
    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).contains("Usage: mdline <markdown_file> <html_file>"));
    assert_eq!(html, "");
}

#[test]
fn test_help_exits_zero() {
    let result = mdline(["--help"]);
    assert_eq!(result.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&result.stdout).contains("--escape-html"));
}
