use std::io::Write;
use std::process::{Command, Output, Stdio};

fn katexify(args: &[&str], stdin: impl AsRef<[u8]>) -> anyhow::Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_katexify"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .ok_or_else(|| anyhow::anyhow!("child stdin not piped"))?
        .write_all(stdin.as_ref())?;

    Ok(child.wait_with_output()?)
}

#[test]
fn test_plain_text_passthrough() -> anyhow::Result<()> {
    let input = "nothing to see here\n(not math) [either]\n";
    let output = katexify(&[], input)?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, input);
    Ok(())
}

#[test]
fn test_dry_run_markers() -> anyhow::Result<()> {
    let output = katexify(&["--dry-run"], "a \\[x\\] b \\(y\\) c")?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "a <display>x</display> b <inline>y</inline> c"
    );
    Ok(())
}

#[test]
fn test_katex_html() -> anyhow::Result<()> {
    let output = katexify(&[], "see \\(E = mc^2\\)\n\\[\\sum_i i\\]\n")?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("see <span class=\"katex\">"));
    assert!(stdout.contains("katex-display"));
    assert!(stdout.ends_with("\n"));
    Ok(())
}

#[test]
fn test_render_failure_exits_nonzero_and_keeps_prefix() -> anyhow::Result<()> {
    let output = katexify(&[], "kept \\(\\frac{\\) lost")?;
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "kept ");
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_no_throw_keeps_going() -> anyhow::Result<()> {
    let output = katexify(&["--no-throw"], "a \\(\\frac{\\) b")?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("katex-error"));
    assert!(stdout.ends_with(" b"));
    Ok(())
}

#[test]
fn test_segments_json() -> anyhow::Result<()> {
    let output = katexify(&["--segments"], "a \\(y")?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["schema_version"], "1.0.0");
    let segments = report["segments"]
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("segments is not an array"))?;
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1]["kind"], "math");
    assert_eq!(segments[1]["data"]["mode"], "inline");
    assert_eq!(segments[1]["data"]["terminated"], false);
    Ok(())
}

#[test]
fn test_empty_stdin() -> anyhow::Result<()> {
    let output = katexify(&[], "")?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_invalid_utf8_replaced() -> anyhow::Result<()> {
    let output = katexify(&["--dry-run"], b"caf\xe9 \\(x\\) end")?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "caf\u{FFFD} <inline>x</inline> end"
    );
    Ok(())
}
