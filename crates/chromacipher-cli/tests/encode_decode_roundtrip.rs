// crates/chromacipher-cli/tests/encode_decode_roundtrip.rs

use std::path::Path;
use std::process::Command;

fn run_ok(cmd: &mut Command) -> std::process::Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chromacipher-cli"))
}

fn encode_to(text: &str, out: &Path, extra: &[&str]) {
    let mut cmd = bin();
    cmd.args(["encode", "--text", text, "--out", out.to_str().unwrap()]);
    cmd.args(extra);
    run_ok(&mut cmd);
}

#[test]
fn text_roundtrips_through_jsonl() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jsonl = dir.path().join("samples.jsonl");
    let decoded = dir.path().join("decoded.txt");

    let text = "Hello, World! 42";
    encode_to(text, &jsonl, &[]);

    run_ok(bin().args([
        "decode",
        "--in",
        jsonl.to_str().unwrap(),
        "--out",
        decoded.to_str().unwrap(),
    ]));

    let got = std::fs::read_to_string(&decoded).expect("read decoded");
    assert_eq!(got, text);
}

#[test]
fn unmapped_symbol_roundtrips_via_carried_char() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jsonl = dir.path().join("samples.jsonl");
    let decoded = dir.path().join("decoded.txt");

    let text = "price: 5€";
    encode_to(text, &jsonl, &[]);

    // the sentinel line carries the original character as fallback metadata
    let stream = std::fs::read_to_string(&jsonl).expect("read jsonl");
    assert_eq!(stream.lines().count(), text.chars().count());
    assert!(stream.contains("\"h\":0,\"s\":0,\"v\":128"));

    run_ok(bin().args([
        "decode",
        "--in",
        jsonl.to_str().unwrap(),
        "--out",
        decoded.to_str().unwrap(),
    ]));
    assert_eq!(std::fs::read_to_string(&decoded).unwrap(), text);
}

#[test]
fn skip_unmapped_shortens_the_stream() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jsonl = dir.path().join("samples.jsonl");

    let text = "a€b";
    encode_to(text, &jsonl, &["--skip-unmapped"]);

    let stream = std::fs::read_to_string(&jsonl).expect("read jsonl");
    assert_eq!(stream.lines().count(), 2);
    assert!(!stream.contains('€'));
}

#[test]
fn table_dump_reports_all_entries() {
    let out = run_ok(bin().args(["table"]));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 81);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("entries=81"));
    assert!(stderr.contains("table_id="));
}
