//! Binary tests: exit codes, argument validation and an end-to-end run with a
//! shell stand-in for translate-shell.

use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_subtrans");

const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nplease fail\n";

fn subtrans(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run subtrans")
}

fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("movie.srt");
    std::fs::write(&file, SAMPLE).unwrap();
    (dir, file)
}

#[test]
fn missing_file_argument_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = subtrans(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let output = subtrans(dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("<FILE>"));
}

#[test]
fn malformed_direction_exits_1_without_touching_file() {
    for direction in ["eng-fr", "EN:FR", "en:fra"] {
        let (dir, file) = setup();
        let output = subtrans(dir.path(), &["movie.srt", direction]);

        assert_eq!(output.status.code(), Some(1), "direction {:?}", direction);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid translation direction"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), SAMPLE);
        assert!(!dir.path().join("movie.srt_").exists());
    }
}

#[test]
fn nonexistent_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = subtrans(dir.path(), &["missing.srt", "en:fr"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("File not found: missing.srt"));
    assert!(!dir.path().join("missing.srt").exists());
}

#[test]
fn zero_jobs_exits_1() {
    let (dir, _file) = setup();
    let output = subtrans(dir.path(), &["movie.srt", "--jobs", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn broken_config_exits_1() {
    let (dir, file) = setup();
    std::fs::write(dir.path().join("subtrans.toml"), "[translator\n").unwrap();

    let output = subtrans(dir.path(), &["movie.srt"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), SAMPLE);
}

#[cfg(unix)]
#[test]
fn end_to_end_with_stand_in_translator() {
    let (dir, file) = setup();
    std::fs::write(
        dir.path().join("subtrans.toml"),
        r#"
[translator]
binary_path = "sh"
extra_args = ["-c", '''
case "$7" in *fail*) echo "no translation" >&2; exit 1;; esac
printf '%s\n' "$7" | tr a-z A-Z
''', "trans"]
"#,
    )
    .unwrap();

    let output = subtrans(dir.path(), &["movie.srt", "en:fr"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "1\n00:00:01,000 --> 00:00:02,000\nHELLO\n\n2\n00:00:03,000 --> 00:00:04,000\nplease fail\n"
    );
    assert_eq!(std::fs::read_to_string(dir.path().join("movie.srt_")).unwrap(), SAMPLE);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("en → fr"));
    assert!(stdout.contains("Translated in"));
}

#[test]
fn missing_translator_binary_leaves_text_untranslated() {
    let (dir, file) = setup();
    let output = subtrans(
        dir.path(),
        &["movie.srt", "--translator", "subtrans-no-such-translator"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), SAMPLE);
    assert!(dir.path().join("movie.srt_").exists());
}
