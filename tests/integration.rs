// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

fn treescaffold() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("treescaffold").unwrap()
}

#[test]
fn file_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("structure.tree");
    fs::write(&input, "api/\n    routes.py\nmain.py\n").unwrap();
    let output = dir.path().join("output");

    treescaffold()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created files"))
        .stdout(predicate::str::contains("routes.py"))
        .stdout(predicate::str::contains("main.py"));

    assert!(output.join("api/routes.py").is_file());
    assert!(output.join("main.py").is_file());
}

#[test]
fn stdin_input() {
    let dir = tempfile::tempdir().unwrap();

    treescaffold()
        .arg("-o")
        .arg(dir.path())
        .write_stdin("├── src/\n│   └── lib.rs  # Library root\n└── Cargo.toml\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("src/lib.rs")).unwrap(),
        "// Library root\n"
    );
    assert!(dir.path().join("Cargo.toml").is_file());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    treescaffold()
        .arg("-f")
        .arg(dir.path().join("missing.tree"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");

    treescaffold()
        .arg("-o")
        .arg(&output)
        .arg("--dry-run")
        .write_stdin("test.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("test.py"));

    assert!(!output.exists());
}

#[test]
fn empty_input() {
    treescaffold()
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provided"));
}

#[test]
fn verbose_output() {
    let dir = tempfile::tempdir().unwrap();

    treescaffold()
        .arg("-o")
        .arg(dir.path())
        .arg("--verbose")
        .write_stdin("hello.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0 directories, 1 files"))
        .stdout(predicate::str::contains("hello.py"));
}

#[test]
fn invalid_format() {
    treescaffold()
        .arg("--format")
        .arg("invalid")
        .write_stdin("invalid content")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format: invalid"));
}

#[test]
fn malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();

    treescaffold()
        .arg("-o")
        .arg(dir.path())
        .arg("--format")
        .arg("yaml")
        .write_stdin("src: [main.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("structured-data"));
}

#[test]
fn skipped_items() {
    let dir = tempfile::tempdir().unwrap();

    treescaffold()
        .arg("-o")
        .arg(dir.path())
        .write_stdin("__pycache__/\nmain.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped items"))
        .stdout(predicate::str::contains("__pycache__"));

    assert!(!dir.path().join("__pycache__").exists());
}

#[test]
fn preview_does_not_generate() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output");

    treescaffold()
        .arg("-o")
        .arg(&output)
        .arg("--preview")
        .write_stdin("docs:\n  - index.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("index.md"));

    assert!(!output.exists());
}

#[test]
fn export_prints_yaml() {
    treescaffold()
        .arg("--export")
        .write_stdin("api/\n    routes.py  # Endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: routes.py"))
        .stdout(predicate::str::contains("comment: Endpoints"));
}

#[test]
fn help() {
    treescaffold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
