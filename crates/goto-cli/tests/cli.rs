// End-to-end tests driving the `goto` binary against a temporary goto directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A goto directory with a global `proj` inheriting from `common`, and a
/// local override of `common`.
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    write(&dir.join("config.json"), r#"{"current_root": "proj"}"#);
    write(
        &dir.join("roots/proj.json"),
        r#"{
            "identifier": "proj",
            "name": "Project",
            "base_path": "/home/u/proj",
            "defaults": ["common"],
            "shortcuts": {"docs": "documentation", "root": "", "x": "own"}
        }"#,
    );
    write(
        &dir.join("roots/common.json"),
        r#"{"identifier": "common", "base_path": "/", "shortcuts": {"x": "global", "tmp": "tmp"}}"#,
    );
    write(
        &dir.join("local/roots/common.json"),
        r#"{"identifier": "common", "base_path": "/", "shortcuts": {"x": "local", "logs": "var/log"}}"#,
    );
    write(&dir.join("roots/broken.json"), "{ nope");

    temp
}

fn goto(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("goto").unwrap();
    cmd.env_remove("GOTO_DIR")
        .env("GOTO_EDITOR", "true")
        .arg("--dir")
        .arg(temp.path());
    cmd
}

#[test]
fn resolves_shortcut_in_current_root() {
    let temp = fixture();
    goto(&temp)
        .arg("docs")
        .assert()
        .success()
        .stdout("/home/u/proj/documentation\n");
}

#[test]
fn empty_suffix_resolves_to_base_path() {
    let temp = fixture();
    goto(&temp).arg("root").assert().success().stdout("/home/u/proj\n");
}

#[test]
fn own_shortcut_beats_inherited_and_local_tier_wins() {
    let temp = fixture();
    goto(&temp).arg("x").assert().success().stdout("/home/u/proj/own\n");
    goto(&temp)
        .arg("logs")
        .assert()
        .success()
        .stdout("/home/u/proj/var/log\n");
    // "tmp" only exists in the overridden global record
    goto(&temp).arg("tmp").assert().code(1);
}

#[test]
fn explicit_root_and_shortcut() {
    let temp = fixture();
    goto(&temp)
        .args(["common", "logs"])
        .assert()
        .success()
        .stdout("/var/log\n");
}

#[test]
fn missing_shortcut_exits_with_status_one() {
    let temp = fixture();
    goto(&temp)
        .arg("nope")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not found in Project"));
}

#[test]
fn unknown_explicit_root_is_reported() {
    let temp = fixture();
    goto(&temp)
        .args(["ghost", "docs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown root: ghost"));
}

#[test]
fn writes_path_to_out_file() {
    let temp = fixture();
    let out = temp.path().join("out");
    goto(&temp)
        .args(["--out-file"])
        .arg(&out)
        .arg("docs")
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(out).unwrap(), "/home/u/proj/documentation");
}

#[test]
fn set_current_root_persists() {
    let temp = fixture();
    goto(&temp)
        .args(["-s", "common"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from proj (Project) to common"));
    goto(&temp).arg("logs").assert().success().stdout("/var/log\n");
}

#[test]
fn set_unknown_root_keeps_config() {
    let temp = fixture();
    let before = fs::read_to_string(temp.path().join("config.json")).unwrap();
    goto(&temp)
        .args(["-s", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("current root is still proj"));
    assert_eq!(fs::read_to_string(temp.path().join("config.json")).unwrap(), before);
}

#[test]
fn dangling_current_root_reports_not_found() {
    let temp = fixture();
    goto(&temp).args(["-s", "common"]).assert().success();
    fs::remove_file(temp.path().join("roots/common.json")).unwrap();
    fs::remove_file(temp.path().join("local/roots/common.json")).unwrap();

    goto(&temp)
        .arg("logs")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found in common"));
}

#[test]
fn all_prints_effective_table() {
    let temp = fixture();
    let output = goto(&temp).arg("-a").output().unwrap();
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table["x"], "own");
    assert_eq!(table["logs"], "var/log");
    assert_eq!(table["docs"], "documentation");
    assert!(table.get("tmp").is_none());
}

#[test]
fn print_roots_lists_identifiers() {
    let temp = fixture();
    let output = goto(&temp).args(["-p", "roots"]).output().unwrap();
    let roots: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(roots, vec!["common", "proj"]);
}

#[test]
fn print_invalid_arg_fails() {
    let temp = fixture();
    goto(&temp)
        .args(["-p", "nothing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid print arg: nothing"));
}

#[test]
fn completes_shortcuts_and_roots() {
    let temp = fixture();
    goto(&temp)
        .args(["--complete", "goto d"])
        .assert()
        .success()
        .stdout("docs\n");
    goto(&temp)
        .args(["--complete", "goto -s c"])
        .assert()
        .success()
        .stdout("common\n");
    goto(&temp)
        .args(["--complete", "goto common "])
        .assert()
        .success()
        .stdout("x\nlogs\n");
}

#[test]
fn new_root_is_written_to_local_tier() {
    let temp = fixture();
    goto(&temp)
        .args(["-n", "fresh", "Fresh Root", "/srv/fresh"])
        .assert()
        .success();

    let record = fs::read_to_string(temp.path().join("local/roots/fresh.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&record).unwrap();
    assert_eq!(json["identifier"], "fresh");
    assert_eq!(json["name"], "Fresh Root");
    assert_eq!(json["base_path"], "/srv/fresh");

    goto(&temp)
        .args(["-n", "fresh", "Again"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    goto(&temp)
        .arg("docs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("goto --setup"));
}

#[test]
fn setup_creates_starter_layout() {
    let temp = TempDir::new().unwrap();
    goto(&temp).args(["--setup", "--yes"]).assert().success();

    assert!(temp.path().join("config.json").is_file());
    assert!(temp.path().join("local/roots").is_dir());

    goto(&temp)
        .arg("roots")
        .assert()
        .success()
        .stdout(format!("{}\n", temp.path().join("roots").display()));
    goto(&temp)
        .args(["com", "root"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn setup_accepts_piped_confirmation() {
    let temp = TempDir::new().unwrap();
    goto(&temp)
        .arg("--setup")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config files"));
    assert!(temp.path().join("config.json").is_file());
}

#[test]
fn setup_without_confirmation_aborts() {
    let temp = TempDir::new().unwrap();
    goto(&temp)
        .arg("--setup")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("aborting"));
    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn roots_listing_shows_tier_base_and_current_marker() {
    let temp = fixture();
    let output = goto(&temp).arg("-r").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    assert!(lines[0].starts_with(' '));
    assert!(lines[0].contains("common"));
    assert!(lines[0].contains("local"));

    assert!(lines[1].starts_with('*'));
    assert!(lines[1].contains("proj"));
    assert!(lines[1].contains("global"));
    assert!(lines[1].ends_with("/home/u/proj"));
}

#[test]
fn open_edits_the_winning_record() {
    let temp = fixture();
    let local = temp.path().join("local/roots/common.json");
    goto(&temp)
        .env("GOTO_EDITOR", "cat")
        .args(["-o", "common"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Opening file {}", local.display())))
        .stdout(predicate::str::contains("var/log"))
        .stdout(predicate::str::contains("\"tmp\"").not());
}

#[test]
fn open_unknown_root_fails() {
    let temp = fixture();
    goto(&temp)
        .args(["-o", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ghost is not a known root"));
}

#[test]
fn config_flag_opens_config_file() {
    let temp = fixture();
    goto(&temp)
        .env("GOTO_EDITOR", "cat")
        .arg("-c")
        .assert()
        .success()
        .stdout(predicate::str::contains("Editing configs"))
        .stdout(predicate::str::contains(r#""current_root": "proj""#));
}

#[test]
fn new_root_over_global_warns_and_overrides() {
    let temp = fixture();
    goto(&temp)
        .args(["-n", "proj", "Local Project", "/srv/proj"])
        .assert()
        .success()
        .stderr(predicate::str::contains("global tier; the new local record will override it"));

    goto(&temp).arg("docs").assert().code(1);
    goto(&temp)
        .args(["-p", "proj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/proj"));
}

#[test]
fn new_root_already_local_under_other_file_is_refused() {
    let temp = fixture();
    write(
        &temp.path().join("local/roots/machine.json"),
        r#"{"identifier": "box", "base_path": "/box"}"#,
    );

    goto(&temp)
        .args(["-n", "box", "Box"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists in the local tier"))
        .stderr(predicate::str::contains("override").not());
    assert!(!temp.path().join("local/roots/box.json").exists());
}
