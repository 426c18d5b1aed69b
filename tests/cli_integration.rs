use assert_cmd::Command;
use predicates::prelude::*;

fn bylines(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bylines").unwrap();
    cmd.env("BYLINES_HOME", home);
    cmd.current_dir(home);
    cmd
}

#[test]
fn add_then_list_shows_the_writer() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path())
        .arg("add")
        .arg("Ada Lovelace")
        .assert()
        .success()
        .stdout(predicate::str::contains("Writer added (1): Ada Lovelace"));

    bylines(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("1 writer(s)"));
}

#[test]
fn set_reorders_the_leaderboard() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path()).args(["add", "Low"]).assert().success();
    bylines(temp_dir.path()).args(["add", "High"]).assert().success();
    bylines(temp_dir.path())
        .args(["set", "2", "5", "100"])
        .assert()
        .success();

    let output = bylines(temp_dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let high_pos = stdout.find("High").unwrap();
    let low_pos = stdout.find("Low").unwrap();
    assert!(high_pos < low_pos, "High should rank above Low");
}

#[test]
fn remove_unknown_id_succeeds() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path())
        .args(["remove", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn report_writes_a_png_named_after_the_range() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path()).args(["add", "Ada"]).assert().success();
    bylines(temp_dir.path())
        .args(["report", "--from", "2026-01-01", "--to", "2026-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let path = temp_dir.path().join("writer_report_20260101_to_20260131.png");
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn report_rejects_malformed_dates() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path())
        .args(["report", "--from", "January 1st", "--to", "2026-01-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn data_file_carries_the_wire_shape() {
    let temp_dir = tempfile::tempdir().unwrap();

    bylines(temp_dir.path()).args(["add", "Ada"]).assert().success();
    bylines(temp_dir.path())
        .args(["set", "1", "3", "900"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(temp_dir.path().join("writer_stats.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["writers"][0]["id"], "1");
    assert_eq!(doc["writers"][0]["name"], "Ada");
    assert_eq!(doc["stats"]["1"]["articles"], 3);
    assert_eq!(doc["stats"]["1"]["views"], 900);
}

#[test]
fn hand_edited_ids_are_repaired_on_the_next_run() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Seed a file with duplicate, sparse ids
    let doc = serde_json::json!({
        "writers": [
            {"id": "7", "name": "Ada"},
            {"id": "7", "name": "Grace"}
        ],
        "stats": {"7": {"articles": 2, "views": 10}}
    });
    std::fs::write(
        temp_dir.path().join("writer_stats.json"),
        serde_json::to_string_pretty(&doc).unwrap(),
    )
    .unwrap();

    bylines(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repaired 2 writer id(s)"));

    let raw = std::fs::read_to_string(temp_dir.path().join("writer_stats.json")).unwrap();
    let repaired: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(repaired["writers"][0]["id"], "1");
    assert_eq!(repaired["writers"][1]["id"], "2");
    // Both writers shared the duplicate key, so both carry its stats
    assert_eq!(repaired["stats"]["2"]["views"], 10);
}
