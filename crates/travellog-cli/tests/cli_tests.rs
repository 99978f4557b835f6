use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// `tlog` with plain output against the database in `dir`.
fn tlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tlog").expect("Failed to find tlog binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(dir.path().join("cli_test.db"));
    cmd
}

fn create_plan(dir: &TempDir, title: &str) {
    tlog(dir).args(["plan", "create", title]).assert().success();
}

fn publish(dir: &TempDir, title: &str, visibility: &str) {
    tlog(dir)
        .args([
            "log",
            "new",
            "--plan",
            "1",
            "--title",
            title,
            "--content",
            "<p>Body</p>",
            "--visibility",
            visibility,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_and_list_plans() {
    let dir = create_cli_test_environment();

    tlog(&dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    tlog(&dir)
        .args(["plan", "create", "Jeju in spring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("## Jeju in spring (ID: 1)"));

    tlog(&dir)
        .args(["plan", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jeju in spring"));
}

#[test]
fn test_cli_publish_log_with_images() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");

    tlog(&dir)
        .args([
            "log",
            "new",
            "--plan",
            "1",
            "--title",
            "Seongsan sunrise",
            "--content",
            "<p>Up at five</p>",
            "--visibility",
            "public",
            "--image",
            "peak.jpg:120000:image/jpeg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Published log with ID: 1"))
        .stdout(predicate::str::contains("# 1. Seongsan sunrise"))
        .stdout(predicate::str::contains("- Visibility: public"))
        .stdout(predicate::str::contains("- peak.jpg"));
}

#[test]
fn test_cli_rejects_large_image() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");

    tlog(&dir)
        .args([
            "log",
            "new",
            "--plan",
            "1",
            "--title",
            "Too big",
            "--content",
            "<p>x</p>",
            "--image",
            "huge.png:5242880:image/png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rejected image huge.png"));
}

#[test]
fn test_cli_missing_content_keeps_draft() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");

    tlog(&dir)
        .args(["log", "new", "--plan", "1", "--title", "Unfinished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content"))
        .stderr(predicate::str::contains("draft new-1"));

    tlog(&dir)
        .args(["draft", "show", "new-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **title**: Unfinished"));

    tlog(&dir)
        .args([
            "log",
            "new",
            "--plan",
            "1",
            "--resume",
            "--content",
            "<p>Finished later</p>",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Unfinished"));

    tlog(&dir)
        .args(["draft", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts found."));
}

#[test]
fn test_cli_log_requires_plan() {
    let dir = create_cli_test_environment();

    tlog(&dir)
        .args(["log", "new", "--title", "Nowhere", "--content", "<p>x</p>"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan_id"));
}

#[test]
fn test_cli_edit_log() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");
    publish(&dir, "Before", "private");

    tlog(&dir)
        .args(["log", "edit", "1", "--title", "After", "--visibility", "friends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated log with ID: 1"))
        .stdout(predicate::str::contains("- Updated title"))
        .stdout(predicate::str::contains("- Visibility set to friends"))
        .stdout(predicate::str::contains("# 1. After"));

    tlog(&dir)
        .args(["--email", "bo@example.com", "log", "edit", "1", "--title", "Hijack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Travel log with ID 1 not found"));

    tlog(&dir)
        .args(["log", "edit", "1", "--visibility", "public"])
        .assert()
        .success();

    tlog(&dir)
        .args(["--email", "bo@example.com", "log", "edit", "1", "--title", "Hijack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("someone else"));
}

#[test]
fn test_cli_list_show_and_delete() {
    let dir = create_cli_test_environment();

    tlog(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No logs found."));

    create_plan(&dir, "Jeju");
    publish(&dir, "First", "private");
    publish(&dir, "Second", "private");

    tlog(&dir)
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Second (ID: 2)"))
        .stdout(predicate::str::contains("## First (ID: 1)"));

    tlog(&dir)
        .args(["log", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. First"))
        .stdout(predicate::str::contains("No comments yet."));

    tlog(&dir)
        .args(["log", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted log 'First' (ID: 1)"));

    tlog(&dir)
        .args(["log", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Travel log with ID 1 not found"));
}

#[test]
fn test_cli_social_flow() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");
    tlog(&dir)
        .args(["--email", "ana@example.com", "--username", "ana"])
        .args(["log", "new", "--plan", "1", "--title", "Udo", "--content", "<p>Ferry</p>"])
        .args(["--visibility", "friends"])
        .assert()
        .success();

    let as_bo = |dir: &TempDir| {
        let mut cmd = tlog(dir);
        cmd.args(["--email", "bo@example.com", "--username", "bo"]);
        cmd
    };

    as_bo(&dir)
        .arg("friends")
        .assert()
        .success()
        .stdout(predicate::str::contains("No logs found."));

    as_bo(&dir)
        .args(["follow", "ana@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now following ana@example.com"));

    as_bo(&dir)
        .arg("friends")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Udo (ID: 1)"));

    as_bo(&dir)
        .args(["like", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked log 1 (1 likes)"));

    as_bo(&dir)
        .arg("liked")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Udo (ID: 1)"));

    as_bo(&dir)
        .args(["comment", "1", "Looks windy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added comment to log 1"))
        .stdout(predicate::str::contains("**bo**"));

    as_bo(&dir)
        .args(["like", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed like from log 1 (0 likes)"));

    tlog(&dir)
        .args(["--email", "ana@example.com", "--username", "ana"])
        .args(["log", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Comments (1)"))
        .stdout(predicate::str::contains("Looks windy"));
}

#[test]
fn test_cli_delete_missing_draft() {
    let dir = create_cli_test_environment();

    tlog(&dir)
        .args(["draft", "delete", "new-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Draft 'new-9' not found"));
}

#[test]
fn test_cli_private_log_hidden_from_others() {
    let dir = create_cli_test_environment();
    create_plan(&dir, "Jeju");
    publish(&dir, "Diary", "private");

    for args in [
        vec!["log", "show", "1"],
        vec!["like", "1"],
        vec!["comment", "1", "Peeking"],
    ] {
        tlog(&dir)
            .args(["--email", "bo@example.com", "--username", "bo"])
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Travel log with ID 1 not found"));
    }

    tlog(&dir)
        .args(["log", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments yet."));
}
