use std::fs;
use std::process::Command;

#[test]
fn unwritable_store_location_aborts_before_touching_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bookbrain"))
        .current_dir(dir.path())
        .env("BOOKBRAIN_STORE_DIR", blocker.join("store"))
        .env("BOOKBRAIN_FORM_FACTOR", "desktop")
        .output()
        .expect("failed to spawn bookbrain");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal: could not create item store"), "stderr: {stderr}");
    assert!(stderr.contains("occupied"), "stderr should name the location: {stderr}");
    // Nothing was written to stdout: the alternate screen was never entered
    assert!(output.stdout.is_empty());
}

#[test]
fn corrupt_store_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("store");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("items.yaml"), "schema: Book\nschema_version: 7\nnext_id: 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bookbrain"))
        .current_dir(dir.path())
        .env("BOOKBRAIN_STORE_DIR", &store_dir)
        .output()
        .expect("failed to spawn bookbrain");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Schema mismatch"), "stderr: {stderr}");
    // The rejected file is left untouched
    let contents = fs::read_to_string(store_dir.join("items.yaml")).unwrap();
    assert!(contents.contains("schema: Book"));
}

#[test]
fn bad_form_factor_is_reported_on_stderr_without_a_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    // The log directory lives under the unusable store dir, so logging is off
    let output = Command::new(env!("CARGO_BIN_EXE_bookbrain"))
        .current_dir(dir.path())
        .env("BOOKBRAIN_STORE_DIR", blocker.join("store"))
        .env("BOOKBRAIN_FORM_FACTOR", "watch")
        .output()
        .expect("failed to spawn bookbrain");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: BOOKBRAIN_FORM_FACTOR"), "stderr: {stderr}");
    assert!(stderr.contains("'watch'"), "stderr: {stderr}");
}

#[test]
fn bad_form_factor_is_logged_once_logging_is_up() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("store");
    fs::create_dir_all(&store_dir).unwrap();
    // Schema mismatch stops the binary right after startup logging
    fs::write(store_dir.join("items.yaml"), "schema: Book\nschema_version: 7\nnext_id: 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bookbrain"))
        .current_dir(dir.path())
        .env("BOOKBRAIN_STORE_DIR", &store_dir)
        .env("BOOKBRAIN_FORM_FACTOR", "watch")
        .env("BOOKBRAIN_LOG", "bookbrain=info")
        .output()
        .expect("failed to spawn bookbrain");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("warning:"), "stderr: {stderr}");

    let log = fs::read_to_string(store_dir.join("logs").join("bookbrain.log")).unwrap();
    assert!(log.contains("WARN"), "log: {log}");
    assert!(log.contains("'watch'"), "log: {log}");
}
