use std::io::Write;

use crate::helpers::{COMPLETE, run_gate, stdout};

const ALL_MISSING: &str = "ERROR: Missing required environment variables: \
    DATABASE_DB, DATABASE_USER, DATABASE_PASSWORD, SECRET_KEY. \
    Please check your .env file configuration\n";

#[test]
fn should_exit_zero_with_success_marker_when_all_set() {
    let output = run_gate(&COMPLETE, &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ All required environment variables are set\n");
}

#[test]
fn should_list_all_four_when_none_set() {
    let output = run_gate(&[], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), ALL_MISSING);
}

#[test]
fn should_list_only_unset_database_credentials() {
    let output = run_gate(
        &[("DATABASE_DB", "edrak_analytics"), ("SECRET_KEY", "key")],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "ERROR: Missing required environment variables: DATABASE_USER, DATABASE_PASSWORD. \
         Please check your .env file configuration\n"
    );
}

#[test]
fn should_treat_empty_password_as_missing() {
    let output = run_gate(
        &[
            ("DATABASE_DB", "edrak_analytics"),
            ("DATABASE_USER", "superset"),
            ("DATABASE_PASSWORD", ""),
            ("SECRET_KEY", "key"),
        ],
        &[],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("variables: DATABASE_PASSWORD. Please"));
}

#[cfg(unix)]
#[test]
fn should_accept_non_utf8_value_as_present() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::process::Command;

    let output = Command::new(env!("CARGO_BIN_EXE_env-gate"))
        .env_clear()
        .envs(COMPLETE.iter().copied().filter(|(k, _)| *k != "DATABASE_PASSWORD"))
        .env("DATABASE_PASSWORD", OsStr::from_bytes(b"pa\xffss"))
        .output()
        .expect("failed to spawn env-gate");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ All required environment variables are set\n");
}

#[test]
fn should_print_exactly_one_line() {
    for vars in [&COMPLETE[..], &[][..]] {
        let output = run_gate(vars, &[]);
        assert_eq!(stdout(&output).lines().count(), 1);
    }
}

// ── --env-file ───────────────────────────────────────────────────────────────

#[test]
fn should_fill_gaps_from_env_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DATABASE_USER=superset").unwrap();
    writeln!(file, "DATABASE_PASSWORD=s3cret").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_gate(
        &[("DATABASE_DB", "edrak_analytics"), ("SECRET_KEY", "key")],
        &["--env-file", path],
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn should_prefer_process_value_over_env_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DATABASE_PASSWORD=from-file").unwrap();
    let path = file.path().to_str().unwrap();

    let output = run_gate(
        &[
            ("DATABASE_DB", "edrak_analytics"),
            ("DATABASE_USER", "superset"),
            ("DATABASE_PASSWORD", ""),
            ("SECRET_KEY", "key"),
        ],
        &["--env-file", path],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("DATABASE_PASSWORD"));
}

#[test]
fn should_fail_on_unreadable_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.env");

    let output = run_gate(&COMPLETE, &["--env-file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load env file"));
}

// ── --require ────────────────────────────────────────────────────────────────

#[test]
fn should_check_custom_required_list() {
    let output = run_gate(
        &[("REDIS_HOST", "edrak_redis")],
        &["--require", "REDIS_HOST", "--require", "MAPBOX_API_KEY"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "ERROR: Missing required environment variables: MAPBOX_API_KEY. \
         Please check your .env file configuration\n"
    );
}
