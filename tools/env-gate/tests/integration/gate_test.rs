use env_gate::gate::{GateResult, REQUIRED_VARIABLES, check};

use crate::helpers::snapshot;

// ── every subset of the required keys ────────────────────────────────────────

#[test]
fn should_report_exactly_the_unset_subset_for_every_combination() {
    for mask in 0u8..16 {
        let unset: Vec<&str> = REQUIRED_VARIABLES
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, k)| *k)
            .collect();
        let result = check(&REQUIRED_VARIABLES, &snapshot(&unset, &[]));

        assert_eq!(result.missing(), unset.as_slice(), "mask {mask:04b}");
        assert_eq!(result.passed(), unset.is_empty(), "mask {mask:04b}");
    }
}

#[test]
fn should_treat_empty_strings_like_unset_for_every_combination() {
    for mask in 1u8..16 {
        let emptied: Vec<(&str, &str)> = REQUIRED_VARIABLES
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, k)| (*k, ""))
            .collect();
        let expected: Vec<&str> = emptied.iter().map(|(k, _)| *k).collect();
        let result = check(&REQUIRED_VARIABLES, &snapshot(&[], &emptied));

        assert_eq!(result.missing(), expected.as_slice(), "mask {mask:04b}");
        assert_eq!(result.exit_code(), 1);
    }
}

// ── idempotence / isolation ──────────────────────────────────────────────────

#[test]
fn should_return_identical_results_for_unchanged_snapshot() {
    let env = snapshot(&["DATABASE_USER"], &[]);
    let first = check(&REQUIRED_VARIABLES, &env);
    let second = check(&REQUIRED_VARIABLES, &env);
    assert_eq!(first, second);
}

#[test]
fn should_ignore_unrelated_variables() {
    let noisy = snapshot(
        &["SECRET_KEY"],
        &[("PATH", "/usr/bin"), ("DATABASE_URL", "postgresql://x/y"), ("SECRET_KEY_2", "k")],
    );
    let quiet = snapshot(&["SECRET_KEY"], &[]);
    assert_eq!(
        check(&REQUIRED_VARIABLES, &noisy),
        check(&REQUIRED_VARIABLES, &quiet)
    );
}

#[test]
fn should_accept_alternate_required_list() {
    let env = snapshot(&[], &[]);
    let result = check(&["DATABASE_DB", "MAPBOX_API_KEY"], &env);
    assert_eq!(
        result,
        GateResult::Fail {
            missing: vec!["MAPBOX_API_KEY".to_owned()],
        }
    );
}
