use tracing::debug;

use edrak_core::env::EnvSnapshot;
use edrak_core::error::ConfigError;

/// Variables the BI application needs before it can start, in report order.
pub const REQUIRED_VARIABLES: [&str; 4] =
    ["DATABASE_DB", "DATABASE_USER", "DATABASE_PASSWORD", "SECRET_KEY"];

/// Outcome of one gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult {
    Pass,
    /// Missing or empty keys, in the order they were required.
    Fail { missing: Vec<String> },
}

impl GateResult {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn missing(&self) -> &[String] {
        match self {
            Self::Pass => &[],
            Self::Fail { missing } => missing,
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail { missing } => Err(ConfigError::MissingRequiredConfiguration { missing }),
        }
    }
}

/// Check that every key in `required` is set to a non-empty value in `env`.
///
/// Absent and empty values both count as missing. All missing keys are
/// collected so one run surfaces every problem.
pub fn check(required: &[&str], env: &EnvSnapshot) -> GateResult {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| {
            let present = env.is_set(key);
            debug!(key = **key, present, "checked required variable");
            !present
        })
        .map(|key| (*key).to_owned())
        .collect();

    if missing.is_empty() {
        GateResult::Pass
    } else {
        GateResult::Fail { missing }
    }
}
