//! Console lines for gate outcomes.

use crate::gate::GateResult;

pub const SUCCESS_LINE: &str = "✓ All required environment variables are set";

/// The single line printed for `result`.
pub fn render(result: &GateResult) -> String {
    match result.clone().into_result() {
        Ok(()) => SUCCESS_LINE.to_owned(),
        Err(e) => format!("ERROR: {e}"),
    }
}
