//! Exit codes and failure reporting.
//!
//! Responsibilities:
//! - Define the exit codes the host CLI observes.
//! - Render any error reaching the top level as the single `FAILED: ...` line.
//!
//! Does NOT handle:
//! - Warnings ("not found", "has no plans"); those are [`Outcome`](crate::plugin::Outcome)
//!   values and exit successfully.
//!
//! Invariants:
//! - Failures are written to stdout, where the host shows plugin output.
//! - Every reported failure exits with 1.

use crate::plugin::PluginError;

/// Exit codes for cf-describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed, including the "nothing to show" warnings.
    Success = 0,

    /// Any reported failure: bad flags, undecodable response, API or
    /// configuration error.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&PluginError> for ExitCode {
    fn from(_: &PluginError) -> Self {
        ExitCode::GeneralError
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<PluginError>() {
            Some(plugin_err) => ExitCode::from(plugin_err),
            None => ExitCode::GeneralError,
        }
    }
}

/// Render an error as the host's failure line.
///
/// Plugin errors already carry their `<message>. Error: <cause>` shape.
/// Other errors use their outermost context as the message and the next
/// error in the chain as the cause.
pub fn failure_message(err: &anyhow::Error) -> String {
    if let Some(plugin_err) = err.downcast_ref::<PluginError>() {
        return format!("FAILED: {plugin_err}");
    }
    match err.chain().nth(1) {
        Some(cause) => format!("FAILED: {err}. Error: {cause}"),
        None => format!("FAILED: {err}"),
    }
}
