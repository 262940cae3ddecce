pub mod app;
pub mod config;
pub mod fetch;
pub mod rand;
pub mod show;
pub mod table;

use std::process::ExitCode;

/// Process outcome of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
    /// No payload file exists under any storage prefix.
    NoPayload,
    /// The profile could not be found or read.
    Config,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::FAILURE,
            // sysexits EX_OSFILE
            Exit::NoPayload => ExitCode::from(72),
            // sysexits EX_CONFIG
            Exit::Config => ExitCode::from(78),
        }
    }
}

pub(crate) fn non_empty(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("must be a non-empty string".to_string());
    }
    Ok(value.to_string())
}
