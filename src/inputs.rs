use thiserror::Error;

use crate::ci;

/// Terminal configuration failures. The messages are the run's user-facing
/// failure strings, so they stay short and fixed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("No release id provided")]
    NoReleaseId,
    #[error("Missing required inputs")]
    MissingInputs,
}

/// The seven action inputs, validated.
#[derive(Debug, Clone)]
pub struct ActionInputs {
    pub ado_pat: String,
    pub ado_project: String,
    pub ado_org: String,
    pub repo_token: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub release_id: u64,
}

impl ActionInputs {
    pub fn from_env() -> Result<Self, InputError> {
        Self::from_getter(ci::get_input)
    }

    /// Build from any name -> value lookup. Factored away from the process
    /// environment so validation is testable without mutating global state.
    pub fn from_getter(get: impl Fn(&str) -> String) -> Result<Self, InputError> {
        // Release id is checked first; zero and non-numeric both count as missing.
        let release_id = get("release-id")
            .parse::<u64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or(InputError::NoReleaseId)?;

        let inputs = Self {
            ado_pat: get("ado-pat"),
            ado_project: get("ado-project"),
            ado_org: get("ado-org"),
            repo_token: get("repo-token"),
            repo_owner: get("repo-owner"),
            repo_name: get("repo-name"),
            release_id,
        };

        let required = [
            &inputs.ado_pat,
            &inputs.ado_project,
            &inputs.ado_org,
            &inputs.repo_token,
            &inputs.repo_owner,
            &inputs.repo_name,
        ];
        if required.iter().any(|value| value.is_empty()) {
            return Err(InputError::MissingInputs);
        }

        Ok(inputs)
    }
}
