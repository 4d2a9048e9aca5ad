use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::form::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    #[display("google")]
    Google,
    #[display("github")]
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum AuthFailure {
    #[display("Invalid email or password")]
    InvalidCredentials,

    #[display("An account with this email already exists")]
    AccountExists,

    #[display("The provider denied access")]
    ProviderDenied,

    #[display("{_0}")]
    Other(String),
}

/// What the identity provider said about a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthOutcome {
    Success { mode: Mode },
    Failure { failure: AuthFailure },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }
}
