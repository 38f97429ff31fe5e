use serde::{Deserialize, Serialize};

/// Text carried by every catalogued plain error body.
pub const NO_INFO_FOUND: &str = "error, no info found";

/// Bare `{text}` body used by the member and coverage simulated errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainError {
    pub text: String,
}

impl PlainError {
    pub fn no_info_found() -> Self {
        Self { text: NO_INFO_FOUND.into() }
    }
}

/// Diagnostic envelope attached next to otherwise normal data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub issue: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub code: String,
    pub details: Vec<IssueDetail>,
    pub diagnostics: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDetail {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Information,
}
