use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors produced when parsing selector input into roles or modes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown target role: {0}")]
    UnknownRole(String),
    #[error("unknown interview mode: {0}")]
    UnknownMode(String),
}

//
// ─── TARGET ROLE ──────────────────────────────────────────────────────────────
//

/// The position a candidate is practicing for.
///
/// The set is fixed; prompts sent to the interviewer model embed the
/// `Display` label verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRole {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    BackendDeveloper,
    FrontendDeveloper,
}

impl TargetRole {
    /// All roles in selector order.
    #[must_use]
    pub fn all() -> [TargetRole; 5] {
        [
            TargetRole::SoftwareEngineer,
            TargetRole::DataScientist,
            TargetRole::ProductManager,
            TargetRole::BackendDeveloper,
            TargetRole::FrontendDeveloper,
        ]
    }

    /// Human-readable label, as used in prompts and selectors.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TargetRole::SoftwareEngineer => "Software Engineer",
            TargetRole::DataScientist => "Data Scientist",
            TargetRole::ProductManager => "Product Manager",
            TargetRole::BackendDeveloper => "Backend Developer",
            TargetRole::FrontendDeveloper => "Frontend Developer",
        }
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetRole {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetRole::all()
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownRole(s.to_string()))
    }
}

//
// ─── INTERVIEW MODE ───────────────────────────────────────────────────────────
//

/// Question style for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewMode {
    Technical,
    Behavioral,
}

impl InterviewMode {
    /// Both modes in selector order.
    #[must_use]
    pub fn all() -> [InterviewMode; 2] {
        [InterviewMode::Technical, InterviewMode::Behavioral]
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InterviewMode::Technical => "Technical",
            InterviewMode::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterviewMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterviewMode::all()
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownMode(s.to_string()))
    }
}
