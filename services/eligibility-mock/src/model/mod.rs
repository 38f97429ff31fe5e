//! Wire records for the three lookup families. Field names match the upstream
//! eligibility system exactly; optional fields are skipped rather than sent as `null`.

use serde::{Deserialize, Serialize};

pub mod accumulator;
pub mod coverage;
pub mod member;
pub mod outcome;

pub use accumulator::AccumulatorResponse;
pub use coverage::CoverageResponse;
pub use member::MemberResponse;
pub use outcome::{Issue, IssueDetail, OperationOutcome, PlainError, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

impl Period {
    pub fn new(start: &str, end: &str) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    pub code: String,
    pub display: String,
}

impl Coding {
    pub fn new(code: &str, display: &str) -> Self {
        Self { code: code.into(), display: display.into() }
    }
}
