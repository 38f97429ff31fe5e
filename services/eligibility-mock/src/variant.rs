//! Closed set of response shapes a fixture can take.
//!
//! `Failure` and `PlainError` both travel with a 200 status: the upstream being
//! simulated degrades in-band, so callers must inspect the payload, not the status.

use axum::http::StatusCode;
use serde::{Serialize, Serializer};

use crate::domain::Domain;
use crate::model::{AccumulatorResponse, CoverageResponse, MemberResponse, OperationOutcome, PlainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantKind {
    Success,
    SuccessWithOmission,
    Failure,
    PlainError,
}

impl VariantKind {
    pub const fn name(self) -> &'static str {
        match self {
            VariantKind::Success => "success",
            VariantKind::SuccessWithOmission => "successWithOmission",
            VariantKind::Failure => "failure",
            VariantKind::PlainError => "plainError",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variant<T> {
    Success(T),
    /// `omitted` holds JSON pointers (relative to the serialized body) of the
    /// optional fields left out on purpose.
    SuccessWithOmission { body: T, omitted: Vec<&'static str> },
    Failure { outcome: OperationOutcome, body: T },
    PlainError(PlainError),
}

impl<T> Variant<T> {
    pub const fn kind(&self) -> VariantKind {
        match self {
            Variant::Success(_) => VariantKind::Success,
            Variant::SuccessWithOmission { .. } => VariantKind::SuccessWithOmission,
            Variant::Failure { .. } => VariantKind::Failure,
            Variant::PlainError(_) => VariantKind::PlainError,
        }
    }

    pub fn body(&self) -> Option<&T> {
        match self {
            Variant::Success(body)
            | Variant::SuccessWithOmission { body, .. }
            | Variant::Failure { body, .. } => Some(body),
            Variant::PlainError(_) => None,
        }
    }

    pub fn omitted(&self) -> &[&'static str] {
        match self {
            Variant::SuccessWithOmission { omitted, .. } => omitted,
            _ => &[],
        }
    }

    pub fn outcome(&self) -> Option<&OperationOutcome> {
        match self {
            Variant::Failure { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct WithOutcome<'a, T> {
    #[serde(rename = "operationOutcome")]
    outcome: &'a OperationOutcome,
    #[serde(flatten)]
    body: &'a T,
}

impl<T: Serialize> Serialize for Variant<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Variant::Success(body) | Variant::SuccessWithOmission { body, .. } => {
                body.serialize(serializer)
            }
            Variant::Failure { outcome, body } => WithOutcome { outcome, body }.serialize(serializer),
            Variant::PlainError(err) => err.serialize(serializer),
        }
    }
}

/// A fixture payload, tagged by the lookup family it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Member(Variant<MemberResponse>),
    Coverage(Variant<CoverageResponse>),
    Accumulator(Variant<AccumulatorResponse>),
}

impl ResponsePayload {
    pub const fn domain(&self) -> Domain {
        match self {
            ResponsePayload::Member(_) => Domain::Member,
            ResponsePayload::Coverage(_) => Domain::Coverage,
            ResponsePayload::Accumulator(_) => Domain::Accumulator,
        }
    }

    pub const fn kind(&self) -> VariantKind {
        match self {
            ResponsePayload::Member(v) => v.kind(),
            ResponsePayload::Coverage(v) => v.kind(),
            ResponsePayload::Accumulator(v) => v.kind(),
        }
    }

    pub fn omitted(&self) -> &[&'static str] {
        match self {
            ResponsePayload::Member(v) => v.omitted(),
            ResponsePayload::Coverage(v) => v.omitted(),
            ResponsePayload::Accumulator(v) => v.omitted(),
        }
    }

    pub fn outcome(&self) -> Option<&OperationOutcome> {
        match self {
            ResponsePayload::Member(v) => v.outcome(),
            ResponsePayload::Coverage(v) => v.outcome(),
            ResponsePayload::Accumulator(v) => v.outcome(),
        }
    }

    /// Transport status for this payload. Always 200, including the simulated failures.
    pub const fn status(&self) -> StatusCode {
        match self.kind() {
            VariantKind::Success
            | VariantKind::SuccessWithOmission
            | VariantKind::Failure
            | VariantKind::PlainError => StatusCode::OK,
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for ResponsePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponsePayload::Member(v) => v.serialize(serializer),
            ResponsePayload::Coverage(v) => v.serialize(serializer),
            ResponsePayload::Accumulator(v) => v.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Issue, IssueDetail, Severity};

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Body {
        a: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        b: Option<u32>,
    }

    fn outcome() -> OperationOutcome {
        OperationOutcome {
            issue: vec![Issue {
                severity: Severity::Warning,
                code: "1".into(),
                details: vec![IssueDetail { text: "d".into() }],
                diagnostics: "diag".into(),
            }],
        }
    }

    #[test]
    fn success_and_omission_serialize_as_bare_body() {
        let ok = Variant::Success(Body { a: 1, b: Some(2) });
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"a": 1, "b": 2}));

        let omitted = Variant::SuccessWithOmission { body: Body { a: 1, b: None }, omitted: vec!["/b"] };
        assert_eq!(serde_json::to_value(&omitted).unwrap(), json!({"a": 1}));
        assert_eq!(omitted.omitted(), &["/b"]);
    }

    #[test]
    fn failure_puts_outcome_beside_body() {
        let failed = Variant::Failure { outcome: outcome(), body: Body { a: 7, b: None } };
        let v = serde_json::to_value(&failed).unwrap();
        assert_eq!(v["a"], 7);
        assert_eq!(v["operationOutcome"]["issue"][0]["severity"], "warning");
        assert_eq!(v["operationOutcome"]["issue"][0]["details"][0]["text"], "d");
        assert!(failed.body().is_some());
    }

    #[test]
    fn plain_error_is_text_only() {
        let err: Variant<Body> = Variant::PlainError(PlainError::no_info_found());
        assert_eq!(serde_json::to_value(&err).unwrap(), json!({"text": "error, no info found"}));
        assert!(err.body().is_none());
        assert_eq!(err.kind(), VariantKind::PlainError);
    }

    #[test]
    fn every_payload_kind_is_transport_success() {
        let payloads = [
            ResponsePayload::Member(Variant::PlainError(PlainError::no_info_found())),
            ResponsePayload::Coverage(Variant::PlainError(PlainError::no_info_found())),
        ];
        for p in payloads {
            assert_eq!(p.status(), StatusCode::OK);
        }
        assert_eq!(
            ResponsePayload::Coverage(Variant::PlainError(PlainError::no_info_found())).domain(),
            Domain::Coverage
        );
    }
}
