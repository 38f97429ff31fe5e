//! Immutable table of canned responses, keyed by `(Domain, identifier)`.
//!
//! The only way to obtain a [`FixtureCatalog`] is through [`CatalogBuilder::build`],
//! which validates every entry and pre-renders its JSON body. After that the
//! catalog is read-only and shared behind an `Arc`.

use std::collections::HashMap;

use axum::body::Bytes;
use serde_json::Value;

use crate::domain::{is_valid_identifier, Domain};
use crate::error::CatalogError;
use crate::variant::{ResponsePayload, VariantKind};

mod fixtures;

pub use fixtures::standard;

#[derive(Debug, Clone)]
pub struct Fixture {
    pub domain: Domain,
    pub id: String,
    pub description: String,
    pub payload: ResponsePayload,
    rendered: Bytes,
}

impl Fixture {
    /// Serialized body, rendered once at build time.
    pub fn body(&self) -> Bytes {
        self.rendered.clone()
    }

    pub fn path(&self) -> String {
        self.domain.path_for(&self.id)
    }

    pub const fn kind(&self) -> VariantKind {
        self.payload.kind()
    }
}

#[derive(Debug, Default)]
pub struct FixtureCatalog {
    fixtures: Vec<Fixture>,
    index: HashMap<Domain, HashMap<String, usize>>,
}

impl FixtureCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn lookup(&self, domain: Domain, id: &str) -> Option<&Fixture> {
        let slot = self.index.get(&domain)?.get(id)?;
        self.fixtures.get(*slot)
    }

    /// All fixtures in registration order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter()
    }

    pub fn for_domain(&self, domain: Domain) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.domain == domain)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

struct Pending {
    id: String,
    description: String,
    payload: ResponsePayload,
}

#[derive(Default)]
pub struct CatalogBuilder {
    pending: Vec<Pending>,
}

impl CatalogBuilder {
    /// Queues a fixture; its domain comes from the payload itself.
    pub fn register(mut self, id: &str, description: &str, payload: ResponsePayload) -> Self {
        self.pending.push(Pending { id: id.into(), description: description.into(), payload });
        self
    }

    /// Validates all queued fixtures. Either every entry is accepted or none is.
    pub fn build(self) -> Result<FixtureCatalog, CatalogError> {
        let mut catalog = FixtureCatalog::default();
        for Pending { id, description, payload } in self.pending {
            let domain = payload.domain();
            if !is_valid_identifier(&id) {
                return Err(CatalogError::InvalidIdentifier { domain, id });
            }
            let slots = catalog.index.entry(domain).or_default();
            if slots.contains_key(&id) {
                return Err(CatalogError::Duplicate { domain, id });
            }
            let rendered = validate(domain, &id, &payload)?;
            slots.insert(id.clone(), catalog.fixtures.len());
            catalog.fixtures.push(Fixture { domain, id, description, payload, rendered });
        }
        Ok(catalog)
    }
}

fn validate(domain: Domain, id: &str, payload: &ResponsePayload) -> Result<Bytes, CatalogError> {
    let value = payload.to_value().map_err(|e| CatalogError::Unserializable {
        domain,
        id: id.into(),
        reason: e.to_string(),
    })?;

    match payload.kind() {
        VariantKind::SuccessWithOmission => check_omissions(domain, id, payload.omitted(), &value)?,
        VariantKind::Failure => {
            if payload.outcome().map_or(true, |o| o.issue.is_empty()) {
                return Err(CatalogError::EmptyOutcome { domain, id: id.into() });
            }
        }
        VariantKind::Success | VariantKind::PlainError => {}
    }

    let bytes = serde_json::to_vec(&value).map_err(|e| CatalogError::Unserializable {
        domain,
        id: id.into(),
        reason: e.to_string(),
    })?;
    Ok(Bytes::from(bytes))
}

// An omission is only meaningful when the enclosing object is there and the
// field itself is not.
fn check_omissions(domain: Domain, id: &str, omitted: &[&str], value: &Value) -> Result<(), CatalogError> {
    if omitted.is_empty() {
        return Err(CatalogError::OmissionUndocumented { domain, id: id.into() });
    }
    for pointer in omitted {
        if value.pointer(pointer).is_some() {
            return Err(CatalogError::OmittedFieldPresent {
                domain,
                id: id.into(),
                pointer: (*pointer).into(),
            });
        }
        let parent = pointer.rfind('/').map_or("", |at| &pointer[..at]);
        if !value.pointer(parent).is_some_and(Value::is_object) {
            return Err(CatalogError::OmissionParentMissing {
                domain,
                id: id.into(),
                pointer: (*pointer).into(),
            });
        }
    }
    Ok(())
}
