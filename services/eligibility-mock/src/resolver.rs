use crate::catalog::{Fixture, FixtureCatalog};
use crate::domain::Domain;

/// Outcome of a lookup. `NotFound` means the caller asked for something outside the
/// catalog; catalogued error fixtures still resolve as `Found`.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    Found(&'a Fixture),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub const fn fixture(self) -> Option<&'a Fixture> {
        match self {
            Resolution::Found(f) => Some(f),
            Resolution::NotFound => None,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

pub fn resolve<'a>(catalog: &'a FixtureCatalog, domain: Domain, id: &str) -> Resolution<'a> {
    match catalog.lookup(domain, id) {
        Some(f) => Resolution::Found(f),
        None => Resolution::NotFound,
    }
}
