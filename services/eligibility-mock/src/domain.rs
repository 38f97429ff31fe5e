use std::fmt;

use serde::Serialize;

/// Lookup families served by the mock. Each one owns a disjoint identifier namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Member,
    Coverage,
    Accumulator,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Member, Domain::Coverage, Domain::Accumulator];

    pub const fn name(self) -> &'static str {
        match self {
            Domain::Member => "member",
            Domain::Coverage => "coverage",
            Domain::Accumulator => "accumulator",
        }
    }

    /// First path segment of the lookup route, kept byte-for-byte compatible with
    /// existing consumers.
    pub const fn route_segment(self) -> &'static str {
        match self {
            Domain::Member => "searchMemberById",
            Domain::Coverage => "searchCoverageById",
            Domain::Accumulator => "searchAccums",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.route_segment() == segment)
    }

    /// axum route pattern, e.g. `/searchAccums/:id`.
    pub fn route_pattern(self) -> String {
        format!("/{}/:id", self.route_segment())
    }

    pub fn path_for(self, id: &str) -> String {
        format!("/{}/{}", self.route_segment(), id)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifiers must be addressable as a single path segment.
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty() && !id.contains('/') && !id.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_round_trip_through_from_segment() {
        for d in Domain::ALL {
            assert_eq!(Domain::from_segment(d.route_segment()), Some(d));
        }
        assert_eq!(Domain::from_segment("searchClaims"), None);
        assert_eq!(Domain::from_segment("searchmemberbyid"), None);
    }

    #[test]
    fn paths_use_original_route_names() {
        assert_eq!(Domain::Member.path_for("m-a"), "/searchMemberById/m-a");
        assert_eq!(Domain::Accumulator.route_pattern(), "/searchAccums/:id");
    }

    #[test]
    fn identifier_rules() {
        assert!(is_valid_identifier("acc-rem-amt-miss"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("m/a"));
        assert!(!is_valid_identifier("m a"));
    }
}
