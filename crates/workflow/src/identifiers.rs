//! Newtype domain identifiers.
//!
//! Every domain concept that has an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging, for example,
//! a [`ProfileId`] with an [`AccountId`] even though both are strings under the
//! hood.
//!
//! String-backed identifiers refuse the empty string: an optional parameter left
//! blank by the user resolves to `None` rather than to an empty identifier, which
//! is what keeps blank optional fields out of request bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, path_segment(), Display, and a
// conversion into a JSON string for request bodies.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// The identifier percent-encoded for use as one URL path segment.
            pub fn path_segment(&self) -> std::borrow::Cow<'_, str> {
                urlencoding::encode(&self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(id: $name) -> Self {
                serde_json::Value::String(id.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: positional
// ---------------------------------------------------------------------------

/// Position of an input item within the list handed to a node.
///
/// The index is the item's identity: every result produced for the item carries
/// the same index so the host can pair outputs with inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates an index from a raw position.
    pub fn new(value: usize) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single node execution (one pass over an input item list).
///
/// Generated fresh for every run; recorded on the run span and in the
/// [`crate::ExecutionSummary`] so all requests from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionRunId(Uuid);

impl ExecutionRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ExecutionRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: string-backed (LinkedIn / ConnectSafely entities)
// ---------------------------------------------------------------------------

string_id! {
    /// ConnectSafely-managed LinkedIn account. When omitted the API uses the
    /// caller's default account.
    AccountId
}

string_id! {
    /// LinkedIn public profile identifier (vanity name or numeric id).
    ProfileId
}

string_id! {
    /// LinkedIn profile URN (e.g. `"urn:li:fsd_profile:ACoAA..."`), an
    /// alternative to [`ProfileId`].
    ProfileUrn
}

string_id! {
    /// Company page URN used to act as an organisation instead of a person.
    CompanyUrn
}

string_id! {
    /// ConnectSafely campaign identifier.
    CampaignId
}

string_id! {
    /// LinkedIn group identifier.
    GroupId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_not_an_identifier() {
        assert_eq!(ProfileId::new(""), None);
        assert_eq!(ProfileId::new("jane").map(|id| id.to_string()), Some("jane".to_owned()));
    }

    #[test]
    fn path_segment_escapes_separators() {
        let id = ProfileUrn::new("urn:li:person/1?x").unwrap();
        assert_eq!(id.path_segment(), "urn%3Ali%3Aperson%2F1%3Fx");
        assert_eq!(AccountId::new("plain-id_1").unwrap().path_segment(), "plain-id_1");
    }
}
