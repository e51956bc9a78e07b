use serde::{Deserialize, Serialize};

pub type PersonId = i64;

/// The single record type managed by every store backend.
///
/// An `id` of zero means "not yet assigned": create requests may omit it and
/// let the store pick the next free id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}
