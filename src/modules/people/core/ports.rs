// Ports define what the people module needs from a storage backend, without
// implementing it.
//
// Purpose
// - Describe the storage contract as a trait so backends stay swappable: the
//   shell picks one implementation at startup and holds it for the process
//   lifetime.
//
// Boundaries
// - No concrete storage here. Backends implement this trait in the adapters
//   layer; tests use the stub implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::{Person, PersonId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no person found for id {id}")]
    NotFound { id: PersonId },

    #[error("person id {id} is already taken")]
    AlreadyExists { id: PersonId },

    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage contract shared by every backend.
///
/// Every operation observes the caller's context: when it fires first the call
/// returns `Cancelled` or `DeadlineExceeded` and no further outcome is
/// observable for that call. Mutations apply exactly once on success, never
/// partially.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn all_people(&self, ctx: &OpContext) -> Result<Vec<Person>, StoreError>;

    async fn person_for_id(&self, ctx: &OpContext, id: PersonId) -> Result<Person, StoreError>;

    /// Adds `person`, assigning the next free id when the supplied id is zero.
    /// A nonzero id that collides with an existing record is rejected.
    async fn add_person(&self, ctx: &OpContext, person: Person) -> Result<Person, StoreError>;

    /// Replaces the record at `id` with `person`'s fields; the stored id stays
    /// `id` regardless of the id carried by the payload.
    async fn update_person(
        &self,
        ctx: &OpContext,
        id: PersonId,
        person: Person,
    ) -> Result<Person, StoreError>;

    async fn delete_person(&self, ctx: &OpContext, id: PersonId) -> Result<(), StoreError>;
}
