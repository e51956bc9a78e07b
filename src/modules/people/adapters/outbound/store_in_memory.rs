// In-memory implementation of the PersonStore port.
//
// Purpose
// - Serve local development and tests without a database.
//
// Responsibilities
// - Keep the people sequence behind a single RwLock so concurrent mutations
//   serialize and "at most one record per id" holds under load.
// - Run every operation on a background task raced against the caller's
//   context, with an optional artificial latency to mimic a slow backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, oneshot};

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::{Person, PersonId};
use crate::modules::people::core::ports::{PersonStore, StoreError};

pub struct InMemoryPersonStore {
    people: Arc<RwLock<Vec<Person>>>,
    latency: Duration,
}

impl InMemoryPersonStore {
    /// A store seeded with the demo records, delaying every operation by
    /// `latency`.
    pub fn new(latency: Duration) -> Self {
        Self::with_people(
            vec![
                Person {
                    id: 1,
                    first_name: "Bob".into(),
                    last_name: "Barker".into(),
                    age: 53,
                },
                Person {
                    id: 2,
                    first_name: "Fred".into(),
                    last_name: "Flintstone".into(),
                    age: 44,
                },
                Person {
                    id: 3,
                    first_name: "Joan".into(),
                    last_name: "Jet".into(),
                    age: 49,
                },
            ],
            latency,
        )
    }

    pub fn with_people(people: Vec<Person>, latency: Duration) -> Self {
        Self {
            people: Arc::new(RwLock::new(people)),
            latency,
        }
    }

    /// Runs `work` on a background task after the configured latency and races
    /// its completion against the caller's context. A context that fires first
    /// abandons the task: the task may still finish and apply its mutation
    /// atomically under the lock, but its outcome is discarded.
    async fn run<T, F>(&self, ctx: &OpContext, work: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, StoreError>> + Send + 'static,
    {
        let latency = self.latency;
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let _ = tx.send(work.await);
        });

        tokio::select! {
            // Completion wins when both sides are ready at once.
            biased;
            outcome = rx => {
                outcome.unwrap_or_else(|_| Err(StoreError::Backend("store task dropped".into())))
            }
            failure = ctx.done() => Err(failure),
        }
    }
}

#[async_trait::async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn all_people(&self, ctx: &OpContext) -> Result<Vec<Person>, StoreError> {
        let people = self.people.clone();
        self.run(ctx, async move { Ok(people.read().await.clone()) })
            .await
    }

    async fn person_for_id(&self, ctx: &OpContext, id: PersonId) -> Result<Person, StoreError> {
        let people = self.people.clone();
        self.run(ctx, async move {
            people
                .read()
                .await
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(StoreError::NotFound { id })
        })
        .await
    }

    async fn add_person(&self, ctx: &OpContext, person: Person) -> Result<Person, StoreError> {
        let people = self.people.clone();
        self.run(ctx, async move {
            let mut guard = people.write().await;
            let mut person = person;
            if person.id == 0 {
                person.id = guard.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            } else if guard.iter().any(|p| p.id == person.id) {
                return Err(StoreError::AlreadyExists { id: person.id });
            }
            guard.push(person.clone());
            Ok(person)
        })
        .await
    }

    async fn update_person(
        &self,
        ctx: &OpContext,
        id: PersonId,
        person: Person,
    ) -> Result<Person, StoreError> {
        let people = self.people.clone();
        self.run(ctx, async move {
            let mut guard = people.write().await;
            let slot = guard
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(StoreError::NotFound { id })?;
            let mut person = person;
            person.id = id;
            *slot = person.clone();
            Ok(person)
        })
        .await
    }

    async fn delete_person(&self, ctx: &OpContext, id: PersonId) -> Result<(), StoreError> {
        let people = self.people.clone();
        self.run(ctx, async move {
            let mut guard = people.write().await;
            let index = guard
                .iter()
                .position(|p| p.id == id)
                .ok_or(StoreError::NotFound { id })?;
            // Vec::remove shifts the tail left, keeping the remainder in its
            // original relative order.
            guard.remove(index);
            Ok(())
        })
        .await
    }
}
