// Configurable test double for the PersonStore port.
//
// Purpose
// - Drive collaborators (the HTTP shell above all) deterministically without
//   real storage or timing behavior.
//
// Usage
// - Inject per-operation closures with the `with_*` setters; calling an
//   unconfigured operation panics.
// - `with_delay` postpones delegation so latency and cancellation races can be
//   staged against the caller's context.

use std::time::Duration;

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::{Person, PersonId};
use crate::modules::people::core::ports::{PersonStore, StoreError};

type AllPeopleStub = Box<dyn Fn() -> Result<Vec<Person>, StoreError> + Send + Sync>;
type PersonForIdStub = Box<dyn Fn(PersonId) -> Result<Person, StoreError> + Send + Sync>;
type AddPersonStub = Box<dyn Fn(Person) -> Result<Person, StoreError> + Send + Sync>;
type UpdatePersonStub = Box<dyn Fn(PersonId, Person) -> Result<Person, StoreError> + Send + Sync>;
type DeletePersonStub = Box<dyn Fn(PersonId) -> Result<(), StoreError> + Send + Sync>;

#[derive(Default)]
pub struct StubPersonStore {
    delay: Duration,
    all_people: Option<AllPeopleStub>,
    person_for_id: Option<PersonForIdStub>,
    add_person: Option<AddPersonStub>,
    update_person: Option<UpdatePersonStub>,
    delete_person: Option<DeletePersonStub>,
}

impl StubPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_all_people(
        mut self,
        stub: impl Fn() -> Result<Vec<Person>, StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.all_people = Some(Box::new(stub));
        self
    }

    pub fn with_person_for_id(
        mut self,
        stub: impl Fn(PersonId) -> Result<Person, StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.person_for_id = Some(Box::new(stub));
        self
    }

    pub fn with_add_person(
        mut self,
        stub: impl Fn(Person) -> Result<Person, StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.add_person = Some(Box::new(stub));
        self
    }

    pub fn with_update_person(
        mut self,
        stub: impl Fn(PersonId, Person) -> Result<Person, StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.update_person = Some(Box::new(stub));
        self
    }

    pub fn with_delete_person(
        mut self,
        stub: impl Fn(PersonId) -> Result<(), StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.delete_person = Some(Box::new(stub));
        self
    }

    async fn run<T>(
        &self,
        ctx: &OpContext,
        outcome: impl FnOnce() -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let work = async {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            outcome()
        };
        tokio::select! {
            biased;
            out = work => out,
            failure = ctx.done() => Err(failure),
        }
    }
}

#[async_trait::async_trait]
impl PersonStore for StubPersonStore {
    async fn all_people(&self, ctx: &OpContext) -> Result<Vec<Person>, StoreError> {
        let stub = self.all_people.as_ref().expect("all_people stub not set");
        self.run(ctx, || stub()).await
    }

    async fn person_for_id(&self, ctx: &OpContext, id: PersonId) -> Result<Person, StoreError> {
        let stub = self
            .person_for_id
            .as_ref()
            .expect("person_for_id stub not set");
        self.run(ctx, || stub(id)).await
    }

    async fn add_person(&self, ctx: &OpContext, person: Person) -> Result<Person, StoreError> {
        let stub = self.add_person.as_ref().expect("add_person stub not set");
        self.run(ctx, || stub(person)).await
    }

    async fn update_person(
        &self,
        ctx: &OpContext,
        id: PersonId,
        person: Person,
    ) -> Result<Person, StoreError> {
        let stub = self
            .update_person
            .as_ref()
            .expect("update_person stub not set");
        self.run(ctx, || stub(id, person)).await
    }

    async fn delete_person(&self, ctx: &OpContext, id: PersonId) -> Result<(), StoreError> {
        let stub = self
            .delete_person
            .as_ref()
            .expect("delete_person stub not set");
        self.run(ctx, || stub(id)).await
    }
}
