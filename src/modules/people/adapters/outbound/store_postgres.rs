// PostgreSQL implementation of the PersonStore port.
//
// Purpose
// - Durable backend behind the same contract: parameterized queries against
//   the `people` table, no business logic.
//
// Responsibilities
// - Map database rows to the domain record and sqlx failures to the store
//   error taxonomy.
// - Bound every query by the caller's context, like the in-memory backend.

use std::future::Future;

use sqlx::postgres::PgPool;

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::{Person, PersonId};
use crate::modules::people::core::ports::{PersonStore, StoreError};

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    first_name: String,
    last_name: String,
    age: i32,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
        }
    }
}

pub struct PostgresPersonStore {
    pool: PgPool,
}

impl PostgresPersonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Races `query` against the caller's context so the contract's
    /// cancellation bound holds for this backend too.
    async fn bounded<T, F>(&self, ctx: &OpContext, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::select! {
            biased;
            outcome = query => outcome,
            failure = ctx.done() => Err(failure),
        }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait::async_trait]
impl PersonStore for PostgresPersonStore {
    async fn all_people(&self, ctx: &OpContext) -> Result<Vec<Person>, StoreError> {
        self.bounded(ctx, async {
            let rows: Vec<PersonRow> = sqlx::query_as(
                "SELECT id, first_name, last_name, age FROM people ORDER BY id DESC",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
            Ok(rows.into_iter().map(Person::from).collect())
        })
        .await
    }

    async fn person_for_id(&self, ctx: &OpContext, id: PersonId) -> Result<Person, StoreError> {
        self.bounded(ctx, async {
            let row: Option<PersonRow> =
                sqlx::query_as("SELECT id, first_name, last_name, age FROM people WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(backend)?;
            row.map(Person::from).ok_or(StoreError::NotFound { id })
        })
        .await
    }

    async fn add_person(&self, ctx: &OpContext, person: Person) -> Result<Person, StoreError> {
        self.bounded(ctx, async {
            let mut person = person;
            let inserted: Result<i64, sqlx::Error> = if person.id == 0 {
                sqlx::query_scalar(
                    "INSERT INTO people (first_name, last_name, age) VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&person.first_name)
                .bind(&person.last_name)
                .bind(person.age)
                .fetch_one(&self.pool)
                .await
            } else {
                sqlx::query_scalar(
                    "INSERT INTO people (id, first_name, last_name, age) VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(person.id)
                .bind(&person.first_name)
                .bind(&person.last_name)
                .bind(person.age)
                .fetch_one(&self.pool)
                .await
            };
            match inserted {
                Ok(id) => {
                    person.id = id;
                    Ok(person)
                }
                Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    Err(StoreError::AlreadyExists { id: person.id })
                }
                Err(err) => Err(backend(err)),
            }
        })
        .await
    }

    async fn update_person(
        &self,
        ctx: &OpContext,
        id: PersonId,
        person: Person,
    ) -> Result<Person, StoreError> {
        self.bounded(ctx, async {
            let row: Option<PersonRow> = sqlx::query_as(
                "UPDATE people SET first_name = $1, last_name = $2, age = $3 WHERE id = $4 \
                 RETURNING id, first_name, last_name, age",
            )
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.age)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
            row.map(Person::from).ok_or(StoreError::NotFound { id })
        })
        .await
    }

    async fn delete_person(&self, ctx: &OpContext, id: PersonId) -> Result<(), StoreError> {
        self.bounded(ctx, async {
            let result = sqlx::query("DELETE FROM people WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(backend)?;
            if result.rows_affected() == 0 {
                return Err(StoreError::NotFound { id });
            }
            Ok(())
        })
        .await
    }
}
