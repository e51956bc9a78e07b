use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::{Person, PersonId};
use crate::modules::people::core::ports::StoreError;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
    body: Result<Json<Person>, JsonRejection>,
) -> impl IntoResponse {
    let Json(person) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let ctx = OpContext::with_timeout(state.request_timeout);

    match state.store.update_person(&ctx, id, person).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err @ StoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}
