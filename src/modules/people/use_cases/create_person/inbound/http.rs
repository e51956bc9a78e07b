use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::Person;
use crate::modules::people::core::ports::StoreError;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Person>, JsonRejection>,
) -> impl IntoResponse {
    let Json(person) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let ctx = OpContext::with_timeout(state.request_timeout);

    match state.store.add_person(&ctx, person).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err @ StoreError::AlreadyExists { .. }) => (
            StatusCode::CONFLICT,
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
