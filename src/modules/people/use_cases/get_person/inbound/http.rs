use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::people::core::context::OpContext;
use crate::modules::people::core::person::PersonId;
use crate::modules::people::core::ports::StoreError;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<PersonId>) -> impl IntoResponse {
    let ctx = OpContext::with_timeout(state.request_timeout);

    match state.store.person_for_id(&ctx, id).await {
        Ok(person) => Json(person).into_response(),
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
