use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::people::core::context::OpContext;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let ctx = OpContext::with_timeout(state.request_timeout);

    match state.store.all_people(&ctx).await {
        Ok(people) => Json(people).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}
