use axum::{Router, routing::get};
use serde::Serialize;

use crate::modules::people::use_cases::create_person::inbound::http as create_http;
use crate::modules::people::use_cases::delete_person::inbound::http as delete_http;
use crate::modules::people::use_cases::get_person::inbound::http as get_http;
use crate::modules::people::use_cases::list_people::inbound::http as list_http;
use crate::modules::people::use_cases::update_person::inbound::http as update_http;
use crate::shell::state::AppState;

/// Body shape shared by every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_http::handle).post(create_http::handle))
        .route(
            "/people/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
