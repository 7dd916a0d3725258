use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::handler::{InvocationResponse, handle_with_client};

use super::AppState;

/// One request, one invocation.
pub async fn crawler_handler(State(state): State<AppState>) -> Response {
    let config = (state.config_source)();
    let response = handle_with_client(config, state.client.clone()).await;
    into_http(response)
}

fn into_http(response: InvocationResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers
        .get("Content-Type")
        .cloned()
        .unwrap_or_else(|| "application/json".to_string());

    (status, [(header::CONTENT_TYPE, content_type)], response.body).into_response()
}
