use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use kitespot_agent::AgentError;
use kitespot_agent::api::{AppState, create_router};
use kitespot_agent::config::Config;

mod test_helpers {
    use super::*;

    pub async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn missing_config_state() -> AppState {
        AppState::new(
            reqwest::Client::new(),
            Arc::new(|| -> Result<Config, AgentError> {
                Err(AgentError::Configuration(
                    "Supabase environment variables (SUPABASE_URL and SUPABASE_API_KEY) are not set"
                        .into(),
                ))
            }),
        )
    }

    pub async fn call(app: Router, method: Method) -> (StatusCode, String, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/crawler")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_missing_config_get() {
    let app = create_router(missing_config_state());

    let (status, content_type, body) = call(app, Method::GET).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "application/json");
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("SUPABASE_URL and SUPABASE_API_KEY")
    );
}

#[tokio::test]
async fn test_missing_config_post() {
    let app = create_router(missing_config_state());

    let (status, _, body) = call(app, Method::POST).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_crawler_route_success() {
    let site = spawn(Router::new().route(
        "/spot",
        get(|| async { Html("<h1>Le Morne</h1><p>Flat water in the lagoon</p>") }),
    ))
    .await;
    let store = spawn(Router::new().route(
        "/rest/v1/:table",
        post(|Json(row): Json<Value>| async move {
            (StatusCode::CREATED, Json(json!([{ "id": 1, "row": row }])))
        }),
    ))
    .await;

    let config = Config {
        supabase_url: store,
        supabase_api_key: "key".into(),
        source_url: format!("{site}/spot"),
        table: "kitespots".into(),
    };
    let state = AppState::new(
        reqwest::Client::new(),
        Arc::new(move || -> Result<Config, AgentError> { Ok(config.clone()) }),
    );

    let (status, _, body) = call(create_router(state), Method::POST).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Le Morne");
    assert_eq!(body["data"]["description"], "Flat water in the lagoon");
    assert_eq!(
        body["storage_response"],
        json!([{ "id": 1, "row": body["data"].clone() }])
    );
}
