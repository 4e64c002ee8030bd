//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod budget;
pub mod expenses;
pub mod health;
pub mod labour;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(budget::routes())
        .merge(labour::routes())
        .merge(expenses::routes())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::AppState;

    /// Fresh in-memory store wired to the given routes.
    pub async fn app(routes: Router<AppState>) -> Router {
        let db = nirmaan_db::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        Router::new().merge(routes).with_state(AppState::new(db))
    }

    /// Sends a request and returns status plus parsed JSON body.
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}
