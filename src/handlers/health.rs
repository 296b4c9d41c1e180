use axum::response::IntoResponse;

// health handler
pub async fn health_handler() -> impl IntoResponse {
    "Server is running"
}
