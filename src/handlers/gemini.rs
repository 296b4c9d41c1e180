use crate::errors::ProxyError;
use crate::metrics::{
    RATE_LIMITED_TOTAL, REQUESTS_TOTAL, TRACKED_CLIENTS, UPSTREAM_ERRORS_TOTAL, UPSTREAM_LATENCY,
};
use crate::models::ProxyRequest;
use crate::shaper::shape_request;
use crate::state::AppState;
use axum::Json;
use axum::extract::{ConnectInfo, State};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

// proxy handler: admission -> shaping -> upstream call
pub async fn gemini_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<ProxyRequest>,
) -> Result<Json<Value>, ProxyError> {
    REQUESTS_TOTAL.inc();

    // source address is the rate-limit identity
    let identity = addr.ip().to_string();
    if !state.rate_limiter.try_acquire(&identity) {
        RATE_LIMITED_TOTAL.inc();
        warn!(client = %identity, "rate limited");
        return Err(ProxyError::RateLimited);
    }
    TRACKED_CLIENTS.set(state.rate_limiter.tracked_identities() as f64);

    // log shape of the request, never its contents
    info!(
        client = %identity,
        prompt_len = payload.prompt.len(),
        model = payload.model.as_deref(),
        has_image = payload.image.is_some(),
        "received request"
    );

    let upstream_payload = shape_request(&payload)?;

    let start = Instant::now();
    let result = state.gateway.call(&upstream_payload).await;
    UPSTREAM_LATENCY.observe(start.elapsed().as_secs_f64());

    match result {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            UPSTREAM_ERRORS_TOTAL.inc();
            warn!(error = %e, "upstream call failed");
            Err(e)
        }
    }
}
