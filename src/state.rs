use crate::gateway::Gateway;
use crate::rate_limit::RateLimiter;

// app's shared state

pub struct AppState {
    pub gateway: Gateway,
    pub rate_limiter: RateLimiter,
}
