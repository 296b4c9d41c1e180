use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUESTS_TOTAL: Counter =
        register_counter!("proxy_requests_total", "Total number of proxy requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "proxy_rate_limited_total",
        "Total requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_ERRORS_TOTAL: Counter = register_counter!(
        "proxy_upstream_errors_total",
        "Total failed upstream calls"
    )
    .unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "proxy_upstream_latency_seconds",
        "Upstream call latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge = register_gauge!(
        "proxy_tracked_clients",
        "Number of client identities with a rate-limit log"
    )
    .unwrap();
}
