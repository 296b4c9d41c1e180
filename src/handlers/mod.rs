mod gemini;
mod health;
mod metrics;

pub use gemini::gemini_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
