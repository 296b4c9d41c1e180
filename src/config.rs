use clap::Parser;

const DEFAULT_UPSTREAM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-lite:generateContent";

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "gemini-proxy")]
#[command(about = "Rate-limited proxy for the Gemini generateContent API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // Upstream generateContent endpoint
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    // API key injected into the upstream call, never accepted from clients
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 20)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Upstream call timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub upstream_timeout: u64,
}
