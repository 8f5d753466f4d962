use std::env;

use dotenv::dotenv;
use guardrail_web::DashboardConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Loads `.env`, then reads the API base from `GUARDRAIL_API_URL`.
pub fn init_cli_config() -> DashboardConfig {
    dotenv().ok();
    let base = env::var("GUARDRAIL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    DashboardConfig::default()
        .with_api_base(base)
        .without_welcome()
}
