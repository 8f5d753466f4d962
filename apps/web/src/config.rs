use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";

/// Runtime settings for the dashboard. Hosts start from `Default` and
/// override what their environment provides.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub toast_duration_ms: u64,
    /// Delay between showing the analytics tab and measuring its canvases.
    pub chart_init_delay: Duration,
    pub welcome_message: Option<String>,
    pub welcome_duration_ms: u64,
    pub map_center: (f64, f64),
    pub map_zoom: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_duration_ms: crate::notify::DEFAULT_TOAST_MS,
            chart_init_delay: Duration::from_millis(200),
            welcome_message: Some("Welcome to Glocal Policy Guardrail".to_string()),
            welcome_duration_ms: 4000,
            map_center: (20.0, 0.0),
            map_zoom: 2,
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        if !base.trim().is_empty() {
            self.api_base = base.trim().to_string();
        }
        self
    }

    #[must_use]
    pub fn without_welcome(mut self) -> Self {
        self.welcome_message = None;
        self
    }
}
