use serde::Serialize;
use serde_json::json;

use crate::api::ApiError;
use crate::models::{ComplianceSummary, CountryDetail, SourceDescriptor, Tone, UpdateRecord};
use crate::templates::{render, COUNTRY_DETAIL, DETAIL_ERROR, DETAIL_LOADING};

pub const SECTION_CLASS: &str = "detail-section";

/// Tone of a compliance rate: success from 95, warning from 80.
pub fn rate_tone(rate: f64) -> Tone {
    if rate >= 95.0 {
        Tone::Success
    } else if rate >= 80.0 {
        Tone::Warning
    } else {
        Tone::Critical
    }
}

#[derive(Serialize)]
struct Metric {
    label: &'static str,
    value: String,
    tone: Option<&'static str>,
}

#[derive(Serialize)]
struct DetailView<'a> {
    metrics: [Metric; 4],
    compliance: &'a ComplianceSummary,
    recent_updates: &'a [UpdateRecord],
    update_count: u64,
    sources: &'a [SourceDescriptor],
}

pub fn render_detail_loading() -> String {
    render(DETAIL_LOADING, &json!({}))
}

/// Modal body for a detail lookup, successful or not.
pub fn render_detail(outcome: &Result<CountryDetail, ApiError>) -> String {
    match outcome {
        Ok(detail) => render_country_detail(detail),
        Err(err) => render_detail_error(err),
    }
}

pub fn render_detail_error(err: &ApiError) -> String {
    let message = match err {
        ApiError::Server(message) => format!("Error: {message}"),
        other => format!("Failed to load country details: {other}"),
    };
    render(DETAIL_ERROR, &json!({ "message": message }))
}

pub fn render_country_detail(detail: &CountryDetail) -> String {
    let compliance = &detail.compliance;
    let metrics = [
        Metric {
            label: "Total Checks",
            value: compliance.total_checks.to_string(),
            tone: None,
        },
        Metric {
            label: "Passed",
            value: compliance.passed_checks.to_string(),
            tone: Some(Tone::Success.as_str()),
        },
        Metric {
            label: "Violations",
            value: compliance.violations.to_string(),
            tone: Some(Tone::Critical.as_str()),
        },
        Metric {
            label: "Compliance Rate",
            value: format!("{}%", compliance.compliance_rate),
            tone: Some(rate_tone(compliance.compliance_rate).as_str()),
        },
    ];

    render(
        COUNTRY_DETAIL,
        &DetailView {
            metrics,
            compliance,
            recent_updates: &detail.recent_updates,
            update_count: detail.update_count,
            sources: &detail.sources,
        },
    )
}
