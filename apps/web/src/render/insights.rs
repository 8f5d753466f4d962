use serde::Serialize;
use serde_json::json;

use crate::models::Insight;
use crate::templates::{render, INSIGHTS};

pub fn insight_icon(kind: &str) -> &'static str {
    match kind {
        "coverage" => "🌍",
        "compliance" => "✅",
        "monitoring" => "👁️",
        "updates" => "🔄",
        "warning" => "⚠️",
        "success" => "🎉",
        "info" => "ℹ️",
        _ => "📊",
    }
}

#[derive(Serialize)]
struct InsightCard<'a> {
    icon: &'static str,
    title: &'a str,
    description: &'a str,
    value: Option<String>,
}

/// Markup for the insights grid. `None` leaves the existing grid untouched.
pub fn render_insights(insights: &[Insight]) -> Option<String> {
    if insights.is_empty() {
        return None;
    }

    let cards: Vec<_> = insights
        .iter()
        .map(|insight| InsightCard {
            icon: insight_icon(&insight.kind),
            title: &insight.title,
            description: &insight.description,
            value: insight
                .value
                .as_ref()
                .filter(|value| !value.is_blank())
                .map(ToString::to_string),
        })
        .collect();
    Some(render(INSIGHTS, &json!({ "insights": cards })))
}
