//! Analytics charts.
//!
//! The adapter owns at most one live chart per canvas. Drawing always
//! destroys the previous handle of a slot first; once both slots are live a
//! further initialization request is skipped.

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{AnalyticsData, Series};

pub const VIOLATION_CANVAS: &str = "violationChart";
pub const CATEGORY_CANVAS: &str = "categoryChart";
pub const NO_DATA_LABEL: &str = "No Data";
pub const FAILURE_TEXT: &str = "Failed to load chart data";

// Empty bar charts show a zero bar; an empty doughnut needs a non-zero slice.
const BAR_PLACEHOLDER: f64 = 0.0;
const DOUGHNUT_PLACEHOLDER: f64 = 1.0;

const BAR_FILL: &[&str] = &[
    "rgba(244, 63, 94, 0.8)",
    "rgba(251, 146, 60, 0.8)",
    "rgba(250, 204, 21, 0.8)",
    "rgba(34, 197, 94, 0.8)",
    "rgba(59, 130, 246, 0.8)",
    "rgba(168, 85, 247, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(20, 184, 166, 0.8)",
    "rgba(132, 204, 22, 0.8)",
];

const BAR_BORDER: &[&str] = &[
    "rgb(244, 63, 94)",
    "rgb(251, 146, 60)",
    "rgb(250, 204, 21)",
    "rgb(34, 197, 94)",
    "rgb(59, 130, 246)",
    "rgb(168, 85, 247)",
    "rgb(236, 72, 153)",
    "rgb(20, 184, 166)",
    "rgb(132, 204, 22)",
];

const DOUGHNUT_FILL: &[&str] = &[
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(251, 146, 60, 0.8)",
    "rgba(168, 85, 247, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(20, 184, 166, 0.8)",
    "rgba(132, 204, 22, 0.8)",
    "rgba(234, 179, 8, 0.8)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: Colors,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Declarative chart description in the shape Chart.js accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn values(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map_or(&[][..], |dataset| dataset.data.as_slice())
    }
}

fn labels_and_values(series: &Series, placeholder: f64) -> (Vec<String>, Vec<f64>) {
    if series.is_empty() {
        return (vec![NO_DATA_LABEL.to_string()], vec![placeholder]);
    }
    (series.labels(), series.values())
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(ToString::to_string).collect()
}

pub fn violation_chart_config(data: &AnalyticsData) -> ChartConfig {
    let (labels, values) = labels_and_values(&data.violations_by_country, BAR_PLACEHOLDER);

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some("Violations".to_string()),
                data: values,
                background_color: Colors::Many(palette(BAR_FILL)),
                border_color: Colors::Many(palette(BAR_BORDER)),
                border_width: 2,
                border_radius: Some(8),
                hover_offset: None,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": "rgba(0, 0, 0, 0.8)",
                    "padding": 12,
                    "titleFont": { "size": 14, "weight": "bold" },
                    "bodyFont": { "size": 13 }
                }
            },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "ticks": { "stepSize": 1, "font": { "size": 12 } },
                    "grid": { "color": "rgba(0, 0, 0, 0.05)" }
                },
                "x": {
                    "ticks": { "font": { "size": 11 }, "maxRotation": 45, "minRotation": 45 },
                    "grid": { "display": false }
                }
            }
        }),
    }
}

pub fn category_chart_config(data: &AnalyticsData) -> ChartConfig {
    let (labels, values) =
        labels_and_values(&data.distribution_by_category, DOUGHNUT_PLACEHOLDER);

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data: values,
                background_color: Colors::Many(palette(DOUGHNUT_FILL)),
                border_color: Colors::One("#fff".to_string()),
                border_width: 3,
                border_radius: None,
                hover_offset: Some(10),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": {
                        "padding": 15,
                        "font": { "size": 12 },
                        "usePointStyle": true,
                        "pointStyle": "circle"
                    }
                },
                "tooltip": {
                    "backgroundColor": "rgba(0, 0, 0, 0.8)",
                    "padding": 12,
                    "titleFont": { "size": 14, "weight": "bold" },
                    "bodyFont": { "size": 13 }
                }
            }
        }),
    }
}

/// External charting capability.
pub trait ChartBackend {
    type Handle;

    /// Draw on `canvas_id`. `None` when the canvas is not in the document.
    fn draw(&mut self, canvas_id: &str, config: &ChartConfig) -> Option<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);

    /// Paint a plain message where a chart would go.
    fn paint_message(&mut self, canvas_id: &str, message: &str);
}

#[derive(Debug)]
enum Slot<H> {
    Uninitialized,
    Live(H),
}

impl<H> Slot<H> {
    const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    fn take(&mut self) -> Option<H> {
        match std::mem::replace(self, Self::Uninitialized) {
            Self::Live(handle) => Some(handle),
            Self::Uninitialized => None,
        }
    }
}

pub struct ChartAdapter<B: ChartBackend> {
    backend: B,
    violations: Slot<B::Handle>,
    categories: Slot<B::Handle>,
}

impl<B: ChartBackend> ChartAdapter<B> {
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            violations: Slot::Uninitialized,
            categories: Slot::Uninitialized,
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// False once both charts are live; re-initialization is then a no-op.
    pub const fn needs_init(&self) -> bool {
        !(self.violations.is_live() && self.categories.is_live())
    }

    pub fn is_live(&self, canvas_id: &str) -> bool {
        match canvas_id {
            VIOLATION_CANVAS => self.violations.is_live(),
            CATEGORY_CANVAS => self.categories.is_live(),
            _ => false,
        }
    }

    /// Draw both charts, replacing whatever was live on each canvas.
    pub fn draw(&mut self, data: &AnalyticsData) {
        let violation_config = violation_chart_config(data);
        let category_config = category_chart_config(data);

        Self::redraw(&mut self.backend, &mut self.violations, VIOLATION_CANVAS, &violation_config);
        Self::redraw(&mut self.backend, &mut self.categories, CATEGORY_CANVAS, &category_config);
    }

    fn redraw(backend: &mut B, slot: &mut Slot<B::Handle>, canvas_id: &str, config: &ChartConfig) {
        if let Some(previous) = slot.take() {
            backend.destroy(previous);
        }
        match backend.draw(canvas_id, config) {
            Some(handle) => *slot = Slot::Live(handle),
            None => tracing::debug!(canvas_id, "chart canvas not rendered yet, skipping"),
        }
    }

    pub fn show_failure(&mut self) {
        self.backend.paint_message(VIOLATION_CANVAS, FAILURE_TEXT);
    }

    pub fn destroy_all(&mut self) {
        for slot in [&mut self.violations, &mut self.categories] {
            if let Some(handle) = slot.take() {
                self.backend.destroy(handle);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeCharts;
    use super::*;

    fn analytics(json: &str) -> AnalyticsData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_bar_series_uses_zero_placeholder() {
        let config = violation_chart_config(&analytics(r#"{"violations_by_country": {}}"#));

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.labels(), ["No Data"]);
        assert_eq!(config.values(), [0.0]);
    }

    #[test]
    fn empty_doughnut_series_uses_non_zero_placeholder() {
        let config = category_chart_config(&analytics("{}"));

        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.labels(), ["No Data"]);
        assert_eq!(config.values(), [1.0]);
    }

    #[test]
    fn series_order_drives_labels() {
        let config = violation_chart_config(&analytics(
            r#"{"violations_by_country": {"germany": 3, "china": 5}}"#,
        ));
        assert_eq!(config.labels(), ["germany", "china"]);
        assert_eq!(config.values(), [3.0, 5.0]);
    }

    #[test]
    fn config_serializes_to_chart_js_shape() {
        let value = serde_json::to_value(category_chart_config(&analytics("{}"))).unwrap();

        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#fff");
        assert_eq!(value["data"]["datasets"][0]["hoverOffset"], 10);
        assert!(value["data"]["datasets"][0].get("label").is_none());
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
    }

    #[test]
    fn repeated_draw_keeps_one_live_chart_per_canvas() {
        let mut adapter = ChartAdapter::new(FakeCharts::default());
        let data = analytics(r#"{"violations_by_country": {"japan": 2}}"#);

        assert!(adapter.needs_init());
        adapter.draw(&data);
        adapter.draw(&data);

        assert_eq!(adapter.backend().live_on(VIOLATION_CANVAS), 1);
        assert_eq!(adapter.backend().live_on(CATEGORY_CANVAS), 1);
        assert_eq!(adapter.backend().drawn.len(), 4);
        assert!(!adapter.needs_init());
    }

    #[test]
    fn missing_canvas_is_skipped() {
        let mut adapter = ChartAdapter::new(FakeCharts {
            missing: vec![CATEGORY_CANVAS.to_string()],
            ..FakeCharts::default()
        });

        adapter.draw(&AnalyticsData::default());

        assert!(adapter.is_live(VIOLATION_CANVAS));
        assert!(!adapter.is_live(CATEGORY_CANVAS));
        assert!(adapter.needs_init());
    }

    #[test]
    fn destroy_all_returns_slots_to_uninitialized() {
        let mut adapter = ChartAdapter::new(FakeCharts::default());
        adapter.draw(&AnalyticsData::default());
        adapter.destroy_all();

        assert!(adapter.backend().live.is_empty());
        assert!(adapter.needs_init());
    }

    #[test]
    fn failure_paints_message_on_violation_canvas() {
        let mut adapter = ChartAdapter::new(FakeCharts::default());
        adapter.show_failure();

        assert_eq!(
            adapter.backend().messages,
            vec![(VIOLATION_CANVAS.to_string(), FAILURE_TEXT.to_string())]
        );
    }
}
