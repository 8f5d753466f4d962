use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Overall verdict of a compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARNING",
            Self::Fail => "FAIL",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Warning => "⚠️",
            Self::Fail => "❌",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Pass => Tone::Success,
            Self::Warning => Tone::Warning,
            Self::Fail => Tone::Critical,
        }
    }

    pub fn css_class(self) -> String {
        format!("status-{}", self.as_str())
    }
}

/// Visual weight shared by statuses, metrics and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Critical,
}

impl Tone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Violation severity. The backend sends upper-case names but any other
/// string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub title: String,
    pub genre: String,
    pub description: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSchedule {
    pub scheduled_time: String,
}

/// Body of `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub country: String,
    pub content_metadata: ContentMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_schedule: Option<AdSchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub country: String,
    #[serde(default)]
    pub metadata: ContentSummary,
    #[serde(default)]
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    #[serde(default)]
    pub total_checks: u64,
    #[serde(default)]
    pub passed_checks: u64,
    #[serde(default)]
    pub violations: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub compliance_rate: f64,
    #[serde(default)]
    pub critical_issues: Vec<Issue>,
    #[serde(default)]
    pub warnings: Vec<Issue>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    #[serde(default)]
    pub compliance: ComplianceSummary,
    #[serde(default)]
    pub recent_updates: Vec<UpdateRecord>,
    #[serde(default)]
    pub update_count: u64,
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
}

/// Confidence the monitor attaches to an update. Known levels match in any
/// case; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Other(String),
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for Confidence {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Other(value),
        }
    }
}

impl From<Confidence> for String {
    fn from(value: Confidence) -> Self {
        value.as_str().to_string()
    }
}

/// One regulatory change picked up by the monitoring sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub source: String,
    #[serde(default)]
    pub country: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `GET /api/updates` once the error field has been ruled out.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatesEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub updates: Vec<UpdateRecord>,
}

/// Label → count pairs in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series(pub Vec<(String, f64)>);

impl Series {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|(_, value)| *value).collect()
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = Series;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of label to count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, f64>()? {
                    entries.push((label, value));
                }
                Ok(Series(entries))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Series::default())
            }
        }

        deserializer.deserialize_any(SeriesVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsightValue {
    Number(f64),
    Text(String),
}

impl InsightValue {
    /// Zero and whitespace-only text count as blank and are not shown.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(value) => value.abs() < f64::EPSILON,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for InsightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<InsightValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    #[serde(default)]
    pub violations_by_country: Series,
    #[serde(default)]
    pub distribution_by_category: Series,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

/// A country pinned on the violation map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub status: String,
}

/// Country ids arrive as `south_korea`; the UI shows `south korea`.
pub fn display_country(id: &str) -> String {
    id.replace('_', " ")
}
