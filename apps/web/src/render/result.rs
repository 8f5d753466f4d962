use serde::Serialize;

use crate::models::{display_country, CheckResult, Violation};
use crate::templates::{render, CHECK_RESULT};

pub const ALL_CLEAR_CLASS: &str = "all-clear";
pub const VIOLATION_CLASS: &str = "violation-item";

#[derive(Serialize)]
struct ResultView<'a> {
    status: &'static str,
    status_class: String,
    tone: &'static str,
    icon: &'static str,
    country: String,
    title: &'a str,
    genre: &'a str,
    violations: &'a [Violation],
}

/// Render the result card body for a finished check.
///
/// An empty violation list always yields the all-clear panel, even when the
/// status is not `PASS`.
pub fn render_check_result(result: &CheckResult) -> String {
    let view = ResultView {
        status: result.status.as_str(),
        status_class: result.status.css_class(),
        tone: result.status.tone().as_str(),
        icon: result.status.icon(),
        country: display_country(&result.country),
        title: &result.metadata.title,
        genre: &result.metadata.genre,
        violations: &result.violations,
    };
    render(CHECK_RESULT, &view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckStatus, ContentSummary, Severity};

    fn violation(rule: &str, recommendation: Option<&str>) -> Violation {
        Violation {
            rule_id: rule.to_string(),
            severity: Severity::High,
            message: format!("{rule} breached"),
            recommendation: recommendation.map(ToString::to_string),
        }
    }

    fn result(status: CheckStatus, violations: Vec<Violation>) -> CheckResult {
        CheckResult {
            status,
            country: "south_korea".to_string(),
            metadata: ContentSummary {
                title: "Show A".to_string(),
                genre: "drama".to_string(),
            },
            violations,
        }
    }

    fn class_count(html: &str, class: &str) -> usize {
        html.matches(&format!("class=\"{class}\"")).count()
    }

    #[test]
    fn empty_violations_render_all_clear_for_every_status() {
        for status in [CheckStatus::Pass, CheckStatus::Warning, CheckStatus::Fail] {
            let panel = render_check_result(&result(status, vec![]));
            assert_eq!(class_count(&panel, ALL_CLEAR_CLASS), 1, "{status:?}");
            assert_eq!(class_count(&panel, VIOLATION_CLASS), 0);
            assert!(panel.contains(&status.css_class()));
        }
    }

    #[test]
    fn one_card_per_violation_in_input_order() {
        let panel = render_check_result(&result(
            CheckStatus::Fail,
            vec![
                violation("KR-2", None),
                violation("KR-1", Some("Move the ad")),
                violation("KR-3", None),
            ],
        ));

        assert_eq!(class_count(&panel, VIOLATION_CLASS), 3);
        let positions: Vec<_> = ["KR-2", "KR-1", "KR-3"]
            .iter()
            .map(|rule| panel.find(&format!("data-rule=\"{rule}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(class_count(&panel, ALL_CLEAR_CLASS), 0);
    }

    #[test]
    fn recommendation_only_when_present() {
        let panel = render_check_result(&result(
            CheckStatus::Warning,
            vec![violation("A", None), violation("B", Some("Fix it"))],
        ));

        assert_eq!(class_count(&panel, "violation-recommendation"), 1);
        assert!(panel.contains("<div class=\"violation-recommendation\">💡 Fix it</div>"));
        let fix = panel.find("💡").unwrap();
        assert!(panel.find("data-rule=\"B\"").unwrap() < fix);
    }

    #[test]
    fn fail_status_shows_class_and_icon() {
        let panel = render_check_result(&result(
            CheckStatus::Fail,
            vec![violation("A", None), violation("B", None)],
        ));

        assert!(panel.contains("<div class=\"result-status status-FAIL critical\">❌ FAIL</div>"));
        assert!(panel.contains("<strong>Country:</strong> south korea"));
    }

    #[test]
    fn backend_text_is_escaped() {
        let panel = render_check_result(&CheckResult {
            metadata: ContentSummary {
                title: "<img src=x onerror=alert(1)>".to_string(),
                genre: "drama".to_string(),
            },
            ..result(CheckStatus::Pass, vec![])
        });

        assert!(!panel.contains("<img"));
        assert!(panel.contains("&lt;img"));
    }
}
