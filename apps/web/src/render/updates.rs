use serde::Serialize;
use serde_json::json;

use crate::api::ApiError;
use crate::models::UpdateRecord;
use crate::templates::{render, UPDATES, UPDATES_ERROR};

pub const UPDATE_CLASS: &str = "update-item";
pub const EMPTY_STATE_CLASS: &str = "empty-state";

/// `under_review` → `status-under-review`.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.replace('_', "-"))
}

/// `under_review` → `Under Review`; every word gets an upper-case initial.
pub fn status_label(status: &str) -> String {
    let spaced = status.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut in_word = false;
    for ch in spaced.chars() {
        let is_word = ch.is_alphanumeric();
        if is_word && !in_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

#[derive(Serialize)]
struct StatusBadge {
    class: String,
    label: String,
}

#[derive(Serialize)]
struct UpdateView<'a> {
    #[serde(flatten)]
    record: &'a UpdateRecord,
    badge: Option<StatusBadge>,
}

/// Markup for the updates list, or the placeholder when there are none.
pub fn render_updates(updates: &[UpdateRecord]) -> String {
    let updates: Vec<_> = updates
        .iter()
        .map(|record| UpdateView {
            record,
            badge: record.status.as_deref().map(|status| StatusBadge {
                class: status_class(status),
                label: status_label(status),
            }),
        })
        .collect();
    render(UPDATES, &json!({ "updates": updates }))
}

pub fn render_updates_error(err: &ApiError) -> String {
    render(UPDATES_ERROR, &json!({ "message": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    fn record(title: &str) -> UpdateRecord {
        UpdateRecord {
            source: "BfDI".to_string(),
            country: "germany".to_string(),
            date: "2025-02-03".to_string(),
            time: None,
            title: title.to_string(),
            summary: "summary".to_string(),
            confidence: None,
            status: None,
            url: None,
        }
    }

    fn class_count(html: &str, class: &str) -> usize {
        html.matches(&format!("class=\"{class}\"")).count()
    }

    #[test]
    fn empty_input_renders_only_the_placeholder() {
        let list = render_updates(&[]);

        assert_eq!(class_count(&list, EMPTY_STATE_CLASS), 1);
        assert_eq!(class_count(&list, UPDATE_CLASS), 0);
        assert!(list.contains("No recent regulatory updates available."));
    }

    #[test]
    fn one_entry_per_record_in_order() {
        let list = render_updates(&[record("b"), record("a"), record("c")]);

        assert_eq!(class_count(&list, UPDATE_CLASS), 3);
        let positions: Vec<_> = ["b", "a", "c"]
            .iter()
            .map(|title| {
                list.find(&format!("<h3 class=\"update-title\">{title}</h3>"))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(class_count(&list, EMPTY_STATE_CLASS), 0);
    }

    #[test]
    fn optional_parts_render_only_when_present() {
        let bare = render_updates(&[record("bare")]);
        for class in ["confidence-badge", "status-badge", "update-time", "update-link"] {
            assert!(!bare.contains(class), "{class}");
        }

        let full = UpdateRecord {
            time: Some("09:30".to_string()),
            confidence: Some(Confidence::Medium),
            status: Some("under_review".to_string()),
            url: Some("https://example.org/notice".to_string()),
            ..record("full")
        };
        let item = render_updates(&[full]);

        assert!(item.contains(
            "<span class=\"confidence-badge confidence-medium\">MEDIUM</span>"
        ));
        assert!(item.contains(
            "<span class=\"status-badge status-under-review\">Under Review</span>"
        ));
        assert!(item.contains("<span class=\"update-time\">09:30</span>"));
        assert!(item.contains("href=\"https://example.org/notice\""));
    }

    #[test]
    fn link_carries_summary_for_the_hover_tooltip() {
        let item = render_updates(&[UpdateRecord {
            summary: "Ads <b>banned</b> before 10pm".to_string(),
            url: Some("https://example.org".to_string()),
            ..record("tooltip")
        }]);

        assert!(item.contains("data-summary=\"Ads &lt;b&gt;banned&lt;/b&gt; before 10pm\""));
    }

    #[test]
    fn unknown_confidence_is_shown_verbatim() {
        let item = render_updates(&[UpdateRecord {
            confidence: Some(Confidence::Other("tentative".to_string())),
            ..record("odd")
        }]);

        assert!(item.contains(
            "<span class=\"confidence-badge confidence-tentative\">TENTATIVE</span>"
        ));
    }

    #[test]
    fn status_label_capitalizes_each_word() {
        assert_eq!(status_label("in_effect"), "In Effect");
        assert_eq!(status_label("pending-review"), "Pending-Review");
        assert_eq!(status_label("draft"), "Draft");
        assert_eq!(status_class("in_effect_now"), "status-in-effect-now");
    }

    #[test]
    fn error_block_carries_the_message() {
        let block = render_updates_error(&ApiError::Server("database locked".to_string()));
        assert!(block.starts_with("<div class=\"error\">"));
        assert!(block.contains("Failed to refresh updates: database locked"));
        assert!(block.contains("Please try again later."));
    }
}
