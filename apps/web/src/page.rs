//! The DOM regions the dashboard owns. Hosts mirror these into the document.
//!
//! Region markup is only replaced through the setters, which record what
//! changed so a host can skip regions that are already up to date.

use crate::view::MonitorCard;

pub const RESULT_CARD: &str = "resultCard";
pub const RESULT_CONTENT: &str = "resultContent";
pub const MODAL: &str = "countryModal";
pub const MODAL_TITLE: &str = "modalCountryName";
pub const MODAL_BODY: &str = "modalBody";
pub const UPDATES_LIST: &str = "updatesList";
pub const INSIGHTS_GRID: &str = ".insights-grid";
pub const TOAST_CONTAINER: &str = "toastContainer";
pub const LOADING_OVERLAY: &str = "loadingOverlay";
pub const AD_SCHEDULE_SECTION: &str = "adScheduleSection";
pub const REFRESH_BUTTON: &str = ".refresh-btn";
pub const TAB_BUTTON: &str = ".tab";
pub const TAB_PANEL: &str = ".tab-content";
pub const FILTER_BUTTON: &str = ".filter-btn";
pub const MONITOR_CARD: &str = ".monitor-card";
pub const UPDATE_LINK: &str = "update-link";

pub const CHECK_FORM: &str = "checkForm";
pub const HAS_ADS: &str = "has_ads";
pub const AD_DATE: &str = "ad_date";
pub const AD_TIME: &str = "ad_time";

/// Page functions that inline `onclick`/`onchange` handlers call.
pub const SHOW_TAB: &str = "showTab";
pub const FILTER_MONITORING: &str = "filterMonitoring";
pub const SHOW_COUNTRY_DETAILS: &str = "showCountryDetails";
pub const CLOSE_COUNTRY_MODAL: &str = "closeCountryModal";
pub const REFRESH_UPDATES: &str = "refreshUpdates";
pub const TOGGLE_AD_SCHEDULE: &str = "toggleAdSchedule";

/// First string argument of an inline handler such as
/// `showTab('analytics')`, when the handler calls `function`.
pub fn inline_argument<'a>(handler: &'a str, function: &str) -> Option<&'a str> {
    let args = handler.trim().strip_prefix(function)?.trim_start();
    let args = args.strip_prefix('(')?.trim_start();
    let quote = args.chars().next().filter(|ch| *ch == '\'' || *ch == '"')?;
    let rest = &args[quote.len_utf8()..];
    rest.find(quote).map(|end| &rest[..end])
}

/// Regions whose markup changed since the host last synced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dirty {
    pub result: bool,
    pub modal_body: bool,
    pub updates: bool,
    pub insights: bool,
}

impl Dirty {
    pub const fn any(self) -> bool {
        self.result || self.modal_body || self.updates || self.insights
    }
}

/// `None` means the region still shows what the server rendered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Page {
    result: Option<String>,
    modal_body: Option<String>,
    updates: Option<String>,
    insights: Option<String>,
    pub refresh_busy: bool,
    pub monitor_cards: Vec<MonitorCard>,
    scroll_request: Option<&'static str>,
    dirty: Dirty,
}

fn replace(slot: &mut Option<String>, value: Option<String>, dirty: &mut bool) {
    if *slot != value {
        *slot = value;
        *dirty = true;
    }
}

impl Page {
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn modal_body(&self) -> Option<&str> {
        self.modal_body.as_deref()
    }

    pub fn updates(&self) -> Option<&str> {
        self.updates.as_deref()
    }

    pub fn insights(&self) -> Option<&str> {
        self.insights.as_deref()
    }

    pub fn set_result(&mut self, html: String) {
        replace(&mut self.result, Some(html), &mut self.dirty.result);
    }

    /// `None` once the modal is closed.
    pub fn set_modal_body(&mut self, html: Option<String>) {
        replace(&mut self.modal_body, html, &mut self.dirty.modal_body);
    }

    pub fn set_updates(&mut self, html: String) {
        replace(&mut self.updates, Some(html), &mut self.dirty.updates);
    }

    pub fn set_insights(&mut self, html: String) {
        replace(&mut self.insights, Some(html), &mut self.dirty.insights);
    }

    pub fn take_dirty(&mut self) -> Dirty {
        std::mem::take(&mut self.dirty)
    }

    pub fn request_scroll(&mut self, element_id: &'static str) {
        self.scroll_request = Some(element_id);
    }

    pub fn take_scroll_request(&mut self) -> Option<&'static str> {
        self.scroll_request.take()
    }
}
