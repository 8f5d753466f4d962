//! View state: tabs, the country modal, the monitoring filter and the ad
//! schedule toggle. Pure state transitions, no I/O.

use crate::models::display_country;

pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Check,
    Analytics,
    Monitoring,
    Updates,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Check, Self::Analytics, Self::Monitoring, Self::Updates];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Analytics => "analytics",
            Self::Monitoring => "monitoring",
            Self::Updates => "updates",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "check" => Some(Self::Check),
            "analytics" => Some(Self::Analytics),
            "monitoring" => Some(Self::Monitoring),
            "updates" => Some(Self::Updates),
            _ => None,
        }
    }
}

/// Whether a tab's content panel and button carry the `active` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMarker {
    pub tab: Tab,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { country: String, generation: u64 },
}

/// Identifies one detail lookup so a late response can be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub country: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorCard {
    pub country: String,
    pub status: String,
}

pub fn filter_matches(filter: &str, status: &str) -> bool {
    filter == FILTER_ALL || filter == status
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_tab: Tab,
    modal: ModalState,
    modal_generation: u64,
    filter: String,
    ad_schedule_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Check,
            modal: ModalState::Closed,
            modal_generation: 0,
            filter: FILTER_ALL.to_string(),
            ad_schedule_visible: false,
        }
    }

    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns true when the switch activated the analytics tab.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        self.active_tab = tab;
        tab == Tab::Analytics
    }

    pub fn tab_markers(&self) -> Vec<TabMarker> {
        Tab::ALL
            .iter()
            .map(|tab| TabMarker {
                tab: *tab,
                active: *tab == self.active_tab,
            })
            .collect()
    }

    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub const fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    pub fn modal_title(&self) -> Option<String> {
        match &self.modal {
            ModalState::Open { country, .. } => Some(display_country(country)),
            ModalState::Closed => None,
        }
    }

    pub fn open_modal(&mut self, country: &str) -> DetailTicket {
        self.modal_generation += 1;
        self.modal = ModalState::Open {
            country: country.to_string(),
            generation: self.modal_generation,
        };
        DetailTicket {
            country: country.to_string(),
            generation: self.modal_generation,
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// A response may fill the modal only if it answers the latest open.
    pub fn is_current(&self, ticket: &DetailTicket) -> bool {
        matches!(
            &self.modal,
            ModalState::Open { generation, .. } if *generation == ticket.generation
        )
    }

    /// Escape closes the modal. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_modal_open() {
            self.close_modal();
            return true;
        }
        false
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn card_visibility(&self, cards: &[MonitorCard]) -> Vec<bool> {
        cards
            .iter()
            .map(|card| filter_matches(&self.filter, &card.status))
            .collect()
    }

    pub const fn ad_schedule_visible(&self) -> bool {
        self.ad_schedule_visible
    }

    pub fn set_ad_schedule_visible(&mut self, visible: bool) {
        self.ad_schedule_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(status: &str) -> MonitorCard {
        MonitorCard {
            country: "x".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let mut view = ViewState::new();

        for tab in Tab::ALL {
            view.switch_tab(tab);
            let active: Vec<_> = view
                .tab_markers()
                .into_iter()
                .filter(|marker| marker.active)
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].tab, tab);
        }
    }

    #[test]
    fn only_analytics_requests_charts() {
        let mut view = ViewState::new();
        assert!(!view.switch_tab(Tab::Monitoring));
        assert!(view.switch_tab(Tab::Analytics));
        assert!(view.switch_tab(Tab::Analytics));
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.id()), Some(tab));
        }
        assert_eq!(Tab::parse("settings"), None);
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        let mut view = ViewState::new();
        assert!(!view.handle_key("Escape"));

        view.open_modal("south_korea");
        assert_eq!(view.modal_title().as_deref(), Some("south korea"));
        assert!(!view.handle_key("Enter"));
        assert!(view.handle_key("Escape"));
        assert!(!view.is_modal_open());
    }

    #[test]
    fn newer_open_invalidates_older_ticket() {
        let mut view = ViewState::new();
        let first = view.open_modal("germany");
        let second = view.open_modal("japan");

        assert!(!view.is_current(&first));
        assert!(view.is_current(&second));

        view.close_modal();
        assert!(!view.is_current(&second));
    }

    #[test]
    fn filter_matches_exactly_or_all() {
        let mut view = ViewState::new();
        let cards = [card("critical"), card("partial"), card("critical-ish")];

        assert_eq!(view.card_visibility(&cards), vec![true, true, true]);

        view.set_filter("critical");
        assert_eq!(view.card_visibility(&cards), vec![true, false, false]);
        assert_eq!(view.filter(), "critical");
    }
}
