//! Interaction orchestrator.
//!
//! UI events come in as explicit [`UiEvent`] values. Synchronous effects are
//! applied to the view state and the [`Page`] straight away; anything that
//! needs the network is returned as a [`Command`]. A command is completed
//! with the matching `finish_*` method, either inline through
//! [`Dashboard::perform`] or by a host that awaits the request itself.

use std::rc::Rc;
use std::time::Duration;

use crate::api::{ApiClient, ApiError, Transport};
use crate::charts::{ChartAdapter, ChartBackend};
use crate::config::DashboardConfig;
use crate::form::CheckForm;
use crate::models::{AnalyticsData, CheckResult, CheckStatus, CountryDetail, UpdateRecord};
use crate::notify::{Clock, Notifier, ToastChanges, ToastKind};
use crate::page::{Page, RESULT_CARD};
use crate::render::detail::{render_detail, render_detail_loading};
use crate::render::updates::render_updates_error;
use crate::render::{render_check_result, render_insights, render_updates};
use crate::view::{DetailTicket, MonitorCard, Tab, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    TabClicked(Tab),
    FilterClicked(String),
    KeyPressed(String),
    /// A click that landed on the modal backdrop, outside the dialog.
    BackdropClicked,
    ModalCloseClicked,
    CountryCardClicked(String),
    RefreshUpdatesClicked,
    AdsToggled(bool),
    FormSubmitted(CheckForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InitCharts { after: Duration },
    SubmitCheck(crate::models::CheckRequest),
    LoadCountryDetail(DetailTicket),
    RefreshUpdates,
}

pub struct Dashboard<T: Transport, B: ChartBackend> {
    api: Rc<ApiClient<T>>,
    config: DashboardConfig,
    clock: Rc<dyn Clock>,
    view: ViewState,
    notifier: Notifier,
    charts: ChartAdapter<B>,
    charts_loading: bool,
    page: Page,
}

impl<T: Transport, B: ChartBackend> Dashboard<T, B> {
    pub fn new(
        api: ApiClient<T>,
        charts: B,
        clock: Rc<dyn Clock>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            api: Rc::new(api),
            config,
            clock,
            view: ViewState::new(),
            notifier: Notifier::new(),
            charts: ChartAdapter::new(charts),
            charts_loading: false,
            page: Page::default(),
        }
    }

    /// Shared handle on the API client so hosts can await without holding
    /// a borrow of the dashboard.
    pub fn api(&self) -> Rc<ApiClient<T>> {
        Rc::clone(&self.api)
    }

    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub const fn charts(&self) -> &ChartAdapter<B> {
        &self.charts
    }

    pub fn charts_mut(&mut self) -> &mut ChartAdapter<B> {
        &mut self.charts
    }

    pub fn take_toast_changes(&mut self) -> ToastChanges {
        self.notifier.take_changes()
    }

    pub fn set_monitor_cards(&mut self, cards: Vec<MonitorCard>) {
        self.page.monitor_cards = cards;
    }

    pub fn start(&mut self) {
        if let Some(message) = self.config.welcome_message.clone() {
            let duration = self.config.welcome_duration_ms;
            self.notifier
                .show_for(message, ToastKind::Info, duration, self.clock.now_ms());
        }
    }

    pub fn toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let duration = self.config.toast_duration_ms;
        self.notifier
            .show_for(message, kind, duration, self.clock.now_ms());
    }

    /// Advance toast lifecycles. Returns whether the toast region changed.
    pub fn tick(&mut self) -> bool {
        self.notifier.tick(self.clock.now_ms())
    }

    pub fn handle(&mut self, event: UiEvent) -> Option<Command> {
        match event {
            UiEvent::TabClicked(tab) => {
                if self.view.switch_tab(tab) {
                    return Some(Command::InitCharts {
                        after: self.config.chart_init_delay,
                    });
                }
                None
            }
            UiEvent::FilterClicked(filter) => {
                self.view.set_filter(&filter);
                None
            }
            UiEvent::KeyPressed(key) => {
                if self.view.handle_key(&key) {
                    self.page.set_modal_body(None);
                }
                None
            }
            UiEvent::BackdropClicked | UiEvent::ModalCloseClicked => {
                self.view.close_modal();
                self.page.set_modal_body(None);
                None
            }
            UiEvent::CountryCardClicked(country) => {
                let ticket = self.view.open_modal(&country);
                self.page.set_modal_body(Some(render_detail_loading()));
                Some(Command::LoadCountryDetail(ticket))
            }
            UiEvent::RefreshUpdatesClicked => {
                if self.page.refresh_busy {
                    return None;
                }
                self.page.refresh_busy = true;
                self.notifier.overlay.show("Fetching latest updates...");
                Some(Command::RefreshUpdates)
            }
            UiEvent::AdsToggled(checked) => {
                self.view.set_ad_schedule_visible(checked);
                None
            }
            UiEvent::FormSubmitted(form) => match form.into_request() {
                Ok(request) => {
                    self.notifier.overlay.show("Checking compliance...");
                    Some(Command::SubmitCheck(request))
                }
                Err(err) => {
                    self.toast(err.to_string(), ToastKind::Warning);
                    None
                }
            },
        }
    }

    /// Claim the chart initialization. False when both charts are already
    /// live or a fetch is in flight.
    pub fn begin_chart_init(&mut self) -> bool {
        if self.charts_loading || !self.charts.needs_init() {
            return false;
        }
        self.charts_loading = true;
        true
    }

    pub fn finish_chart_init(&mut self, outcome: Result<AnalyticsData, ApiError>) {
        self.charts_loading = false;
        match outcome {
            Ok(data) => {
                self.charts.draw(&data);
                if let Some(cards) = render_insights(&data.insights) {
                    self.page.set_insights(cards);
                }
            }
            Err(err) => {
                tracing::error!(%err, "failed to load analytics");
                self.charts.show_failure();
            }
        }
    }

    pub fn finish_check(&mut self, outcome: Result<CheckResult, ApiError>) {
        self.notifier.overlay.hide();
        match outcome {
            Ok(result) => {
                let (message, kind) = match result.status {
                    CheckStatus::Pass => ("All compliance checks passed!", ToastKind::Success),
                    CheckStatus::Warning => (
                        "Compliance check completed with warnings",
                        ToastKind::Warning,
                    ),
                    CheckStatus::Fail => ("Compliance violations detected", ToastKind::Error),
                };
                self.toast(message, kind);
                self.page.set_result(render_check_result(&result));
                self.page.request_scroll(RESULT_CARD);
            }
            Err(err) => {
                tracing::error!(%err, "compliance check failed");
                self.toast("An error occurred during checking", ToastKind::Error);
            }
        }
    }

    pub fn finish_country_detail(
        &mut self,
        ticket: &DetailTicket,
        outcome: Result<CountryDetail, ApiError>,
    ) {
        if !self.view.is_current(ticket) {
            tracing::debug!(
                country = %ticket.country,
                generation = ticket.generation,
                "dropping stale country detail response"
            );
            return;
        }
        if let Err(err) = &outcome {
            tracing::warn!(country = %ticket.country, %err, "country detail lookup failed");
        }
        self.page.set_modal_body(Some(render_detail(&outcome)));
    }

    pub fn finish_updates(&mut self, outcome: Result<Vec<UpdateRecord>, ApiError>) {
        self.page.refresh_busy = false;
        self.notifier.overlay.hide();
        match outcome {
            Ok(updates) => {
                tracing::debug!(count = updates.len(), "loaded updates");
                self.page.set_updates(render_updates(&updates));
                self.toast("Updates refreshed successfully", ToastKind::Success);
            }
            Err(err) => {
                tracing::error!(%err, "failed to refresh updates");
                self.page.set_updates(render_updates_error(&err));
                self.toast("Failed to refresh updates", ToastKind::Error);
            }
        }
    }

    /// Run a command to completion. The chart delay is the host's concern
    /// and is not waited for here.
    pub async fn perform(&mut self, command: Command) {
        let api = self.api();
        match command {
            Command::InitCharts { .. } => {
                if self.begin_chart_init() {
                    let outcome = api.fetch_analytics().await;
                    self.finish_chart_init(outcome);
                }
            }
            Command::SubmitCheck(request) => {
                let outcome = api.submit_check(&request).await;
                self.finish_check(outcome);
            }
            Command::LoadCountryDetail(ticket) => {
                let outcome = api.fetch_country_detail(&ticket.country).await;
                self.finish_country_detail(&ticket, outcome);
            }
            Command::RefreshUpdates => {
                let outcome = api.fetch_updates().await;
                self.finish_updates(outcome);
            }
        }
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        if let Some(command) = self.handle(event) {
            self.perform(command).await;
        }
    }
}
