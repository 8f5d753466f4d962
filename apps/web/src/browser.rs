//! Browser host: mirrors the dashboard into the DOM and wires DOM events.
//!
//! The page calls `showTab`, `filterMonitoring`, `showCountryDetails` and
//! friends from inline handlers; those names are installed on `window` and
//! turned into [`UiEvent`]s. The dashboard lives in an `Rc<RefCell<_>>`.
//! Event handlers borrow it only for the synchronous `handle`/`begin_*`/
//! `finish_*` steps; every `fetch` runs on a cloned [`ApiClient`] handle with
//! no borrow held.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    CanvasRenderingContext2d, Document, Element as DomElement, Event, HtmlCanvasElement,
    HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, Request, RequestInit, RequestMode,
    Response, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::api::{ApiClient, ApiError, HttpResponse, Transport};
use crate::charts::{ChartBackend, ChartConfig};
use crate::config::DashboardConfig;
use crate::dashboard::{Command, Dashboard, UiEvent};
use crate::form::CheckForm;
use crate::map::{render_violation_map, MapBackend, MapView, MAP_ELEMENT};
use crate::models::CountryLocation;
use crate::notify::Clock;
use crate::page;
use crate::view::{filter_matches, MonitorCard, Tab};

type Host = Dashboard<FetchTransport, ChartJs>;
type SharedHost = Rc<RefCell<Host>>;

const TICK_MS: i32 = 100;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
const TOOLTIP_OFFSET: i32 = 15;

/// Start the dashboard on the current page.
pub fn start() -> Result<(), JsValue> {
    init_logging();

    let document = document()?;
    let base = document
        .body()
        .and_then(|body| body.get_attribute("data-api-base"))
        .unwrap_or_default();
    let config = DashboardConfig::default().with_api_base(base);
    tracing::info!(api_base = %config.api_base, "starting dashboard");

    let api = ApiClient::new(FetchTransport, config.api_base.clone());
    let mut dashboard = Dashboard::new(api, ChartJs, Rc::new(BrowserClock), config);
    dashboard.set_monitor_cards(monitor_cards(&document));
    dashboard.start();

    render_map(&document, dashboard.config());

    let host: SharedHost = Rc::new(RefCell::new(dashboard));
    wire_events(&host, &document)?;
    start_ticker(&host)?;
    sync(&host);
    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

// ---------------------------------------------------------------------------
// Logging

/// Panics go to the console with a stack trace; tracing events reach the
/// console through the `log` facade.
fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("console logger already installed"));
    }
}

// ---------------------------------------------------------------------------
// Capabilities

struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// [`Transport`] over `window.fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    async fn send(method: &str, url: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let network = |err: JsValue| ApiError::Network(describe(&err));
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let response: Response = value.dyn_into().map_err(network)?;
        let text = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        Self::send("GET", url, None).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ApiError> {
        Self::send("POST", url, Some(body)).await
    }
}

/// [`ChartBackend`] over the global `Chart` constructor.
#[derive(Debug, Default)]
pub struct ChartJs;

impl ChartJs {
    fn construct(canvas: &DomElement, config: &ChartConfig) -> Result<JsValue, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let constructor: Function = Reflect::get(&window, &JsValue::from_str("Chart"))?.dyn_into()?;
        let config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from)?;
        Reflect::construct(&constructor, &Array::of2(canvas, &config))
    }
}

impl ChartBackend for ChartJs {
    type Handle = JsValue;

    fn draw(&mut self, canvas_id: &str, config: &ChartConfig) -> Option<JsValue> {
        let canvas = document().ok()?.get_element_by_id(canvas_id)?;
        match Self::construct(&canvas, config) {
            Ok(chart) => Some(chart),
            Err(err) => {
                tracing::error!(canvas_id, error = %describe(&err), "failed to create chart");
                None
            }
        }
    }

    fn destroy(&mut self, handle: JsValue) {
        if let Err(err) = call_method(&handle, "destroy", &[]) {
            tracing::warn!(error = %describe(&err), "failed to destroy chart");
        }
    }

    fn paint_message(&mut self, canvas_id: &str, message: &str) {
        let Some(canvas) = document()
            .ok()
            .and_then(|document| document.get_element_by_id(canvas_id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        else {
            return;
        };
        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };
        context.set_font("16px Arial");
        context.set_text_align("center");
        let x = f64::from(canvas.width()) / 2.0;
        let y = f64::from(canvas.height()) / 2.0;
        let _ = context.fill_text(message, x, y);
    }
}

/// [`MapBackend`] over the global Leaflet `L` namespace.
struct Leaflet;

impl Leaflet {
    fn try_render(element_id: &str, view: &MapView) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let leaflet = Reflect::get(&window, &JsValue::from_str("L"))?;
        if leaflet.is_undefined() {
            tracing::debug!("leaflet not loaded, skipping map");
            return Ok(());
        }

        let map = call_method(&leaflet, "map", &[&JsValue::from_str(element_id)])?;
        let center = Array::of2(&view.center.0.into(), &view.center.1.into());
        call_method(&map, "setView", &[&center, &JsValue::from(view.zoom)])?;

        let tile_options = Object::new();
        Reflect::set(&tile_options, &"attribution".into(), &TILE_ATTRIBUTION.into())?;
        let tiles = call_method(
            &leaflet,
            "tileLayer",
            &[&JsValue::from_str(TILE_URL), &tile_options],
        )?;
        call_method(&tiles, "addTo", &[&map])?;

        for marker in &view.markers {
            let options = Object::new();
            Reflect::set(&options, &"radius".into(), &JsValue::from(marker.radius))?;
            Reflect::set(&options, &"color".into(), &marker.color.into())?;
            Reflect::set(&options, &"fillColor".into(), &marker.color.into())?;
            Reflect::set(&options, &"fillOpacity".into(), &JsValue::from(0.7))?;

            let position = Array::of2(&marker.lat.into(), &marker.lng.into());
            let circle = call_method(&leaflet, "circleMarker", &[&position, &options])?;
            let circle = call_method(&circle, "bindPopup", &[&marker.popup_html.as_str().into()])?;
            call_method(&circle, "addTo", &[&map])?;
        }
        Ok(())
    }
}

impl MapBackend for Leaflet {
    fn render(&mut self, element_id: &str, view: &MapView) {
        if let Err(err) = Self::try_render(element_id, view) {
            tracing::warn!(error = %describe(&err), "failed to render violation map");
        }
    }
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let args: Array = args.iter().collect();
    Reflect::apply(&method, target, &args)
}

fn render_map(document: &Document, config: &DashboardConfig) {
    let Some(element) = document.get_element_by_id(MAP_ELEMENT) else {
        return;
    };
    let raw = element.get_attribute("data-countries").unwrap_or_default();
    match serde_json::from_str::<Vec<CountryLocation>>(&raw) {
        Ok(countries) => {
            render_violation_map(&mut Leaflet, config.map_center, config.map_zoom, &countries);
        }
        Err(err) => tracing::warn!(%err, "invalid map data, skipping map"),
    }
}

// ---------------------------------------------------------------------------
// Events

/// String argument of the function an element's inline `onclick` calls.
fn handler_argument(element: &DomElement, function: &str) -> Option<String> {
    let handler = element.get_attribute("onclick")?;
    page::inline_argument(&handler, function).map(ToString::to_string)
}

/// A `data-*` attribute, falling back to the inline handler argument.
fn element_key(element: &DomElement, attribute: &str, function: &str) -> Option<String> {
    element
        .get_attribute(attribute)
        .or_else(|| handler_argument(element, function))
}

fn monitor_cards(document: &Document) -> Vec<MonitorCard> {
    select_all(document, page::MONITOR_CARD)
        .iter()
        .map(|card| MonitorCard {
            country: element_key(card, "data-country", page::SHOW_COUNTRY_DETAILS)
                .unwrap_or_default(),
            status: card.get_attribute("data-status").unwrap_or_default(),
        })
        .collect()
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Install a page function for inline handlers to call.
fn expose(
    window: &Window,
    name: &str,
    handler: impl FnMut(JsValue) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

fn expose_event(
    window: &Window,
    host: &SharedHost,
    name: &str,
    event: impl Fn(Option<String>) -> Option<UiEvent> + 'static,
) -> Result<(), JsValue> {
    let host = Rc::clone(host);
    expose(window, name, move |arg| {
        if let Some(ui_event) = event(arg.as_string()) {
            dispatch(&host, ui_event);
        }
    })
}

fn wire_events(host: &SharedHost, document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    expose_event(&window, host, page::SHOW_TAB, |tab| {
        tab.as_deref().and_then(Tab::parse).map(UiEvent::TabClicked)
    })?;
    expose_event(&window, host, page::FILTER_MONITORING, |filter| {
        filter.map(UiEvent::FilterClicked)
    })?;
    expose_event(&window, host, page::SHOW_COUNTRY_DETAILS, |country| {
        country.map(UiEvent::CountryCardClicked)
    })?;
    expose_event(&window, host, page::CLOSE_COUNTRY_MODAL, |_| {
        Some(UiEvent::ModalCloseClicked)
    })?;
    expose_event(&window, host, page::REFRESH_UPDATES, |_| {
        Some(UiEvent::RefreshUpdatesClicked)
    })?;
    let ads_document = document.clone();
    expose_event(&window, host, page::TOGGLE_AD_SCHEDULE, move |_| {
        Some(UiEvent::AdsToggled(is_checked(&ads_document, page::HAS_ADS)))
    })?;

    let click_host = Rc::clone(host);
    listen(document, "click", move |event| {
        let on_backdrop = event
            .target()
            .and_then(|target| target.dyn_into::<DomElement>().ok())
            .is_some_and(|target| target.id() == page::MODAL);
        if on_backdrop {
            dispatch(&click_host, UiEvent::BackdropClicked);
        }
    })?;

    let key_host = Rc::clone(host);
    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(&key_host, UiEvent::KeyPressed(key.key()));
        }
    })?;

    if let Some(form) = document.get_element_by_id(page::CHECK_FORM) {
        let form_host = Rc::clone(host);
        let form_document = document.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            dispatch(&form_host, UiEvent::FormSubmitted(read_form(&form_document)));
        })?;
    } else {
        tracing::warn!(form = page::CHECK_FORM, "compliance form not found");
    }

    wire_tooltip(document)?;

    let unload_host = Rc::clone(host);
    listen(&window, "pagehide", move |_| {
        unload_host.borrow_mut().charts_mut().destroy_all();
    })?;
    Ok(())
}

fn hovered_link(event: &Event) -> Option<DomElement> {
    let target = event.target()?.dyn_into::<DomElement>().ok()?;
    target
        .class_list()
        .contains(page::UPDATE_LINK)
        .then_some(target)
}

fn create_tooltip(document: &Document) -> Option<HtmlElement> {
    let tooltip: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    tooltip.set_class_name("custom-tooltip");
    let style = tooltip.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("z-index", "9999");
    let _ = style.set_property("max-width", "320px");
    document.body()?.append_child(&tooltip).ok()?;
    Some(tooltip)
}

fn place_tooltip(tooltip: &HtmlElement, event: &Event) {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        let style = tooltip.style();
        let _ = style.set_property("left", &format!("{}px", mouse.page_x() + TOOLTIP_OFFSET));
        let _ = style.set_property("top", &format!("{}px", mouse.page_y() + TOOLTIP_OFFSET));
    }
}

/// Hovering an update link shows its `data-summary` next to the pointer.
fn wire_tooltip(document: &Document) -> Result<(), JsValue> {
    let tooltip: Rc<RefCell<Option<HtmlElement>>> = Rc::default();

    let over_tooltip = Rc::clone(&tooltip);
    let over_document = document.clone();
    listen(document, "mouseover", move |event| {
        let Some(summary) =
            hovered_link(&event).and_then(|link| link.get_attribute("data-summary"))
        else {
            return;
        };
        let mut slot = over_tooltip.borrow_mut();
        if slot.is_none() {
            *slot = create_tooltip(&over_document);
        }
        if let Some(element) = slot.as_ref() {
            element.set_text_content(Some(&summary));
            set_visible(element, true, "block");
            place_tooltip(element, &event);
        }
    })?;

    let move_tooltip = Rc::clone(&tooltip);
    listen(document, "mousemove", move |event| {
        if let Some(element) = move_tooltip.borrow().as_ref() {
            if element.style().get_property_value("display").as_deref() == Ok("block") {
                place_tooltip(element, &event);
            }
        }
    })?;

    listen(document, "mouseout", move |event| {
        if hovered_link(&event).is_some() {
            if let Some(element) = tooltip.borrow().as_ref() {
                set_visible(element, false, "block");
            }
        }
    })
}

fn field_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|element| Reflect::get(&element, &JsValue::from_str("value")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

fn is_checked(document: &Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

fn read_form(document: &Document) -> CheckForm {
    CheckForm {
        country: field_value(document, "country"),
        title: field_value(document, "title"),
        genre: field_value(document, "genre"),
        description: field_value(document, "description"),
        tags: field_value(document, "tags"),
        has_ads: is_checked(document, page::HAS_ADS),
        ad_date: field_value(document, page::AD_DATE),
        ad_time: field_value(document, page::AD_TIME),
    }
}

fn dispatch(host: &SharedHost, event: UiEvent) {
    let command = host.borrow_mut().handle(event);
    sync(host);
    if let Some(command) = command {
        spawn_local(run(Rc::clone(host), command));
    }
}

async fn run(host: SharedHost, command: Command) {
    let api = host.borrow().api();
    match command {
        Command::InitCharts { after } => {
            sleep(after).await;
            if !host.borrow_mut().begin_chart_init() {
                return;
            }
            let outcome = api.fetch_analytics().await;
            host.borrow_mut().finish_chart_init(outcome);
        }
        Command::SubmitCheck(request) => {
            let outcome = api.submit_check(&request).await;
            host.borrow_mut().finish_check(outcome);
        }
        Command::LoadCountryDetail(ticket) => {
            let outcome = api.fetch_country_detail(&ticket.country).await;
            host.borrow_mut().finish_country_detail(&ticket, outcome);
        }
        Command::RefreshUpdates => {
            let outcome = api.fetch_updates().await;
            host.borrow_mut().finish_updates(outcome);
        }
    }
    sync(&host);
}

async fn sleep(duration: Duration) {
    let ms = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

fn start_ticker(host: &SharedHost) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let tick_host = Rc::clone(host);
    let closure = Closure::<dyn FnMut()>::new(move || {
        let mut dashboard = tick_host.borrow_mut();
        if dashboard.tick() {
            if let Ok(document) = document() {
                sync_toasts(&mut dashboard, &document);
            }
        }
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TICK_MS,
    )?;
    closure.forget();
    Ok(())
}

// ---------------------------------------------------------------------------
// DOM sync

fn set_class(element: &DomElement, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn set_visible(element: &DomElement, visible: bool, display: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let value = if visible { display } else { "none" };
        let _ = element.style().set_property("display", value);
    }
}

fn select_all(document: &Document, selector: &str) -> Vec<DomElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<DomElement>().ok())
        .collect()
}

fn sync(host: &SharedHost) {
    let Ok(document) = document() else {
        return;
    };
    let mut dashboard = host.borrow_mut();
    let scroll = dashboard.page_mut().take_scroll_request();
    sync_view(&dashboard, &document);
    sync_page(&mut dashboard, &document);
    sync_toasts(&mut dashboard, &document);

    if let Some(element) = scroll.and_then(|id| document.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn sync_view(dashboard: &Host, document: &Document) {
    let view = dashboard.view();

    for marker in view.tab_markers() {
        if let Some(panel) = document.get_element_by_id(marker.tab.id()) {
            set_class(&panel, "active", marker.active);
        }
    }
    for button in select_all(document, page::TAB_BUTTON) {
        let tab = element_key(&button, "data-tab", page::SHOW_TAB);
        set_class(&button, "active", tab.as_deref() == Some(view.active_tab().id()));
    }

    for button in select_all(document, page::FILTER_BUTTON) {
        let filter = element_key(&button, "data-filter", page::FILTER_MONITORING);
        set_class(&button, "active", filter.as_deref() == Some(view.filter()));
    }
    for card in select_all(document, page::MONITOR_CARD) {
        let status = card.get_attribute("data-status").unwrap_or_default();
        set_visible(&card, filter_matches(view.filter(), &status), "block");
    }

    if let Some(section) = document.get_element_by_id(page::AD_SCHEDULE_SECTION) {
        set_visible(&section, view.ad_schedule_visible(), "block");
    }

    if let Some(modal) = document.get_element_by_id(page::MODAL) {
        set_visible(&modal, view.is_modal_open(), "flex");
    }
    if let (Some(title), Some(text)) = (
        document.get_element_by_id(page::MODAL_TITLE),
        view.modal_title(),
    ) {
        title.set_text_content(Some(&text));
    }
}

/// Rewrite only the regions whose markup changed; flags and the overlay are
/// cheap toggles and always follow the state.
fn sync_page(dashboard: &mut Host, document: &Document) {
    let dirty = dashboard.page_mut().take_dirty();
    let regions = dashboard.page();

    if let (true, Some(result)) = (dirty.result, regions.result()) {
        if let Some(card) = document.get_element_by_id(page::RESULT_CARD) {
            set_visible(&card, true, "block");
        }
        if let Some(content) = document.get_element_by_id(page::RESULT_CONTENT) {
            content.set_inner_html(result);
        }
    }

    if let (true, Some(body)) = (dirty.modal_body, regions.modal_body()) {
        if let Some(element) = document.get_element_by_id(page::MODAL_BODY) {
            element.set_inner_html(body);
        }
    }

    if let (true, Some(updates)) = (dirty.updates, regions.updates()) {
        if let Some(list) = document.get_element_by_id(page::UPDATES_LIST) {
            list.set_inner_html(updates);
        }
    }

    if let (true, Some(insights)) = (dirty.insights, regions.insights()) {
        if let Ok(Some(grid)) = document.query_selector(page::INSIGHTS_GRID) {
            grid.set_inner_html(insights);
        }
    }

    if let Ok(Some(button)) = document.query_selector(page::REFRESH_BUTTON) {
        let _ = if regions.refresh_busy {
            button.set_attribute("disabled", "")
        } else {
            button.remove_attribute("disabled")
        };
        set_class(&button, "loading", regions.refresh_busy);
    }

    if let Some(overlay) = document.get_element_by_id(page::LOADING_OVERLAY) {
        let state = &dashboard.notifier().overlay;
        set_class(&overlay, "active", state.is_active());
        if let Ok(Some(text)) = overlay.query_selector(".loading-text") {
            text.set_text_content(Some(state.message()));
        }
    }
}

/// Patch the toast container: drop expired toasts, start fades, append new
/// ones. Toasts already on screen are left alone.
fn sync_toasts(dashboard: &mut Host, document: &Document) {
    let changes = dashboard.take_toast_changes();
    if changes.is_empty() {
        return;
    }
    let Some(container) = document.get_element_by_id(page::TOAST_CONTAINER) else {
        return;
    };
    let toast = |id| {
        container
            .query_selector(&format!("[data-toast-id=\"{id}\"]"))
            .ok()
            .flatten()
    };

    for id in &changes.removed {
        if let Some(element) = toast(id) {
            element.remove();
        }
    }
    for id in &changes.faded {
        if let Some(element) = toast(id) {
            set_class(&element, "fade-out", true);
        }
    }
    for (_, html) in &changes.added {
        if let Err(err) = container.insert_adjacent_html("beforeend", html) {
            tracing::warn!(error = %describe(&err), "failed to show toast");
        }
    }
}
