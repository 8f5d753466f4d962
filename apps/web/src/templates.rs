//! Handlebars templates behind every HTML fragment the dashboard writes.
//!
//! Templates live in `apps/web/templates/` and are compiled once into a
//! shared registry. Values are HTML-escaped by the registry, so renderers
//! only have to hand over serializable view data.

use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use lazy_static::lazy_static;
use serde::Serialize;

pub const CHECK_RESULT: &str = "check_result";
pub const COUNTRY_DETAIL: &str = "country_detail";
pub const DETAIL_LOADING: &str = "detail_loading";
pub const DETAIL_ERROR: &str = "detail_error";
pub const UPDATES: &str = "updates";
pub const UPDATES_ERROR: &str = "updates_error";
pub const INSIGHTS: &str = "insights";
pub const TOAST: &str = "toast";
pub const MAP_POPUP: &str = "map_popup";

const SOURCES: &[(&str, &str)] = &[
    (CHECK_RESULT, include_str!("../templates/check_result.hbs")),
    (COUNTRY_DETAIL, include_str!("../templates/country_detail.hbs")),
    (DETAIL_LOADING, include_str!("../templates/detail_loading.hbs")),
    (DETAIL_ERROR, include_str!("../templates/detail_error.hbs")),
    (UPDATES, include_str!("../templates/updates.hbs")),
    (UPDATES_ERROR, include_str!("../templates/updates_error.hbs")),
    (INSIGHTS, include_str!("../templates/insights.hbs")),
    (TOAST, include_str!("../templates/toast.hbs")),
    (MAP_POPUP, include_str!("../templates/map_popup.hbs")),
];

lazy_static! {
    static ref REGISTRY: Handlebars<'static> = registry();
}

fn registry() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(false);
    handlebars.register_helper("upper", Box::new(UpperHelper));

    for (name, source) in SOURCES {
        if let Err(err) = handlebars.register_template_string(name, source) {
            tracing::error!(template = name, %err, "template failed to compile");
        }
    }
    handlebars
}

/// Render a named template. A failure is logged and yields an empty
/// fragment so the region keeps whatever it showed before.
pub fn render<T: Serialize>(name: &str, data: &T) -> String {
    match REGISTRY.render(name, data) {
        Ok(html) => html.trim().to_string(),
        Err(err) => {
            tracing::error!(template = name, %err, "template failed to render");
            String::new()
        }
    }
}

/// Upper-case a string parameter (`low` -> `LOW`).
struct UpperHelper;

impl HelperDef for UpperHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h
            .param(0)
            .and_then(|value| value.value().as_str())
            .unwrap_or_default();
        out.write(&html_escape(&text.to_uppercase()))?;
        Ok(())
    }
}
