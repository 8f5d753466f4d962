use serde::Serialize;
use serde_json::json;

use crate::models::CountryLocation;
use crate::templates::{render, MAP_POPUP};

pub const MAP_ELEMENT: &str = "violationMap";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub radius: u32,
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// External map capability (Leaflet in the browser).
pub trait MapBackend {
    fn render(&mut self, element_id: &str, view: &MapView);
}

pub fn marker_color(status: &str) -> &'static str {
    match status {
        "critical" => "red",
        "partial" => "orange",
        _ => "green",
    }
}

pub fn build_map_view(center: (f64, f64), zoom: u8, countries: &[CountryLocation]) -> MapView {
    let markers = countries
        .iter()
        .map(|country| MapMarker {
            lat: country.lat,
            lng: country.lng,
            color: marker_color(&country.status),
            radius: 10,
            popup_html: render(
                MAP_POPUP,
                &json!({ "name": country.name, "status": country.status }),
            ),
        })
        .collect();

    MapView {
        center,
        zoom,
        markers,
    }
}

pub fn render_violation_map<M: MapBackend>(
    backend: &mut M,
    center: (f64, f64),
    zoom: u8,
    countries: &[CountryLocation],
) {
    let view = build_map_view(center, zoom, countries);
    tracing::debug!(markers = view.markers.len(), "rendering violation map");
    backend.render(MAP_ELEMENT, &view);
}
