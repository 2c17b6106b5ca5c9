#![forbid(unsafe_code)]

//! Embed-page binding: report the dashboard's rendered content height
//! to the parent page.
//!
//! The producer contract is one report per meaningful height change;
//! the host applies the latest report it receives and keeps no history.

use framefit_core::{DashboardId, HeightReport};
use wasm_bindgen::prelude::*;

/// Measure the current content height and post it to the parent page.
///
/// `dashboard` must be one of the wire identifiers, e.g.
/// `"industry-outlook"`. No-op when the page is not embedded (no
/// distinct parent window).
#[wasm_bindgen(js_name = postHeightReport)]
pub fn post_height_report(dashboard: &str) -> Result<(), JsValue> {
    let Some(dashboard) = DashboardId::parse(dashboard) else {
        return Err(JsValue::from_str("unknown dashboard identifier"));
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let height = f64::from(body.scroll_height());
    post_report_to_parent(&window, dashboard, height)
}

/// Post an explicit height value, for embeds that measure a specific
/// container rather than the whole body.
#[wasm_bindgen(js_name = postHeightReportPx)]
pub fn post_height_report_px(dashboard: &str, height: f64) -> Result<(), JsValue> {
    let Some(dashboard) = DashboardId::parse(dashboard) else {
        return Err(JsValue::from_str("unknown dashboard identifier"));
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    post_report_to_parent(&window, dashboard, height)
}

fn post_report_to_parent(
    window: &web_sys::Window,
    dashboard: DashboardId,
    height: f64,
) -> Result<(), JsValue> {
    let report = HeightReport::new(dashboard, height)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let Some(parent) = window.parent()? else {
        return Ok(());
    };
    // The host listener stringifies event data, so post a structured
    // object rather than a pre-serialized string.
    let message = js_sys::JSON::parse(&report.to_json_string())?;
    // Dashboards are embedded across origins; the report carries nothing
    // sensitive, so no target-origin restriction.
    parent.post_message(&message, "*")
}
