//! Rendering of route analysis results
//!
//! The text report is fixed to Russian; the JSON report is meant for
//! scripts and keeps raw values (durations in minutes, NaN as `null`).

use std::collections::BTreeMap;

use chrono::TimeDelta;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::{Route, RouteAnalysis};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the analysis in the requested format
pub fn render(analysis: &RouteAnalysis, route: &Route, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(analysis, route)),
        OutputFormat::Json => render_json(analysis, route),
    }
}

/// Format a duration as days, hours and minutes, e.g. `1 д. 2 ч. 5 м.`
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.unsigned_abs();

    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days} д."));
    }
    if hours > 0 {
        parts.push(format!("{hours} ч."));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(format!("{minutes} м."));
    }

    format!("{sign}{}", parts.join(" "))
}

/// Prices keep a fractional part even when whole, and NaN prints as `NaN`
fn format_price(value: f64) -> String {
    format!("{value:?}")
}

pub fn render_text(analysis: &RouteAnalysis, route: &Route) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Минимальное время полета между городами {} и {} для каждого авиаперевозчика:\n",
        route.origin, route.destination
    ));
    for (carrier, duration) in analysis.sorted_durations() {
        out.push_str(&format!("{} - {}\n", carrier, format_duration(duration)));
    }
    out.push_str(&format!(
        "Разница между средней ценой и медианой для полета между городами {} и {}: {}\n",
        route.origin,
        route.destination,
        format_price(analysis.price_difference)
    ));

    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    origin: &'a str,
    destination: &'a str,
    min_duration_minutes: BTreeMap<&'a str, i64>,
    average_price: Option<f64>,
    median_price: Option<f64>,
    price_difference: Option<f64>,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

pub fn render_json(analysis: &RouteAnalysis, route: &Route) -> Result<String> {
    let report = JsonReport {
        origin: &route.origin,
        destination: &route.destination,
        min_duration_minutes: analysis
            .min_durations
            .iter()
            .map(|(carrier, duration)| (carrier.as_str(), duration.num_minutes()))
            .collect(),
        average_price: finite(analysis.average_price),
        median_price: finite(analysis.median_price),
        price_difference: finite(analysis.price_difference),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
