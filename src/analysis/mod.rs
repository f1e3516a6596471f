//! Flight analysis with pure functions
//!
//! Everything in this module works on an already loaded slice of tickets:
//! - no I/O and no shared state, so the same slice can be analyzed repeatedly
//! - nothing here fails; a route without tickets yields an empty map or NaN
//! - origin and destination are matched exactly against the display names

use std::collections::HashMap;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tickets::Ticket;

mod durations;
mod prices;

pub use durations::min_flight_durations_by_carrier;
pub use prices::{average_median_difference, average_price, median_price};

/// Origin and destination display names identifying a route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// All statistics computed for one route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAnalysis {
    pub min_durations: HashMap<String, TimeDelta>,
    pub average_price: f64,
    pub median_price: f64,
    pub price_difference: f64,
}

impl RouteAnalysis {
    /// Whether any ticket matched the route
    pub fn has_data(&self) -> bool {
        !self.min_durations.is_empty()
    }

    /// Carriers with their minimum duration, ordered by carrier id
    pub fn sorted_durations(&self) -> Vec<(&str, TimeDelta)> {
        let mut durations: Vec<_> = self
            .min_durations
            .iter()
            .map(|(carrier, duration)| (carrier.as_str(), *duration))
            .collect();
        durations.sort_by(|a, b| a.0.cmp(b.0));
        durations
    }
}

/// Run every analysis over the tickets of `route`
pub fn analyze_route(tickets: &[Ticket], route: &Route) -> RouteAnalysis {
    let origin = route.origin.as_str();
    let destination = route.destination.as_str();

    let analysis = RouteAnalysis {
        min_durations: min_flight_durations_by_carrier(tickets, origin, destination),
        average_price: average_price(tickets, origin, destination),
        median_price: median_price(tickets, origin, destination),
        price_difference: average_median_difference(tickets, origin, destination),
    };

    debug!(
        "Analyzed {} -> {}: {} carriers, average {}, median {}",
        origin,
        destination,
        analysis.min_durations.len(),
        analysis.average_price,
        analysis.median_price
    );

    analysis
}
