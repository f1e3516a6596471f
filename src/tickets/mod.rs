//! Ticket records and the JSON ticket source
//!
//! A ticket document is a single object holding a `tickets` array. Each
//! entry is deserialized into an immutable [`Ticket`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

pub mod formats;
pub mod reader;

pub use reader::{load_tickets, parse_tickets, read_tickets};

/// One flight offer as it appears in the ticket document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,
    #[serde(with = "formats::date")]
    pub departure_date: NaiveDate,
    #[serde(with = "formats::time")]
    pub departure_time: NaiveTime,
    #[serde(with = "formats::date")]
    pub arrival_date: NaiveDate,
    #[serde(with = "formats::time")]
    pub arrival_time: NaiveTime,
    pub carrier: String,
    pub stops: u32,
    pub price: f64,
}

impl Ticket {
    pub fn departure_at(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrival_at(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    /// Signed wall-clock time between departure and arrival.
    ///
    /// Negative when the arrival timestamp precedes the departure one.
    pub fn flight_duration(&self) -> TimeDelta {
        self.arrival_at() - self.departure_at()
    }

    /// Exact, case-sensitive match on the origin and destination display names
    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        self.origin_name == origin && self.destination_name == destination
    }
}

/// Top-level shape of a ticket document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketDocument {
    #[serde(default)]
    pub tickets: Option<Vec<Ticket>>,
}
