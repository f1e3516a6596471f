//! Testing utilities shared by unit tests, integration tests and benchmarks

use chrono::{NaiveDate, NaiveTime};

use crate::tickets::Ticket;

pub const VLADIVOSTOK: &str = "Владивосток";
pub const TEL_AVIV: &str = "Тель-Авив";

/// Builder for [`Ticket`] values on the Vladivostok → Tel Aviv route
#[derive(Debug, Clone)]
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new() -> Self {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default();
        Self {
            ticket: Ticket {
                origin: "VVO".to_string(),
                origin_name: VLADIVOSTOK.to_string(),
                destination: "TLV".to_string(),
                destination_name: TEL_AVIV.to_string(),
                departure_date: day,
                departure_time: NaiveTime::MIN,
                arrival_date: day,
                arrival_time: NaiveTime::MIN,
                carrier: "S7".to_string(),
                stops: 0,
                price: 0.0,
            },
        }
    }

    pub fn route(mut self, origin_name: &str, destination_name: &str) -> Self {
        self.ticket.origin_name = origin_name.to_string();
        self.ticket.destination_name = destination_name.to_string();
        self
    }

    /// Departure on 2024-07-01 at `hour:minute`
    pub fn departs(mut self, hour: u32, minute: u32) -> Self {
        self.ticket.departure_time = hm(hour, minute);
        self
    }

    /// Arrival on 2024-07-01 at `hour:minute`
    pub fn arrives(mut self, hour: u32, minute: u32) -> Self {
        self.ticket.arrival_time = hm(hour, minute);
        self
    }

    pub fn arrival_date(mut self, date: NaiveDate) -> Self {
        self.ticket.arrival_date = date;
        self
    }

    pub fn carrier(mut self, carrier: &str) -> Self {
        self.ticket.carrier = carrier.to_string();
        self
    }

    pub fn stops(mut self, stops: u32) -> Self {
        self.ticket.stops = stops;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.ticket.price = price;
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

impl Default for TicketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// The three-ticket sample used throughout the tests:
/// S7 07:00-11:00 for 12400, TK 09:00-12:00 with one stop for 13000,
/// S7 07:00-10:00 for 12300
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new()
            .departs(7, 0)
            .arrives(11, 0)
            .carrier("S7")
            .price(12400.0)
            .build(),
        TicketBuilder::new()
            .departs(9, 0)
            .arrives(12, 0)
            .carrier("TK")
            .stops(1)
            .price(13000.0)
            .build(),
        TicketBuilder::new()
            .departs(7, 0)
            .arrives(10, 0)
            .carrier("S7")
            .price(12300.0)
            .build(),
    ]
}
