//! Minimum flight duration per carrier

use std::collections::HashMap;

use chrono::TimeDelta;
use tracing::trace;

use crate::tickets::Ticket;

/// Pure: shortest flight duration of each carrier on the given route.
///
/// Durations are signed; a ticket whose arrival precedes its departure
/// yields a negative duration, which compares below every positive one.
/// Carriers with no matching ticket are absent, so a route without
/// tickets produces an empty map.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use ticket_analyzer::analysis::min_flight_durations_by_carrier;
/// use ticket_analyzer::testing::{sample_tickets, TEL_AVIV, VLADIVOSTOK};
///
/// let durations = min_flight_durations_by_carrier(&sample_tickets(), VLADIVOSTOK, TEL_AVIV);
/// assert_eq!(durations["S7"], TimeDelta::hours(3));
/// assert_eq!(durations["TK"], TimeDelta::hours(3));
/// ```
pub fn min_flight_durations_by_carrier(
    tickets: &[Ticket],
    origin: &str,
    destination: &str,
) -> HashMap<String, TimeDelta> {
    let mut durations: HashMap<String, TimeDelta> = HashMap::new();

    for ticket in tickets.iter().filter(|t| t.serves(origin, destination)) {
        let duration = ticket.flight_duration();
        trace!("{} flight duration: {}", ticket.carrier, duration);

        durations
            .entry(ticket.carrier.clone())
            .and_modify(|best| {
                if duration < *best {
                    *best = duration;
                }
            })
            .or_insert(duration);
    }

    durations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_tickets, TicketBuilder, TEL_AVIV, VLADIVOSTOK};
    use chrono::NaiveDate;

    #[test]
    fn test_min_duration_per_carrier() {
        let result = min_flight_durations_by_carrier(&sample_tickets(), VLADIVOSTOK, TEL_AVIV);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("S7"), Some(&TimeDelta::hours(3)));
        assert_eq!(result.get("TK"), Some(&TimeDelta::hours(3)));
    }

    #[test]
    fn test_non_matching_route_is_empty() {
        let result = min_flight_durations_by_carrier(&sample_tickets(), "Wrong1", "Wrong2");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(min_flight_durations_by_carrier(&[], VLADIVOSTOK, TEL_AVIV).is_empty());
    }

    #[test]
    fn test_reverse_direction_is_not_matched() {
        let result = min_flight_durations_by_carrier(&sample_tickets(), TEL_AVIV, VLADIVOSTOK);
        assert!(result.is_empty());
    }

    #[test]
    fn test_other_routes_are_ignored() {
        let mut tickets = sample_tickets();
        tickets.push(
            TicketBuilder::new()
                .route("Уфа", "Ларнака")
                .departs(7, 0)
                .arrives(7, 30)
                .carrier("SU")
                .build(),
        );
        tickets.push(
            TicketBuilder::new()
                .route(VLADIVOSTOK, "Ларнака")
                .departs(7, 0)
                .arrives(7, 30)
                .carrier("S7")
                .build(),
        );

        let result = min_flight_durations_by_carrier(&tickets, VLADIVOSTOK, TEL_AVIV);
        assert!(!result.contains_key("SU"));
        assert_eq!(result["S7"], TimeDelta::hours(3));
    }

    #[test]
    fn test_overnight_flight() {
        let tickets = vec![TicketBuilder::new()
            .departs(22, 15)
            .arrival_date(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap())
            .arrives(5, 0)
            .carrier("SU")
            .build()];

        let result = min_flight_durations_by_carrier(&tickets, VLADIVOSTOK, TEL_AVIV);
        assert_eq!(result["SU"], TimeDelta::minutes(6 * 60 + 45));
    }

    #[test]
    fn test_negative_duration_wins_minimum() {
        let mut tickets = sample_tickets();
        tickets.push(
            TicketBuilder::new()
                .departs(12, 0)
                .arrives(10, 0)
                .carrier("TK")
                .build(),
        );

        let result = min_flight_durations_by_carrier(&tickets, VLADIVOSTOK, TEL_AVIV);
        assert_eq!(result["TK"], TimeDelta::hours(-2));
        assert_eq!(result["S7"], TimeDelta::hours(3));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let tickets = sample_tickets();
        let first = min_flight_durations_by_carrier(&tickets, VLADIVOSTOK, TEL_AVIV);
        let second = min_flight_durations_by_carrier(&tickets, VLADIVOSTOK, TEL_AVIV);
        assert_eq!(first, second);
    }
}
