//! Price statistics over the tickets of one route
//!
//! Every function here returns `f64::NAN` when no ticket matches the route.
//! NaN propagates through the difference, so callers check the result
//! with [`f64::is_nan`] rather than comparing it.

use tracing::trace;

use crate::tickets::Ticket;

fn route_prices<'a>(
    tickets: &'a [Ticket],
    origin: &'a str,
    destination: &'a str,
) -> impl Iterator<Item = f64> + 'a {
    tickets
        .iter()
        .filter(move |t| t.serves(origin, destination))
        .map(|t| t.price)
}

/// Pure: arithmetic mean of the matching ticket prices
pub fn average_price(tickets: &[Ticket], origin: &str, destination: &str) -> f64 {
    let (sum, count) = route_prices(tickets, origin, destination)
        .fold((0.0, 0usize), |(sum, count), price| (sum + price, count + 1));

    if count == 0 {
        return f64::NAN;
    }

    trace!("Average of {} prices", count);
    sum / count as f64
}

/// Calculate median from sorted values
fn calculate_median(sorted_values: &[f64]) -> f64 {
    let len = sorted_values.len();
    if len == 0 {
        f64::NAN
    } else if len.is_multiple_of(2) {
        (sorted_values[len / 2 - 1] + sorted_values[len / 2]) / 2.0
    } else {
        sorted_values[len / 2]
    }
}

/// Pure: median of the matching ticket prices.
///
/// With an even number of prices the two central values are averaged.
pub fn median_price(tickets: &[Ticket], origin: &str, destination: &str) -> f64 {
    let mut prices: Vec<f64> = route_prices(tickets, origin, destination).collect();
    prices.sort_by(f64::total_cmp);

    trace!("Median of {} prices", prices.len());
    calculate_median(&prices)
}

/// Pure: average price minus median price.
///
/// # Examples
///
/// ```
/// use ticket_analyzer::analysis::average_median_difference;
/// use ticket_analyzer::testing::{sample_tickets, TEL_AVIV, VLADIVOSTOK};
///
/// let diff = average_median_difference(&sample_tickets(), VLADIVOSTOK, TEL_AVIV);
/// assert!((diff - 166.666_666).abs() < 1e-3);
///
/// assert!(average_median_difference(&[], VLADIVOSTOK, TEL_AVIV).is_nan());
/// ```
pub fn average_median_difference(tickets: &[Ticket], origin: &str, destination: &str) -> f64 {
    let average = average_price(tickets, origin, destination);
    let median = median_price(tickets, origin, destination);
    average - median
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::testing::{TicketBuilder, TEL_AVIV, VLADIVOSTOK};
    use proptest::prelude::*;

    fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(0.0f64..1_000_000.0, 1..50)
    }

    fn priced(prices: &[f64]) -> Vec<Ticket> {
        prices
            .iter()
            .map(|&p| TicketBuilder::new().price(p).build())
            .collect()
    }

    proptest! {
        #[test]
        fn test_median_within_price_range(prices in arb_prices()) {
            let tickets = priced(&prices);
            let median = median_price(&tickets, VLADIVOSTOK, TEL_AVIV);
            let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            prop_assert!(median >= min && median <= max);
        }

        #[test]
        fn test_statistics_ignore_input_order(prices in arb_prices()) {
            let tickets = priced(&prices);
            let mut reversed = tickets.clone();
            reversed.reverse();

            prop_assert_eq!(
                median_price(&tickets, VLADIVOSTOK, TEL_AVIV),
                median_price(&reversed, VLADIVOSTOK, TEL_AVIV)
            );
            let a = average_price(&tickets, VLADIVOSTOK, TEL_AVIV);
            let b = average_price(&reversed, VLADIVOSTOK, TEL_AVIV);
            prop_assert!((a - b).abs() <= 1e-6 * a.abs().max(1.0));
        }

        #[test]
        fn test_other_route_is_always_nan(prices in arb_prices()) {
            let tickets = priced(&prices);
            prop_assert!(average_price(&tickets, TEL_AVIV, VLADIVOSTOK).is_nan());
            prop_assert!(median_price(&tickets, TEL_AVIV, VLADIVOSTOK).is_nan());
            prop_assert!(average_median_difference(&tickets, TEL_AVIV, VLADIVOSTOK).is_nan());
        }
    }
}
