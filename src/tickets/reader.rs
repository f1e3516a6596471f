//! Reading ticket documents from disk

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{Ticket, TicketDocument};
use crate::error::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse a ticket document from its JSON text.
///
/// A document without a `tickets` field (or with `tickets: null`) is
/// reported as [`Error::MissingTickets`]; an empty array is a valid,
/// empty result.
pub fn parse_tickets(content: &str) -> Result<Vec<Ticket>> {
    let content = content.trim_start_matches(BYTE_ORDER_MARK);
    let document: TicketDocument = serde_json::from_str(content)?;
    document.tickets.ok_or(Error::MissingTickets)
}

/// Read and parse the ticket document at `path`
pub fn read_tickets(path: impl AsRef<Path>) -> Result<Vec<Ticket>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let tickets = parse_tickets(&content)?;
    debug!("Read {} tickets from {}", tickets.len(), path.display());
    Ok(tickets)
}

/// Read tickets, collapsing every failure into `None`.
///
/// The failure is logged so the caller only has to report that no data
/// is available.
pub fn load_tickets(path: impl AsRef<Path>) -> Option<Vec<Ticket>> {
    let path = path.as_ref();
    read_tickets(path)
        .inspect_err(|e| warn!("Could not read tickets from {}: {}", path.display(), e))
        .ok()
}
