//! # Ticket Analyzer
//!
//! Reads a JSON document of flight tickets and, for one origin/destination
//! pair, reports the shortest flight of every carrier and the gap between
//! the average and the median ticket price.
//!
//! ## Usage
//!
//! ```bash
//! ticket-analyzer [-t tickets.json] [--origin "Владивосток"] [--destination "Тель-Авив"]
//! ```
//!
//! ## Modules
//!
//! - `tickets` - Ticket records and the JSON ticket source
//! - `analysis` - Pure flight duration and price statistics
//! - `report` - Text and JSON rendering of analysis results
//! - `config` - Layered configuration for the binary
//! - `error` - Crate error type
//! - `testing` - Ticket builders shared by tests and benchmarks
pub mod analysis;
pub mod config;
pub mod error;
pub mod report;
pub mod tickets;

pub mod testing;

pub use error::{Error, Result};
