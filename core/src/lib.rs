//! Domain layer for the spending tracker.
//!
//! Everything here is pure, synchronous computation: the calendar month
//! grid, per-day spending aggregation, and currency display formatting.
//! Persistence, authentication and exchange-rate conversion live behind
//! the backend REST API and are not modeled in this crate.

pub mod domain;

pub use domain::calendar::{CalendarError, CalendarService};
