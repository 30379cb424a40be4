//! # Domain Module
//!
//! Business logic for the spending tracker's month view.
//!
//! ## Module Organization
//!
//! - **calendar**: Month grid generation, navigation, and the local-date codec
//! - **spendings**: Per-day spending totals and selected-day lookups
//! - **currency**: Currency display metadata and amount formatting
//!
//! All services are stateless: callers pass in today's date, the
//! selected date, and the already-fetched spending records, and get a
//! freshly computed value back. Nothing here touches the clock, the
//! network, or any shared mutable state.

pub mod calendar;
pub mod currency;
pub mod spendings;

pub use calendar::*;
pub use currency::*;
pub use spendings::*;
