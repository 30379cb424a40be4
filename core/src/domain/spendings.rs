//! Spending aggregation for the month view.
//!
//! The calendar renders one total badge per day, and the panel under it
//! lists the selected day's spendings. Both views are derived here from
//! the spending records the caller already fetched; nothing is loaded
//! from the backend in this module.

use shared::Spending;
use std::collections::HashMap;

/// Stateless aggregation helpers over fetched spending records.
#[derive(Debug, Clone, Default)]
pub struct SpendingService;

impl SpendingService {
    pub fn new() -> Self {
        Self
    }

    /// Sum spending amounts per calendar date.
    ///
    /// The result keys are the records' YYYY-MM-DD dates, which is
    /// exactly the lookup `CalendarService::build_month_grid` expects.
    pub fn totals_by_date(&self, spendings: &[Spending]) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();
        for spending in spendings {
            *totals.entry(spending.date.clone()).or_insert(0.0) += spending.amount;
        }
        totals
    }

    /// All spendings recorded on one date, in input order.
    pub fn spendings_on<'a>(&self, spendings: &'a [Spending], date: &str) -> Vec<&'a Spending> {
        spendings
            .iter()
            .filter(|spending| spending.date == date)
            .collect()
    }

    /// Total spent on one date (0.0 when nothing was recorded).
    pub fn total_on(&self, spendings: &[Spending], date: &str) -> f64 {
        self.spendings_on(spendings, date)
            .iter()
            .map(|spending| spending.amount)
            .sum()
    }
}
