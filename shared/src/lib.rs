use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A single spending record as returned by the backend spendings API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spending {
    pub id: i64,
    /// Amount in the user's display currency (always non-negative)
    pub amount: f64,
    pub category: String,
    pub location: String,
    /// Optional free-form note (max 256 characters)
    pub description: Option<String>,
    /// Calendar date of the spending (YYYY-MM-DD, no time component)
    pub date: String,
}

/// One day cell in the rendered month view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Local calendar date (YYYY-MM-DD)
    pub iso_date: String,
    /// Day number within the month (1-31)
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_selected: bool,
    /// Sum of this day's spendings, if any were recorded
    pub spending_total: Option<f64>,
}

/// One row of the month grid.
///
/// Always exactly 7 cells, Sunday first. `None` is a padding cell
/// before the 1st or after the last day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub cells: Vec<Option<CalendarDay>>,
}

/// A fully laid-out month, ready for a 7-column table renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// Zero-based month (0 = January, 11 = December)
    pub month: u32,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarMonth {
    /// Number of real (non-padding) day cells in the grid.
    pub fn day_count(&self) -> usize {
        self.days().count()
    }

    /// Iterate over the real day cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks
            .iter()
            .flat_map(|week| week.cells.iter())
            .filter_map(|cell| cell.as_ref())
    }
}

/// Which month the calendar is currently showing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarFocusDate {
    pub year: i32,
    /// Zero-based month (0 = January, 11 = December)
    pub month: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month0(),
        }
    }
}

/// Bounds accepted by the calendar calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
        }
    }
}

/// A formatted amount for display, with an optional secondary line
/// showing the original currency when it differs from the display one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedAmount {
    pub primary: String,
    pub secondary: Option<String>,
}
