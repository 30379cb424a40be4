//! Calendar domain logic for the spending tracker.
//!
//! This module contains all business logic related to month grid
//! construction, date calculations, and month-to-month navigation. The
//! UI only handles presentation concerns; every calendar computation
//! lives here, with today's date and the selected date passed in
//! explicitly so nothing depends on the wall clock.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarConfig, CalendarDay, CalendarFocusDate, CalendarMonth, CalendarWeek};
use std::collections::HashMap;
use thiserror::Error;

/// Errors reported by the calendar calculator.
///
/// Out-of-range input is always rejected, never clamped or wrapped to
/// an adjacent month.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("invalid month {month}: must be between 0 and 11")]
    InvalidMonth { month: u32 },
    #[error("invalid year {year}: must be between {min} and {max}")]
    InvalidYear { year: i32, min: i32, max: i32 },
    #[error("invalid navigation delta {delta}: must be -1 or +1")]
    InvalidDelta { delta: i32 },
    #[error("malformed date string {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),
}

/// Calendar service that handles all month-view business logic.
///
/// Months are zero-based throughout (0 = January, 11 = December),
/// matching the grid structures in `shared`. The service holds no
/// state beyond its year bounds, so it is safe to share freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct CalendarService {
    config: CalendarConfig,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            config: CalendarConfig::default(),
        }
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Check if a year is a leap year (Gregorian rule).
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the number of days in a given month.
    pub fn days_in_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        self.check_bounds(year, month)?;
        Ok(match month {
            1 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        })
    }

    /// Get the weekday of the 1st of the month (0 = Sunday, 6 = Saturday).
    ///
    /// chrono's `NaiveDate` implements the proleptic Gregorian
    /// calendar, so this stays consistent across the whole supported
    /// year range.
    pub fn first_weekday_of_month(&self, year: i32, month: u32) -> Result<u32, CalendarError> {
        self.check_bounds(year, month)?;
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
            .ok_or(CalendarError::InvalidMonth { month })?;
        Ok(first.weekday().num_days_from_sunday())
    }

    /// Build the week table for one month.
    ///
    /// Padding cells (`None`) fill the grid up to the first weekday of
    /// the month and out to a full final week, so every week has
    /// exactly 7 cells, Sunday first. Each real day is annotated with
    /// today/selected marks and its spending total, looked up from the
    /// caller-supplied per-date map.
    pub fn build_month_grid(
        &self,
        year: i32,
        month: u32,
        selected_date: Option<&str>,
        today: &str,
        totals_by_date: &HashMap<String, f64>,
    ) -> Result<CalendarMonth, CalendarError> {
        let first_weekday = self.first_weekday_of_month(year, month)?;
        let days_in_month = self.days_in_month(year, month)?;

        log::debug!(
            "Building month grid for {}-{:02}: {} days, first weekday {}",
            year,
            month + 1,
            days_in_month,
            first_weekday
        );

        let mut cells: Vec<Option<CalendarDay>> = Vec::with_capacity(42);
        for _ in 0..first_weekday {
            cells.push(None);
        }

        for day in 1..=days_in_month {
            let iso_date = format!("{:04}-{:02}-{:02}", year, month + 1, day);
            cells.push(Some(CalendarDay {
                day_of_month: day,
                is_today: iso_date == today,
                is_selected: selected_date == Some(iso_date.as_str()),
                spending_total: totals_by_date.get(&iso_date).copied(),
                iso_date,
            }));
        }

        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        let weeks = cells
            .chunks(7)
            .map(|chunk| CalendarWeek {
                cells: chunk.to_vec(),
            })
            .collect();

        Ok(CalendarMonth { year, month, weeks })
    }

    /// Month arithmetic for the previous month (no bounds check).
    pub fn previous_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 0 {
            (year - 1, 11)
        } else {
            (year, month - 1)
        }
    }

    /// Month arithmetic for the next month (no bounds check).
    pub fn next_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 11 {
            (year + 1, 0)
        } else {
            (year, month + 1)
        }
    }

    /// Move one month backward (`delta` -1) or forward (`delta` +1),
    /// rolling the year across January/December.
    ///
    /// Both the starting month and the result must be within the
    /// supported bounds, so every focus date returned here is a valid
    /// `build_month_grid` input.
    pub fn navigate(
        &self,
        year: i32,
        month: u32,
        delta: i32,
    ) -> Result<CalendarFocusDate, CalendarError> {
        self.check_bounds(year, month)?;
        let (year, month) = match delta {
            -1 => self.previous_month(year, month),
            1 => self.next_month(year, month),
            _ => return Err(CalendarError::InvalidDelta { delta }),
        };
        self.check_bounds(year, month)?;
        Ok(CalendarFocusDate { year, month })
    }

    /// Format a date as YYYY-MM-DD from its calendar components.
    ///
    /// Deliberately built from year/month/day, never from an epoch
    /// offset, so the result can't shift by a day around midnight in
    /// timezones away from UTC.
    pub fn to_iso_date(&self, date: &NaiveDate) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        )
    }

    /// Parse a strict YYYY-MM-DD string into a local calendar date.
    pub fn from_iso_date(&self, value: &str) -> Result<NaiveDate, CalendarError> {
        let malformed = || CalendarError::MalformedDate(value.to_string());

        let parts: Vec<&str> = value.split('-').collect();
        if parts.len() != 3
            || parts[0].len() != 4
            || parts[1].len() != 2
            || parts[2].len() != 2
            || !parts
                .iter()
                .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }

        let year: i32 = parts[0].parse().map_err(|_| malformed())?;
        let month: u32 = parts[1].parse().map_err(|_| malformed())?;
        let day: u32 = parts[2].parse().map_err(|_| malformed())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
    }

    /// Check the calculator against an externally known first weekday,
    /// e.g. "January 1, 2025 is a Wednesday". Used by verification
    /// suites; not a production code path.
    pub fn matches_known_first_weekday(
        &self,
        year: i32,
        month: u32,
        expected: u32,
    ) -> Result<bool, CalendarError> {
        Ok(self.first_weekday_of_month(year, month)? == expected)
    }

    /// Get the human-readable name for a zero-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            0 => "January",
            1 => "February",
            2 => "March",
            3 => "April",
            4 => "May",
            5 => "June",
            6 => "July",
            7 => "August",
            8 => "September",
            9 => "October",
            10 => "November",
            11 => "December",
            _ => "Invalid Month",
        }
    }

    fn check_bounds(&self, year: i32, month: u32) -> Result<(), CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth { month });
        }
        if year < self.config.min_year || year > self.config.max_year {
            return Err(CalendarError::InvalidYear {
                year,
                min: self.config.min_year,
                max: self.config.max_year,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(
        service: &CalendarService,
        year: i32,
        month: u32,
        selected: Option<&str>,
        today: &str,
    ) -> CalendarMonth {
        service
            .build_month_grid(year, month, selected, today, &HashMap::new())
            .unwrap()
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(2025, 0).unwrap(), 31); // January
        assert_eq!(service.days_in_month(2025, 3).unwrap(), 30); // April
        assert_eq!(service.days_in_month(2025, 1).unwrap(), 28); // February (non-leap)
        assert_eq!(service.days_in_month(2024, 1).unwrap(), 29); // February (leap year)
    }

    #[test]
    fn test_february_against_leap_year_reference_table() {
        let service = CalendarService::new();

        for (year, is_leap, feb_days) in [
            (1900, false, 28),
            (2000, true, 29),
            (2024, true, 29),
            (2025, false, 28),
            (2100, false, 28),
        ] {
            assert_eq!(service.is_leap_year(year), is_leap, "year {}", year);
            assert_eq!(service.days_in_month(year, 1).unwrap(), feb_days, "year {}", year);
        }
    }

    #[test]
    fn test_first_weekday_of_month_known_dates() {
        let service = CalendarService::new();

        // 0 = Sunday .. 6 = Saturday, verified against a wall calendar
        for (year, month, expected) in [
            (2025, 0, 3),  // January 1, 2025 is a Wednesday
            (2025, 1, 6),  // February 1, 2025 is a Saturday
            (2025, 7, 5),  // August 1, 2025 is a Friday
            (2024, 0, 1),  // January 1, 2024 was a Monday
            (2024, 11, 0), // December 1, 2024 was a Sunday
        ] {
            assert!(
                service
                    .matches_known_first_weekday(year, month, expected)
                    .unwrap(),
                "{}-{:02} should start on weekday {}",
                year,
                month + 1,
                expected
            );
        }
    }

    #[test]
    fn test_navigation_rolls_the_year() {
        let service = CalendarService::new();

        assert_eq!(
            service.navigate(2025, 0, -1).unwrap(),
            CalendarFocusDate { year: 2024, month: 11 }
        );
        assert_eq!(
            service.navigate(2025, 11, 1).unwrap(),
            CalendarFocusDate { year: 2026, month: 0 }
        );
        assert_eq!(
            service.navigate(2025, 5, 1).unwrap(),
            CalendarFocusDate { year: 2025, month: 6 }
        );
        assert_eq!(
            service.navigate(2025, 5, -1).unwrap(),
            CalendarFocusDate { year: 2025, month: 4 }
        );
    }

    #[test]
    fn test_navigation_rejects_bad_deltas_and_bounds() {
        let service = CalendarService::new();

        assert_eq!(
            service.navigate(2025, 5, 0),
            Err(CalendarError::InvalidDelta { delta: 0 })
        );
        assert_eq!(
            service.navigate(2025, 5, 2),
            Err(CalendarError::InvalidDelta { delta: 2 })
        );

        // Navigating off either end of the supported range fails
        // instead of producing an unbuildable focus date.
        assert!(service.navigate(1900, 0, -1).is_err());
        assert!(service.navigate(2100, 11, 1).is_err());
    }

    #[test]
    fn test_grid_day_count_matches_days_in_month() {
        let service = CalendarService::new();

        for (year, month) in [(1900, 1), (2000, 1), (2024, 1), (2025, 1), (2100, 1), (2025, 7)] {
            let month_grid = grid(&service, year, month, None, "2025-06-15");
            assert_eq!(
                month_grid.day_count() as u32,
                service.days_in_month(year, month).unwrap(),
                "{}-{:02}",
                year,
                month + 1
            );
        }
    }

    #[test]
    fn test_grid_padding_accounting() {
        let service = CalendarService::new();

        for (year, month) in [(2025, 0), (2025, 7), (2024, 1), (2023, 9), (1900, 0), (2100, 11)] {
            let month_grid = grid(&service, year, month, None, "2025-06-15");
            let cells: Vec<&Option<CalendarDay>> = month_grid
                .weeks
                .iter()
                .flat_map(|week| week.cells.iter())
                .collect();

            for week in &month_grid.weeks {
                assert_eq!(week.cells.len(), 7);
            }

            let leading = cells.iter().take_while(|cell| cell.is_none()).count();
            let trailing = cells.iter().rev().take_while(|cell| cell.is_none()).count();
            let days = service.days_in_month(year, month).unwrap();

            assert_eq!(
                leading as u32,
                service.first_weekday_of_month(year, month).unwrap()
            );
            assert_eq!(month_grid.weeks.len() * 7 - leading - trailing, days as usize);

            // First real cell sits at the true first-weekday position.
            assert_eq!(
                cells[leading].as_ref().map(|day| day.day_of_month),
                Some(1)
            );
        }
    }

    #[test]
    fn test_four_week_february() {
        let service = CalendarService::new();

        // February 2015: 28 days starting on a Sunday, the minimal grid.
        let month_grid = grid(&service, 2015, 1, None, "2025-06-15");
        assert_eq!(month_grid.weeks.len(), 4);
        assert_eq!(month_grid.day_count(), 28);
        assert!(month_grid
            .weeks
            .iter()
            .flat_map(|week| week.cells.iter())
            .all(|cell| cell.is_some()));
    }

    #[test]
    fn test_six_week_month() {
        let service = CalendarService::new();

        // August 2025 starts on a Friday with 31 days: 5 + 31 = 36 cells
        // rounds up to six full weeks.
        let month_grid = grid(&service, 2025, 7, None, "2025-06-15");
        assert_eq!(month_grid.weeks.len(), 6);
        assert_eq!(month_grid.day_count(), 31);
    }

    #[test]
    fn test_today_marked_exactly_once_when_in_month() {
        let service = CalendarService::new();

        let month_grid = grid(&service, 2025, 5, None, "2025-06-15");
        let today_cells: Vec<&CalendarDay> =
            month_grid.days().filter(|day| day.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].day_of_month, 15);

        // Today outside the requested month marks nothing.
        let month_grid = grid(&service, 2025, 6, None, "2025-06-15");
        assert_eq!(month_grid.days().filter(|day| day.is_today).count(), 0);
    }

    #[test]
    fn test_selected_date_marking() {
        let service = CalendarService::new();

        let month_grid = grid(&service, 2025, 5, Some("2025-06-10"), "2025-06-15");
        let selected: Vec<&CalendarDay> =
            month_grid.days().filter(|day| day.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].day_of_month, 10);

        let month_grid = grid(&service, 2025, 5, None, "2025-06-15");
        assert_eq!(month_grid.days().filter(|day| day.is_selected).count(), 0);
    }

    #[test]
    fn test_spending_totals_attached_from_lookup() {
        let service = CalendarService::new();

        let mut totals = HashMap::new();
        totals.insert("2025-06-01".to_string(), 12.5);
        totals.insert("2025-06-20".to_string(), 3.0);
        totals.insert("2025-07-01".to_string(), 99.0); // different month, ignored

        let month_grid = service
            .build_month_grid(2025, 5, None, "2025-06-15", &totals)
            .unwrap();

        let by_day: HashMap<u32, Option<f64>> = month_grid
            .days()
            .map(|day| (day.day_of_month, day.spending_total))
            .collect();

        assert_eq!(by_day[&1], Some(12.5));
        assert_eq!(by_day[&20], Some(3.0));
        assert_eq!(by_day[&2], None);
    }

    #[test]
    fn test_build_month_grid_is_deterministic() {
        let service = CalendarService::new();

        let mut totals = HashMap::new();
        totals.insert("2025-06-01".to_string(), 12.5);

        let first = service
            .build_month_grid(2025, 5, Some("2025-06-10"), "2025-06-15", &totals)
            .unwrap();
        let second = service
            .build_month_grid(2025, 5, Some("2025-06-10"), "2025-06-15", &totals)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_input_is_rejected() {
        let service = CalendarService::new();

        assert_eq!(
            service.build_month_grid(2025, 12, None, "2025-06-15", &HashMap::new()),
            Err(CalendarError::InvalidMonth { month: 12 })
        );
        assert!(matches!(
            service.days_in_month(1899, 0),
            Err(CalendarError::InvalidYear { year: 1899, .. })
        ));
        assert!(matches!(
            service.first_weekday_of_month(2101, 0),
            Err(CalendarError::InvalidYear { year: 2101, .. })
        ));
    }

    #[test]
    fn test_custom_bounds() {
        let service = CalendarService::with_config(CalendarConfig {
            min_year: 2020,
            max_year: 2030,
        });

        assert!(service.days_in_month(2025, 0).is_ok());
        assert!(service.days_in_month(2019, 0).is_err());
        assert!(service.navigate(2030, 11, 1).is_err());
    }

    #[test]
    fn test_iso_codec_round_trip() {
        let service = CalendarService::new();

        for value in ["2025-06-15", "2000-02-29", "1900-12-01", "2100-01-31"] {
            let date = service.from_iso_date(value).unwrap();
            assert_eq!(service.to_iso_date(&date), value);
        }
    }

    #[test]
    fn test_from_iso_date_rejects_malformed_strings() {
        let service = CalendarService::new();

        for value in [
            "2025-6-01",
            "2025-13-01",
            "2025-02-30",
            "2025/06/01",
            "2025-06-01T00:00:00",
            "not-a-date",
            "",
        ] {
            assert_eq!(
                service.from_iso_date(value),
                Err(CalendarError::MalformedDate(value.to_string())),
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(0), "January");
        assert_eq!(service.month_name(5), "June");
        assert_eq!(service.month_name(11), "December");
        assert_eq!(service.month_name(12), "Invalid Month");
    }
}
