use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};
use spending_tracker_core::CalendarService;
use tracing::{info, Level};

/// Render a month grid to the terminal, or as JSON with `--json`.
///
/// Usage: `spending-tracker-core [--json] [YEAR MONTH]` (1-based month;
/// defaults to the current local month).
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = if let Some(position) = args.iter().position(|arg| arg == "--json") {
        args.remove(position);
        true
    } else {
        false
    };

    let now = Local::now();
    let today = format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day());

    let (year, month) = match args.as_slice() {
        [] => (now.year(), now.month0()),
        [year, month] => {
            let year: i32 = year.parse().context("YEAR must be a number")?;
            let month: u32 = month.parse().context("MONTH must be a number")?;
            if !(1..=12).contains(&month) {
                bail!("MONTH must be between 1 and 12");
            }
            (year, month - 1)
        }
        _ => bail!("usage: spending-tracker-core [--json] [YEAR MONTH]"),
    };

    let service = CalendarService::new();
    let grid = service.build_month_grid(year, month, None, &today, &HashMap::new())?;

    info!("Rendering {} {}", service.month_name(month), year);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!("{} {}", service.month_name(month), year);
    println!("Sun Mon Tue Wed Thu Fri Sat");
    for week in &grid.weeks {
        let row: Vec<String> = week
            .cells
            .iter()
            .map(|cell| match cell {
                Some(day) if day.is_today => format!("{:>2}*", day.day_of_month),
                Some(day) => format!("{:>3}", day.day_of_month),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", row.join(" "));
    }

    Ok(())
}
