//! Handlers for the picker listings: `years` and `months`.

use serde_json::{json, Value};
use tabled::{Table, Tabled};
use tracing::debug;

use super::command::MonthsArgs;
use super::context::{self, Context};
use super::output;
use crate::domain::DateRangeSelector;
use crate::error::{Error, Result};

/// Shown in place of an AD span the calendar table cannot resolve.
const UNAVAILABLE: &str = "unavailable";

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Month")]
    name: &'static str,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "From (AD)")]
    from: String,
    #[tabled(rename = "To (AD)")]
    to: String,
    #[tabled(skip)]
    available: bool,
}

/// List the BS years a year picker offers today.
pub fn years(ctx: &Context, today: Option<&str>) -> Result<()> {
    let today = context::today(today)?;
    let current = ctx.picker.current(today)?;
    let years = ctx.picker.years(today)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "years",
            "today": today.to_string(),
            "current": current.to_string(),
            "years": years,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        for year in &years {
            output::value(year);
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Today", format!("{today} AD / {current} BS"));
    if years.is_empty() {
        output::warning(&format!(
            "no selectable years: today is before BS {}",
            ctx.picker.first_year()
        ));
        return Ok(());
    }
    output::section("Selectable years");
    for year in &years {
        if *year == current.year() {
            output::lines(&format!("{} (current)", output::highlight(year)));
        } else {
            output::lines(&year.to_string());
        }
    }
    Ok(())
}

/// List the months of a BS year with their lengths and AD spans.
pub fn months(ctx: &Context, args: &MonthsArgs) -> Result<()> {
    let today = context::today(args.today.today.as_deref())?;
    let year = match args.year {
        Some(year) => year,
        None => ctx.picker.current(today)?.year(),
    };

    let mut rows = Vec::with_capacity(12);
    for month in ctx.picker.months() {
        let days = ctx.calendar.days_in_month(year, month.number())?;
        let span = match ctx
            .resolver
            .resolve(&DateRangeSelector::monthly_bs(year, month.number()), today)
        {
            Ok(range) => Some((range.from_iso(), range.to_iso())),
            // Chaitra of the last table year: its end needs the next year's Baishakh.
            Err(Error::Conversion(err)) => {
                debug!(year, month = month.number(), error = %err, "month span unavailable");
                None
            }
            Err(err) => return Err(err),
        };
        let available = span.is_some();
        let (from, to) =
            span.unwrap_or_else(|| (UNAVAILABLE.to_string(), UNAVAILABLE.to_string()));
        rows.push(MonthRow {
            number: month.number(),
            name: month.label(),
            days,
            from,
            to,
            available,
        });
    }

    if output::is_json() {
        let months: Vec<_> = rows
            .iter()
            .map(|row| {
                let (from, to) = if row.available {
                    (Value::from(row.from.as_str()), Value::from(row.to.as_str()))
                } else {
                    (Value::Null, Value::Null)
                };
                json!({
                    "month": row.number,
                    "name": row.name,
                    "days": row.days,
                    "from": from,
                    "to": to,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "months",
            "year": year,
            "months": months,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        for row in &rows {
            output::value(format!("{} {} {}", row.name, row.from, row.to));
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("BS {year}"));
    let total: u32 = rows.iter().map(|row| row.days).sum();
    let rows_unavailable = rows.iter().filter(|row| !row.available).count();
    output::lines(&Table::new(rows).to_string());
    output::field("Total days", total);
    if rows_unavailable > 0 {
        output::hint("months marked unavailable end past the calendar table");
    }
    Ok(())
}
