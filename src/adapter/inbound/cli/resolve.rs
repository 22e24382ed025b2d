//! Handler for the `resolve` command.

use chrono::{Datelike, NaiveDate};
use serde_json::json;
use tracing::debug;

use super::command::RangeArgs;
use super::context::{self, Context};
use super::output;
use crate::application::describe;
use crate::domain::calendar::BsMonth;
use crate::domain::{CalendarSystem, DateRangeSelector, RangeKind};
use crate::error::{Error, Result};

/// Execute the resolve command.
pub fn execute(ctx: &Context, args: &RangeArgs) -> Result<()> {
    let today = context::today(args.today.as_deref())?;
    let selector = build_selector(ctx, args, today)?;
    let range = ctx.resolver.resolve(&selector, today)?;
    let label = describe(&selector, &range);

    if output::is_json() {
        output::json_output(json!({
            "command": "resolve",
            "range": selector.kind().label(),
            "label": label,
            "today": today.to_string(),
            "from": range.from_iso(),
            "to": range.to_iso(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(format!("{} {}", range.from_iso(), range.to_iso()));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Range", &label);
    output::field("From", output::highlight(range.from_iso()));
    output::field("To", output::highlight(range.to_iso()));
    if output::verbosity() > 0 {
        output::field("Days", range.len_days());
        output::field("Today", today);
    }
    Ok(())
}

/// Turn CLI range arguments into a selector.
///
/// Missing Monthly parameters default to the current month in the chosen
/// calendar. Missing Custom bounds are passed on as empty strings so they
/// fail resolution like any other malformed input.
pub fn build_selector(ctx: &Context, args: &RangeArgs, today: NaiveDate) -> Result<DateRangeSelector> {
    let kind = match &args.range {
        Some(raw) => raw.parse::<RangeKind>()?,
        None => ctx.config.default_selector()?.kind(),
    };
    let calendar = if args.ad {
        CalendarSystem::Ad
    } else {
        CalendarSystem::Bs
    };

    let selector = match kind {
        RangeKind::Monthly => {
            let (year, month) = match calendar {
                CalendarSystem::Bs => {
                    let current = ctx.picker.current(today)?;
                    let month = match args.month.as_deref() {
                        Some(raw) => raw.parse::<BsMonth>()?.number(),
                        None => current.month(),
                    };
                    (args.year.unwrap_or(current.year()), month)
                }
                CalendarSystem::Ad => {
                    let month = match args.month.as_deref() {
                        Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                            Error::invalid_format(raw, "AD month must be a number from 1 to 12")
                        })?,
                        None => today.month(),
                    };
                    (args.year.unwrap_or(today.year()), month)
                }
            };
            match calendar {
                CalendarSystem::Bs => DateRangeSelector::monthly_bs(year, month),
                CalendarSystem::Ad => DateRangeSelector::monthly_ad(year, month),
            }
        }
        RangeKind::Custom => {
            let from = args.from.clone().unwrap_or_default();
            let to = args.to.clone().unwrap_or_default();
            match calendar {
                CalendarSystem::Bs => DateRangeSelector::custom_bs(from, to),
                CalendarSystem::Ad => DateRangeSelector::custom_ad(from, to),
            }
        }
        other => DateRangeSelector::try_from(other)?,
    };

    debug!(?selector, "built selector from arguments");
    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    fn ctx() -> Context {
        Context::new(Config::default())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn missing_range_uses_configured_default() {
        let selector = build_selector(&ctx(), &RangeArgs::default(), today()).unwrap();
        assert_eq!(selector, DateRangeSelector::Today);
    }

    #[test]
    fn monthly_defaults_to_current_bs_month() {
        let args = RangeArgs {
            range: Some("Monthly".into()),
            ..RangeArgs::default()
        };
        let selector = build_selector(&ctx(), &args, today()).unwrap();
        assert_eq!(selector, DateRangeSelector::monthly_bs(2082, 2));
    }

    #[test]
    fn monthly_accepts_month_names() {
        let args = RangeArgs {
            range: Some("monthly".into()),
            year: Some(2082),
            month: Some("Chaitra".into()),
            ..RangeArgs::default()
        };
        let selector = build_selector(&ctx(), &args, today()).unwrap();
        assert_eq!(selector, DateRangeSelector::monthly_bs(2082, 12));
    }

    #[test]
    fn monthly_ad_uses_gregorian_today() {
        let args = RangeArgs {
            range: Some("monthly".into()),
            ad: true,
            ..RangeArgs::default()
        };
        let selector = build_selector(&ctx(), &args, today()).unwrap();
        assert_eq!(selector, DateRangeSelector::monthly_ad(2025, 6));
    }

    #[test]
    fn custom_without_bounds_fails_on_resolution() {
        let ctx = ctx();
        let args = RangeArgs {
            range: Some("custom".into()),
            ..RangeArgs::default()
        };
        let selector = build_selector(&ctx, &args, today()).unwrap();
        assert!(matches!(
            ctx.resolver.resolve(&selector, today()),
            Err(Error::InvalidDateFormat { .. })
        ));
    }
}
