//! Handlers for `convert to-ad` and `convert to-bs`.

use serde_json::json;

use super::context::Context;
use super::output;
use crate::domain::calendar::parse_ad;
use crate::domain::BsDate;
use crate::error::Result;

/// Convert a BS date string to AD.
pub fn to_ad(ctx: &Context, date: &str) -> Result<()> {
    let bs: BsDate = date.parse()?;
    let ad = ctx.resolver.converter().bs_to_ad(bs)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "convert.to_ad",
            "bs": bs.to_string(),
            "ad": ad.to_string(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(ad);
        return Ok(());
    }

    output::field("BS", format!("{bs} ({} {})", bs.bs_month(), bs.year()));
    output::field("AD", output::highlight(ad.format("%Y-%m-%d (%A)")));
    Ok(())
}

/// Convert an AD date string to BS.
pub fn to_bs(ctx: &Context, date: &str) -> Result<()> {
    let ad = parse_ad(date)?;
    let bs = ctx.resolver.converter().ad_to_bs(ad)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "convert.to_bs",
            "ad": ad.to_string(),
            "bs": bs.to_string(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(bs);
        return Ok(());
    }

    output::field("AD", ad.format("%Y-%m-%d (%A)"));
    output::field(
        "BS",
        output::highlight(format!("{bs} ({} {})", bs.bs_month(), bs.year())),
    );
    Ok(())
}
