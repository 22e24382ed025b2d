//! Handler for the `query` command.

use serde_json::json;

use super::command::QueryArgs;
use super::context::{self, Context};
use super::output;
use super::resolve::build_selector;
use crate::application::describe;
use crate::error::Result;

/// Resolve a range and print the reporting API URLs for it.
///
/// With no `--user`, prints the attendance and all-users endpoints. With
/// users, prints one visit-log URL per user.
pub fn execute(ctx: &Context, args: &QueryArgs) -> Result<()> {
    let today = context::today(args.range.today.as_deref())?;
    let selector = build_selector(ctx, &args.range, today)?;
    let range = ctx.resolver.resolve(&selector, today)?;
    let endpoints = ctx.config.endpoints()?;

    let urls: Vec<(String, String)> = if args.users.is_empty() {
        let mut urls = vec![(
            "attendance".to_string(),
            endpoints.attendance(&range).to_string(),
        )];
        if args.download {
            urls.push((
                "all-users".to_string(),
                endpoints.all_users_download(&range).to_string(),
            ));
        }
        urls
    } else if args.download {
        args.users
            .iter()
            .map(|user| (user.clone(), endpoints.visit_logs_download(user, &range).to_string()))
            .collect()
    } else {
        args.users
            .iter()
            .cloned()
            .zip(endpoints.fan_out(args.users.iter().map(String::as_str), &range))
            .map(|(user, url)| (user, url.to_string()))
            .collect()
    };

    if output::is_json() {
        let entries: Vec<_> = urls
            .iter()
            .map(|(target, url)| json!({ "target": target, "url": url }))
            .collect();
        output::json_output(json!({
            "command": "query",
            "range": selector.kind().label(),
            "from": range.from_iso(),
            "to": range.to_iso(),
            "urls": entries,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        for (_, url) in &urls {
            output::value(url);
        }
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Range", describe(&selector, &range));
    output::field("API", endpoints.base());
    output::section("Requests");
    for (target, url) in &urls {
        output::field(target, output::highlight(url));
    }
    if args.users.is_empty() && !args.download {
        output::hint("pass --user <id> for per-user visit logs, or --download for CSV");
    }
    Ok(())
}
