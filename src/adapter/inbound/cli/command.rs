//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`: resolving ranges, converting
//! single dates, listing picker options, building report URLs and checking
//! configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::config::settings::DEFAULT_CONFIG_PATH;

/// Bikram-Sambat aware date ranges for report queries
#[derive(Parser, Debug)]
#[command(name = "sambat")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file (optional)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a named range to AD `from` / `to` dates
    Resolve(RangeArgs),

    /// Build reporting API URLs for a range
    Query(QueryArgs),

    /// Convert a single date between BS and AD
    #[command(subcommand)]
    Convert(ConvertCommand),

    /// List the BS years offered by the year picker
    Years(TodayArg),

    /// List BS months, with day counts and AD spans for a year
    Months(MonthsArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Range selection shared by `resolve` and `query`.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Today, Yesterday, "This Week", "Previous Week", Monthly or Custom
    /// (defaults to the configured range)
    pub range: Option<String>,

    /// Year for Monthly (defaults to the current year)
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<i32>,

    /// Month for Monthly: number or BS month name (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Start date for Custom (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date for Custom (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Interpret Monthly/Custom input as AD instead of BS
    #[arg(long)]
    pub ad: bool,

    /// Override today's date (AD, YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `query` subcommand.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// User id to fetch visit logs for (repeatable)
    #[arg(long = "user")]
    pub users: Vec<String>,

    /// Build CSV download URLs instead of listing URLs
    #[arg(long)]
    pub download: bool,
}

/// Subcommands for `sambat convert`
#[derive(Subcommand, Debug)]
pub enum ConvertCommand {
    /// Convert a BS date to AD
    ToAd {
        /// BS date (YYYY-MM-DD)
        date: String,
    },
    /// Convert an AD date to BS
    ToBs {
        /// AD date (YYYY-MM-DD)
        date: String,
    },
}

/// Shared argument for commands that only need "today".
#[derive(Args, Debug, Clone, Default)]
pub struct TodayArg {
    /// Override today's date (AD, YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `months` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct MonthsArgs {
    /// BS year to show (defaults to the current BS year)
    #[arg(long)]
    pub year: Option<i32>,

    #[command(flatten)]
    pub today: TodayArg,
}

/// Subcommands for `sambat check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_spaced_label() {
        let cli = Cli::try_parse_from(["sambat", "resolve", "This Week", "--today", "2025-06-15"])
            .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.range.as_deref(), Some("This Week"));
                assert_eq!(args.today.as_deref(), Some("2025-06-15"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_monthly_arguments() {
        let cli = Cli::try_parse_from([
            "sambat", "resolve", "monthly", "--year", "2082", "--month", "baishakh",
        ])
        .unwrap();
        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.year, Some(2082));
        assert_eq!(args.month.as_deref(), Some("baishakh"));
        assert!(!args.ad);
    }

    #[test]
    fn parses_query_users() {
        let cli = Cli::try_parse_from([
            "sambat", "query", "today", "--user", "u1", "--user", "u2",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.users, vec!["u1", "u2"]);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["sambat", "years", "--json", "--color", "never"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn convert_requires_date() {
        assert!(Cli::try_parse_from(["sambat", "convert", "to-ad"]).is_err());
    }
}
