//! CLI module graph and command dispatch.

pub mod calendar;
pub mod check;
pub mod command;
pub mod context;
pub mod convert;
pub mod diagnostic;
pub mod output;
pub mod query;
pub mod resolve;

use std::path::Path;

use self::command::{CheckCommand, Commands, ConvertCommand};
use self::context::Context;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run a parsed command against a loaded configuration.
pub fn dispatch(command: &Commands, config: Config, config_path: &Path) -> Result<()> {
    let ctx = Context::new(config);
    match command {
        Commands::Resolve(args) => resolve::execute(&ctx, args),
        Commands::Query(args) => query::execute(&ctx, args),
        Commands::Convert(ConvertCommand::ToAd { date }) => convert::to_ad(&ctx, date),
        Commands::Convert(ConvertCommand::ToBs { date }) => convert::to_bs(&ctx, date),
        Commands::Years(arg) => calendar::years(&ctx, arg.today.as_deref()),
        Commands::Months(args) => calendar::months(&ctx, args),
        Commands::Check(CheckCommand::Config) => check::config(config_path),
    }
}
