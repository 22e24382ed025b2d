use clap::Parser;
use sambat::adapter::inbound::cli::command::Cli;
use sambat::adapter::inbound::cli::output::{self, OutputConfig};
use sambat::adapter::inbound::cli::{diagnostic, dispatch};
use sambat::infrastructure::config::settings::Config;
use tracing::debug;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose, &cli.color));

    let result = Config::load_or_default(&cli.config).and_then(|mut config| {
        match cli.verbose {
            0 => {}
            1 => config.logging.level = "debug".into(),
            _ => config.logging.level = "trace".into(),
        }
        config.init_logging();
        debug!(config = %cli.config.display(), "configuration loaded");
        dispatch(&cli.command, config, &cli.config)
    });

    if let Err(err) = result {
        match diagnostic::for_error(&err, &cli.config) {
            Some(report) if !output::is_json() => eprintln!("{report:?}"),
            _ => output::error(&err.to_string()),
        }
        std::process::exit(1);
    }
}
