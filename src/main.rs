use clap::Parser;
use log::{debug, error, info};
use simple_logger::SimpleLogger;
use std::process::exit;
use svcmgr::{backend, cli, config::Config, error::Error};
use time::macros::format_description;

fn main() -> Result<(), Error> {
    let args = cli::Cli::parse();

    let logger = SimpleLogger::new().with_timestamp_format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let log_level = if args.debug || cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let logger = logger.with_level(log_level);
    logger.init()?;

    info!("svcmgr v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {args:?}");

    let config_path = args.config.unwrap_or_else(Config::default_path);
    debug!("Loading config from {}", config_path.display());

    let config: Config = if config_path.exists() {
        match confy::load_path(config_path) {
            Ok(config) => config,
            Err(why) => {
                error!("Failed to load configuration: {why}");
                exit(1);
            }
        }
    } else {
        Config::default()
    };

    backend::main(args.command, &config);

    Ok(())
}
