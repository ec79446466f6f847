mod cli;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = cli::Cli::parse().into_config();
    platform::logging::initialize(&config.log);
    platform::run_app(config)
}
