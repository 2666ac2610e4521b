use anyhow::Context;
use clap::Parser;
use greeter::cli::Cli;
use greeter::logging::init_tracing;
use greeter::session::CrosstermSession;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    let names = config.name_provider();

    let key = greeter::run(CrosstermSession::stdout(), &*names)
        .context("Failed to run greeter")?;
    info!(?key, "exiting");

    Ok(())
}
