use anyhow::Result;
use clap::Parser;
use smoothie_shop::{
    cli::{args::Args, commands::CliApp},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "🥤 {} starting in {} environment",
        config.shop_name,
        config.environment
    );

    let app = CliApp::new(config)?;
    app.run(args)
}
