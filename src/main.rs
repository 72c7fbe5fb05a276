mod cli;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, InfoArgs};
use dailywall::api::services::lookup;
use dailywall::config::Config;
use dailywall::observability;
use dailywall::upstream::HttpSource;
use dailywall::wallpaper::WallpaperQuery;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    observability::init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Server(args) => {
            if let Some(address) = args.address {
                config.server.bind_addr = address;
            }
            dailywall::api::run(config).await?
        }
        Commands::Info(args) => print_info(&config, args).await?,
    }

    Ok(())
}

async fn print_info(config: &Config, args: InfoArgs) -> Result<(), AnyError> {
    let source = HttpSource::new(&config.upstream)?;
    let query = WallpaperQuery {
        region: args.region,
        date: args.date,
        dpi: args.dpi,
        kind: None,
    };

    let resolution = lookup(
        &source,
        &query,
        &config.resolver.default_dimension,
        Utc::now(),
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&resolution.info)?);
    Ok(())
}
