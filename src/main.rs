use clap::Parser;
use mimalloc::MiMalloc;
use tracing::debug;

use coursekit::commands::Cli;
use coursekit::config::Config;
use coursekit::utils::logging::init_tracing;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    init_tracing(&cfg.basic.loglevel);

    debug!(
        database_url = %cfg.basic.database_url,
        model = %cfg.gemini.model,
        gemini_key_set = cfg.gemini.api_key.is_some(),
        proxy = %cfg.gemini.proxy.as_ref().map_or("<none>", |u| u.as_str()),
        "configuration loaded"
    );

    cli.run(&cfg).await?;
    Ok(())
}
