use anyhow::Result;
use portalist::config::Config;
use portalist::logger;
use portalist::router::Route;
use portalist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if config.logging.enabled {
        logger::init_file_logging()?;
    }

    if std::env::var(portalist::constants::API_TOKEN_ENV).is_err() {
        eprintln!("ℹ️  {} not set - running in read-only mode", portalist::constants::API_TOKEN_ENV);
        eprintln!("   Set it to sign in: export {}=your_token_here", portalist::constants::API_TOKEN_ENV);
    }

    // Optional deep-link path, e.g. `portalist /social/42`
    let deep_link = std::env::args().nth(1);
    let initial_path = deep_link.as_deref().unwrap_or(config.ui.default_route.as_str());
    let initial_route = Route::parse(initial_path).unwrap_or_default();

    ui::run_app(config, initial_route).await?;

    Ok(())
}
