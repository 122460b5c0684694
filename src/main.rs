use anyhow::Result;
use overlay_kit::config::Config;
use overlay_kit::logger::Logger;
use overlay_kit::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    if config.logging.enabled {
        logger.init_global(config.log_level())?;
    }

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
