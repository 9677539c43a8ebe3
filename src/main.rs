use anyhow::Result;
use minitodo::config::Config;
use minitodo::constants::CONFIG_GENERATED;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("{}: {}", CONFIG_GENERATED, path.display());
        return Ok(());
    }

    let config = Config::load()?;

    // Run the TUI application
    minitodo::ui::run_app(config).await?;

    Ok(())
}
