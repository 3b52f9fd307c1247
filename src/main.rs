use anyhow::Result;
use clap::Parser;
use log::error;

use archprompt::{Cli, CommandHandler, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings stay visible so enhancement fallbacks reach the user.
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {e:#}");
            eprintln!("Error: Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };
    settings.apply_api_key(cli.api_key.clone());

    let handler = CommandHandler::new(settings, !cli.no_color);

    match handler.handle_command(cli.command).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("{}", handler.format_error(&format!("{e:#}")));
            std::process::exit(1);
        }
    }

    Ok(())
}
