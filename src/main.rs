use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use wordcard::core::config::{load_config, resolve};
use wordcard::tui;

#[derive(Parser)]
#[command(
    name = "wordcard",
    about = "Look up words and turn them into flashcards from the terminal",
    version
)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wordcard.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("wordcard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("wordcard starting up");

    let config = resolve(&load_config()?);
    tui::run(config)?;

    log::info!("wordcard exited cleanly");
    Ok(())
}
