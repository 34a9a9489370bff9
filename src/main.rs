// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use domclob::app::{self, Cli};
use domclob::logging;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::initialize_logging(cli.log_file.as_deref())?;
    app::run(cli).await
}
