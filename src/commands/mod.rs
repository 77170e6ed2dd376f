pub mod fill;
pub mod init;

use crate::libs::logging;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Fill this month's working days with time entries (default)")]
    Fill,
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        // A missing .env file is fine; the variables may come from the shell
        let _ = dotenv::dotenv();
        logging::init();

        match cli.command.unwrap_or(Commands::Fill) {
            Commands::Fill => fill::cmd().await,
            Commands::Init => init::cmd(),
        }
    }
}
