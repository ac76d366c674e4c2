//! prospera CLI: terminal support chat and finance records. Config from env (.env) and optional CLI args.

use anyhow::Result;
use chatbot::{run_console_chat, ChatbotConfig};
use clap::Parser;
use finance::FinanceBook;
use prospera_cli::{execute, open_store, Cli, Commands};
use prospera_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ChatbotConfig::load()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    config.validate()?;
    init_tracing(&config.log_file, &config.log_level)?;

    match cli.command {
        Commands::Chat { flow } => run_console_chat(&config, flow).await,
        command => {
            let book = FinanceBook::new(open_store(&config.database_url).await?);
            let today = chrono::Local::now().date_naive();
            println!("{}", execute(&book, command, today).await?);
            Ok(())
        }
    }
}
