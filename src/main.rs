use clap::Parser;
use tabshare::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::BackfillProfiles => cli::backfill::run().await,
    }
}
