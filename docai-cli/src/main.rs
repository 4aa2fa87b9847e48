use clap::Parser;
use docai_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    docai_cli::run(cli).await
}
