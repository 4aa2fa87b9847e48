use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "docai",
    version,
    about = "Ask questions of a document knowledge base"
)]
pub struct Cli {
    /// Base address of the question-answering service
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Path to client.toml
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Chat)]
    pub mode: RunMode,
    /// Read the question for ask mode from a file
    #[arg(long)]
    pub question_file: Option<String>,
    /// Question for ask mode
    pub question: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal chat
    Chat,
    /// Ask a single question and print the answer as JSON
    Ask,
}
