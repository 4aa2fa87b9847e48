pub mod cli;
pub mod tui;

pub use cli::{Cli, RunMode};

use docai_core::{AppConfig, AskBackend, ChatClient, HttpAskClient};
use serde_json::{Value, json};
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint)?;
    }

    init_tracing(cli.mode, config.log_file.as_deref());
    info!("Starting docai");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        endpoint = config.endpoint.as_str(),
        "Configuration resolved"
    );

    let backend = Arc::new(HttpAskClient::new(config.endpoint.clone()));

    match cli.mode {
        RunMode::Chat => {
            info!("Launching terminal chat");
            tui::run_chat(backend, &config).await?;
        }
        RunMode::Ask => {
            let question = load_question(&cli)?;
            info!("Dispatching single question");
            let output = ask_once(backend, question).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// Ask one question and return the recorded answer as JSON
///
/// A failed request still yields the error entry, like the chat view.
pub async fn ask_once<B>(backend: Arc<B>, question: String) -> Result<Value, Box<dyn Error>>
where
    B: AskBackend + 'static,
{
    let mut client = ChatClient::new(backend);
    client.state_mut().set_draft(question);
    if !client.submit_question().await {
        return Err("question must not be blank".into());
    }

    let entry = client
        .state()
        .log()
        .last()
        .ok_or("no answer was recorded")?;
    Ok(json!({
        "answer": entry.text,
        "sources": entry.sources,
    }))
}

fn init_tracing(mode: RunMode, log_file: Option<&Path>) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if let Some(path) = log_file {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    fmt()
                        .with_env_filter(filter)
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .init();
                    return;
                }
                Err(err) => {
                    eprintln!("cannot open log file {}: {err}", path.display());
                }
            }
        }

        match mode {
            // stdout belongs to the screen
            RunMode::Chat => fmt().with_env_filter(EnvFilter::new("off")).init(),
            // stdout carries the JSON answer
            RunMode::Ask => fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .init(),
        }
    });
}

fn load_question(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if let Some(path) = &cli.question_file {
        info!(path = %path, "Loading question from file");
        let content = fs::read_to_string(path)?;
        return Ok(strip_line_ending(content));
    }

    if !cli.question.is_empty() {
        info!("Using question provided through CLI arguments");
        return Ok(cli.question.join(" "));
    }

    if !io::stdin().is_terminal() {
        info!("Reading question from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(strip_line_ending(buffer));
    }

    warn!("Question not provided via arguments, file, or stdin");
    Err("question required via arguments, --question-file, or stdin".into())
}

fn strip_line_ending(mut text: String) -> String {
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    text
}
