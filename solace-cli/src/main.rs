use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use solace_client::{ChatClient, ChatSession};
use solace_state::FsStore;
use tokio::io::{AsyncBufReadExt, BufReader};

mod cli;
mod config;
mod logging;
mod terminal;

use terminal::{PromptComposer, TerminalSink};

const QUIT_COMMAND: &str = "/quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let config = config::load_config(cli.config.as_deref())?.with_overrides(&cli);
    config.validate()?;

    logging::init(&config.log_level);

    tracing::info!(
        endpoint = %config.endpoint,
        mode = ?config.mode,
        state_dir = %config.state_dir.display(),
        "solace starting"
    );

    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let client = ChatClient::new(config.endpoint.clone())
        .mode(config.mode)
        .http_client(http);

    let store = FsStore::new(&config.state_dir);
    let mut session = ChatSession::connect(
        client,
        &store,
        TerminalSink::new(std::io::stdout()),
        PromptComposer::new(std::io::stdout()),
    )
    .await
    .context("Failed to load client identity")?;

    tracing::info!(user_id = %session.identity(), "session ready");

    if !config.greeting.is_empty() {
        session.sink_mut().say(&config.greeting);
    }
    session.composer_mut().prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim() == QUIT_COMMAND {
            break;
        }

        // Failures have already been rendered by the session.
        if let Err(err) = session.send(&line).await {
            tracing::debug!(error = %err, "send finished with error");
            if err.is_validation() {
                session.composer_mut().prompt();
            }
        }
    }

    tracing::info!("input closed, exiting");
    Ok(())
}
