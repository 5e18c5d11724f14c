mod cli;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod resume;
mod routes;
mod state;

use std::io::{self, Write};
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::resume::input::{read_resume, PASTE_PROMPT};
use crate::resume::parser::{parse_resume, render_text};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stderr keeps stdout clean for `parse`
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Parse { skills, json } => parse_stdin(config, skills, json),
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting skillscan API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Default vocabulary: {} skills ({})",
        config.required_skills.len(),
        config.required_skills.join(", ")
    );

    let port = config.port;
    let state = AppState::new(config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_stdin(config: Config, skills: Vec<String>, json: bool) -> Result<()> {
    let required_skills = if skills.is_empty() {
        config.required_skills
    } else {
        skills
    };

    eprintln!("{PASTE_PROMPT}");
    let text = read_resume(io::stdin().lock())?;
    let parsed = parse_resume(&text, &required_skills);

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &parsed).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(render_text(&parsed).as_bytes())?;
    }

    Ok(())
}
