mod aggregator;
mod cli;
mod config;
mod db;
mod error;
mod form;
mod profile;
mod render;
mod request;
mod source;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Command, ProfileCommand, SourceKind};

use crate::aggregator::Aggregator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Open database (requests for --source sqlite, and the profile)
    let db_path = config::db_path()?;
    let db = Arc::new(db::Database::open(&db_path)?);

    let sources = match cli.source {
        SourceKind::Mock => source::build_mock_sources()?,
        SourceKind::Sqlite => source::build_sqlite_sources(db.clone())?,
        SourceKind::Remote => {
            source::build_remote_sources(&cli.remote_url, config::REMOTE_TIMEOUT)?
        }
    };

    for s in sources.iter() {
        tracing::debug!("{} -> {}", s.category(), s.name());
    }

    match cli.command {
        Command::Connections {
            category,
            format,
            output,
        } => {
            let aggregator = Aggregator::new(sources);
            cli::connections::connections(&aggregator, category, format, output.as_deref())
                .await?
        }
        Command::Submit { request } => cli::submit::submit(&sources, request).await?,
        Command::Profile { command } => match command {
            ProfileCommand::Show { json } => cli::profile::show(&db, json)?,
            ProfileCommand::Update(args) => cli::profile::update(&db, args)?,
        },
        Command::Categories => cli::categories::categories()?,
    }

    Ok(())
}
