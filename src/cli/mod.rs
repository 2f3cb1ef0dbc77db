pub mod categories;
pub mod connections;
pub mod profile;
pub mod submit;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_REMOTE_URL;
use crate::render::OutputFormat;
use crate::request::Category;

#[derive(Parser)]
#[command(
    name = "socialsphere",
    version,
    about = "Find travel buddies, roommates, co-founders, dates and company for the weekend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Where requests are read from and written to
    #[arg(long, value_enum, default_value_t = SourceKind::Sqlite, global = true)]
    pub source: SourceKind,

    /// Base URL of the request API (with --source remote)
    #[arg(long, default_value = DEFAULT_REMOTE_URL, global = true)]
    pub remote_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in sample data; submissions are echoed but not kept
    Mock,
    /// Local SQLite database
    Sqlite,
    /// REST backend
    Remote,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show your connection requests, all categories or one
    Connections {
        /// Only show this category (default: a short list from every category)
        #[arg(long, value_enum)]
        category: Option<Category>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
    /// Submit a new request
    Submit {
        #[command(subcommand)]
        request: submit::SubmitCommand,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// List the kinds of requests you can make
    Categories,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print your profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change profile fields; anything not given stays as it is
    Update(profile::UpdateArgs),
}
