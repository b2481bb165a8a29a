//! CLI argument definitions for the member directory.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use roster_server::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOURCE};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Member directory - browse and search a member roster exported as CSV",
    long_about = "Serve a searchable member directory from a CSV roster export.\n\n\
                  The roster is re-read on every request, so edits to the export\n\
                  are visible immediately. A missing export serves an empty roster."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// CSV export holding the member roster.
    #[arg(
        long = "source",
        value_name = "PATH",
        env = "ROSTER_SOURCE",
        default_value = DEFAULT_SOURCE,
        global = true
    )]
    pub source: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow member field values (personal data) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server.
    Serve(ServeArgs),

    /// Search the roster and print matching members.
    Search(SearchArgs),

    /// Print the distinct countries, cities, classes and industries.
    Facets,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "host", env = "HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long = "port", env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Case-insensitive substring of the member name.
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Exact city.
    #[arg(long = "city")]
    pub city: Option<String>,

    /// Exact country.
    #[arg(long = "country")]
    pub country: Option<String>,

    /// Exact class (graduation year).
    #[arg(long = "class")]
    pub class: Option<String>,

    /// Case-insensitive substring of the job title.
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Exact industry.
    #[arg(long = "industry")]
    pub industry: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
