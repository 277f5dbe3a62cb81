pub mod hints;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "samplegrid")]
#[command(about = "Browse, search and add material sample records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $SAMPLEGRID_PATH, then the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create config and seed the record store")]
    Init,

    #[command(about = "Show records as cards, optionally filtered")]
    List {
        /// Case-insensitive text matched against every field
        query: Option<String>,
    },

    #[command(about = "Show records matching a query (alias for 'list <QUERY>')")]
    Search { query: String },

    #[command(about = "Show every field of one record")]
    Show { sample_id: String },

    #[command(about = "Add a new record")]
    Add {
        /// Unique identifier of the new record
        sample_id: String,

        /// Field value, repeatable (e.g. --set material=glass)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    #[command(about = "Show the entry form generated from the schema")]
    Form,

    #[command(about = "Show the field schema")]
    Schema,

    #[command(about = "Write all records to a file")]
    Export {
        #[arg(long, short)]
        output: PathBuf,

        #[arg(long = "as", default_value = "csv")]
        export_format: ExportFormat,
    },

    #[command(about = "Interactive grid with live search and an entry form")]
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
