//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Voiceplan - voice memos to triaged, time-boxed task plans
#[derive(Parser)]
#[command(
    name = "vp",
    about = "Turn a voice memo or pasted note into a categorized, scheduled task plan",
    version,
    after_help = "Logs are written to: ~/.local/share/voiceplan/logs/voiceplan.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Transcribe an audio memo and print the transcript
    Transcribe {
        /// Audio file (.wav, .mp3, or .m4a)
        audio: PathBuf,
    },

    /// Build a task plan from an audio memo or note text
    Plan {
        /// Audio file to transcribe first (.wav, .mp3, or .m4a)
        #[arg(long, conflicts_with = "text")]
        audio: Option<PathBuf>,

        /// Note text (reads stdin when neither --audio nor --text is given)
        #[arg(long)]
        text: Option<String>,

        /// Save the finished plan (requires --username and --password)
        #[arg(long, requires = "username", requires = "password")]
        save: bool,

        /// Title for the saved plan (defaults to a timestamp)
        #[arg(long)]
        title: Option<String>,

        /// Account username
        #[arg(short, long)]
        username: Option<String>,

        /// Account password
        #[arg(short, long)]
        password: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the built-in demo plan (no model calls)
    Demo {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Register a new account
    Register {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// List an account's recent saved plans
    Plans {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// How many plans to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Re-render one saved plan by id
        #[arg(long)]
        show: Option<i64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for plan-rendering commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}
