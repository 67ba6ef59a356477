use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

const DEFAULT_SESSION: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Sidebar-style list, one entry per workout
    Text,
    /// Workouts and their map markers as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "mapty",
    about = "Replay map clicks and workout form submissions, then print the logged workouts"
)]
pub struct Cli {
    /// Session file with one `<type> <lat>,<lng> <distance> <duration> <metric>` event per line.
    ///
    /// Use `-` to read from stdin.
    #[arg(value_name = "SESSION", default_value = DEFAULT_SESSION)]
    pub session: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
