//! Command-line surface: one subcommand per utility.

mod college;
mod cv;
mod lines;
mod temp;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use college::{CollegeAction, CollegeCommand, Table};
pub use cv::CvCommand;
pub use lines::LinesCommand;
pub use temp::TempCommand;

use crate::config::Config;
use crate::error::KitError;

#[derive(Parser, Debug)]
#[command(name = "coursekit")]
#[command(about = "Coursework utilities: temperature, college database, line files, CV analysis")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./coursekit.toml when present)
    #[arg(long, global = true, env = "COURSEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a temperature such as F51 or C11
    Temp(TempCommand),
    /// College database demo and queries
    College(CollegeCommand),
    /// Print a text file and count a character in it
    Lines(LinesCommand),
    /// Extract a CV's text and ask Gemini to analyze it
    Cv(CvCommand),
}

impl Cli {
    pub async fn run(self, cfg: &Config) -> Result<(), KitError> {
        match self.command {
            Command::Temp(cmd) => cmd.run().await,
            Command::College(cmd) => cmd.run(cfg).await,
            Command::Lines(cmd) => cmd.run().await,
            Command::Cv(cmd) => cmd.run(cfg).await,
        }
    }
}
