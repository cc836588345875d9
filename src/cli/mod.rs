pub mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{
    RunConfig, DEFAULT_BASE, DEFAULT_DESTINATION, DEFAULT_FILE_NAME, DEFAULT_LIMIT,
};

#[derive(Parser, Debug)]
#[command(
    name = "multable",
    version,
    about = "Build a multiplication table and save it to a text file",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Multiplication table base
    #[arg(short, long, default_value_t = DEFAULT_BASE)]
    pub base: i64,

    /// Highest multiplier (inclusive)
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,

    /// Print the table to the console
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub show: bool,

    /// Output file name, without extension
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub name: String,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    pub destination: PathBuf,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            base: self.base,
            limit: self.limit,
            show_table: self.show,
            file_destination: self.destination,
            file_name: self.name,
        }
    }
}
