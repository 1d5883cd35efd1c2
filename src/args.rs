use clap::{Parser, Subcommand};

use crate::repository::repository::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(about = "Guess how many draws it takes to find the first Queen")]
pub struct Args {
    #[arg(long, env = "DECK_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Play one game")]
    Play {
        #[arg(allow_negative_numbers = true)]
        guess: i64,
    },
}
