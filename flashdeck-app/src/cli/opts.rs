use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "flashdeck", version, about = "Flashdeck interactive flashcard CLI")]
pub struct Cli {
    /// Deck file to load before the session starts
    #[arg(long)]
    pub import: Option<PathBuf>,

    /// Deck file written automatically on exit
    #[arg(long)]
    pub export: Option<PathBuf>,
}
