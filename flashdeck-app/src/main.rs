mod cli;
mod console;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::io;

use cli::opts::Cli;
use cli::session::Session;
use console::Console;

fn main() -> Result<()> {
    let args = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(console, args.import, args.export);
    session.run()
}
