use anyhow::Result;
use clap::Parser;
use dexcheck::cli::Cli;
use dexcheck::inspect_file;

fn main() -> Result<()> {
    let cli = Cli::parse();
    inspect_file(&cli.file, cli.strings)
}
