use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "dexcheck",
    about = "DEX header and string-pool integrity checker",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the DEX file to inspect.
    #[arg(value_name = "DEX_FILE")]
    pub file: PathBuf,

    /// Print every decoded string from the string pool.
    #[arg(long, action = ArgAction::SetTrue)]
    pub strings: bool,
}
