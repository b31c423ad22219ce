pub mod cli;
pub mod dex;
pub mod error;
pub mod inspect;
pub mod report;

pub use dex::{DexFile, Header, IntegrityReport};
pub use error::{DexError, Result};
pub use inspect::inspect_file;
