//! File-level inspection workflow
//!
//! The parsing core only ever sees a byte slice; reading the file from disk
//! and presenting the outcome happens here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dex::DexFile;
use crate::report::print_report;

/// Read `path`, parse it as a DEX file, and print the report.
///
/// Structural parse failures and integrity failures both surface as errors
/// after the report has been printed, so the process exits nonzero on a
/// corrupt file while still showing the decoded header fields.
pub fn inspect_file(path: &Path, show_strings: bool) -> Result<()> {
    let image = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let dex = DexFile::parse(&image)
        .with_context(|| format!("parsing {}", path.display()))?;

    print_report(&dex, show_strings);

    dex.integrity
        .ensure()
        .with_context(|| format!("verifying {}", path.display()))?;

    Ok(())
}
