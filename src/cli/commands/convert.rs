//! Dump conversion command

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, LOOKING_GLASS, print_done, print_step};
use crate::formats::{DumpFormat, read_dump, write_dump};

/// Convert a dump file between the TXT and JSON encodings.
///
/// Formats are detected from the file extensions. A same-format pair
/// rewrites the file in canonical layout.
///
/// # Errors
/// Returns an error if either extension is unsupported, the source fails
/// to parse, or the destination cannot be written.
pub fn execute(source: &Path, destination: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let input = DumpFormat::from_path(source)?;
    let output = DumpFormat::from_path(destination)?;

    if !quiet {
        print_step(
            1,
            2,
            LOOKING_GLASS,
            &format!("Reading {input} dump {}...", source.display()),
        );
    }
    let document = read_dump(source)?;

    if !quiet {
        print_step(
            2,
            2,
            DISK,
            &format!("Writing {output} dump {}...", destination.display()),
        );
    }
    write_dump(destination, &document)?;

    if !quiet {
        print_done(started.elapsed());
        println!(
            "  {} terms, {} languages",
            document.terms.len(),
            document.languages.len()
        );
    }
    Ok(())
}
