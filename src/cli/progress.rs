//! CLI progress display utilities
//!
//! Step indicators and completion lines, with ASCII fallbacks for
//! terminals without emoji support.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

/// Magnifying glass - for reading/parsing operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/2] 🔍 Message...`
///
/// # Example
/// ```ignore
/// print_step(1, 2, LOOKING_GLASS, "Reading dump...");
/// print_step(2, 2, DISK, "Writing dump...");
/// ```
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
