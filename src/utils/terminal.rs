//! Terminal output utilities

use std::io::{self, Write};

use console::style;

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", style(message).green().bold());
}

/// Write the per-project separator and flush it right away so progress stays
/// visible even when the next step blocks or fails
pub fn write_separator(out: &mut dyn Write, name: &str) -> io::Result<()> {
    writeln!(out, "\n------- {} -------", name)?;
    out.flush()
}
