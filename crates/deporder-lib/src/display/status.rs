//! Status lines for command results

use super::styling::Styling;
use std::io::{self, Write};

/// Writes semantic status lines to an output sink
pub struct StatusDisplay<'w> {
    out: &'w mut dyn Write,
    styling: Styling,
}

impl<'w> StatusDisplay<'w> {
    pub fn new(out: &'w mut dyn Write, styling: Styling) -> Self {
        Self { out, styling }
    }

    /// Progress line: `→ message`
    pub fn working(&mut self, message: &str) -> io::Result<()> {
        let line = self.styling.format_working(message);
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }

    /// Display a success status with optional details
    ///
    /// Output: `✓ item: details`
    pub fn success(&mut self, item: &str, details: &str) -> io::Result<()> {
        let line = self.styling.format_success(&join_details(item, details));
        writeln!(self.out, "{line}")
    }

    /// Display an error status with optional details
    ///
    /// Output: `✗ item: details`
    pub fn error(&mut self, item: &str, details: &str) -> io::Result<()> {
        let line = self.styling.format_error(&join_details(item, details));
        writeln!(self.out, "{line}")
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = self.styling.format_warning(message);
        writeln!(self.out, "{line}")
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let line = self.styling.format_info(message);
        writeln!(self.out, "{line}")
    }

    /// Unstyled line, used for machine-readable output
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn emphasis(&mut self, text: &str) -> io::Result<()> {
        let line = self.styling.style_emphasis(text);
        writeln!(self.out, "{line}")
    }

    pub fn subtle(&mut self, text: &str) -> io::Result<()> {
        let line = self.styling.style_subtle(text);
        writeln!(self.out, "{line}")
    }

    /// Display a list of items with bullets
    pub fn list<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<()> {
        let bullet = self.styling.bullet();
        for item in items {
            writeln!(self.out, "  {} {}", bullet, item.as_ref())?;
        }
        Ok(())
    }
}

fn join_details(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{item}: {details}")
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
