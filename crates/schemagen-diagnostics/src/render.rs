//! Terminal rendering of diagnostics

use crate::{Diagnostic, Severity};
use colored::Colorize;

impl Diagnostic {
    /// Render the diagnostic as a single colored line
    pub fn render(&self) -> String {
        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };

        let mut line = format!("{}: {} - {}", severity, self.code.to_string().dimmed(), self.message);
        match (&self.file, &self.location) {
            (Some(file), Some(loc)) => {
                line.push_str(&format!(" at {}", format!("{}:{}", file.display(), loc).cyan()));
            }
            (Some(file), None) => {
                line.push_str(&format!(" in {}", file.display().to_string().cyan()));
            }
            (None, Some(loc)) => line.push_str(&format!(" at {}", loc)),
            (None, None) => {}
        }
        line
    }
}
