//! Styled terminal output.

use std::fmt::Display;

use console::{Term, style};
use qrstudio_business::{AnalysisResult, QrSettings};

/// Writes user-facing lines to stdout. Logs go to stderr.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn success(&self, message: impl Display) {
        self.line(&format!("{} {}", style("✓").green().bold(), message));
    }

    pub fn warning(&self, message: impl Display) {
        self.line(&format!("{} {}", style("⚠").yellow().bold(), message));
    }

    pub fn print(&self, message: impl Display) {
        self.line(&message.to_string());
    }

    pub fn labeled(&self, label: impl Display, value: impl Display) {
        self.line(&format!("  {}: {}", style(label).dim(), value));
    }

    pub fn analysis(&self, result: &AnalysisResult) {
        self.line(&style(&result.label).bold().cyan().to_string());
        self.labeled("Description", &result.description);
        self.labeled("Foreground", &result.primary_color);
        self.labeled("Background", &result.secondary_color);
        if result.is_fallback() {
            self.warning("No usable suggestion, default styling applied");
        }
    }

    pub fn settings(&self, settings: &QrSettings) {
        self.line(&style(&settings.label).bold().cyan().to_string());
        self.labeled("Encodes", &settings.url);
        self.labeled("Description", &settings.description);
        self.labeled("Foreground", &settings.primary_color);
        self.labeled("Background", &settings.secondary_color);
        self.labeled(
            "Error correction",
            format!(
                "{} ({})",
                settings.error_correction_level.label(),
                settings.error_correction_level
            ),
        );
        self.labeled("Margin", format!("{} modules", settings.margin));
    }

    fn line(&self, text: &str) {
        // Ignore broken pipes.
        drop(self.term.write_line(text));
    }
}
