use console::style;

use crate::types::AnalysisResult;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    /// Render an analysis result as a short human-readable report.
    pub fn render_result(&self, result: &AnalysisResult) {
        if result.is_error() {
            for message in &result.errors {
                self.error(message);
            }
            return;
        }
        println!(
            "  {} {}",
            style("Time: ").bold(),
            style(&result.time_complexity).cyan()
        );
        println!(
            "  {} {}",
            style("Space:").bold(),
            style(&result.space_complexity).cyan()
        );
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
