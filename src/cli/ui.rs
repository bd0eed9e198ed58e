//! Terminal Output Helpers

use std::fmt::Display;

use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow().bold(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    /// Bold heading followed by a rule.
    pub fn section(&self, title: &str) {
        println!("\n{}", style(title).bold());
        println!("{}", style("─".repeat(title.chars().count().max(24))).dim());
    }

    pub fn field(&self, label: &str, value: impl Display) {
        println!("  {} {}", style(format!("{}:", label)).dim(), value);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
