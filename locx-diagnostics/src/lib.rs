// Diagnostics for build-rule attribute processing
// Collects rule and attribute level errors/warnings and renders them for humans or tools

use colored::Colorize;
use serde::Serialize;
use std::fmt;

pub mod consumer;
pub use consumer::RuleErrorConsumer;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Error,
    Warning,
}

impl ErrorLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Error => "error",
            ErrorLevel::Warning => "warning",
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorLevel::Error => write!(f, "{}", "error".red().bold()),
            ErrorLevel::Warning => write!(f, "{}", "warning".yellow().bold()),
        }
    }
}

/// Structured diagnostic message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub level: ErrorLevel,
    pub code: String,
    pub message: String,
    /// Attribute the problem was found in; `None` for rule-level reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(level: ErrorLevel, code: &str, message: String) -> Self {
        Self {
            level,
            code: code.to_string(),
            message,
            attribute: None,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn error(code: &str, message: String) -> Self {
        Self::new(ErrorLevel::Error, code, message)
    }

    pub fn warning(code: &str, message: String) -> Self {
        Self::new(ErrorLevel::Warning, code, message)
    }

    pub fn with_attribute(mut self, attr_name: &str) -> Self {
        self.attribute = Some(attr_name.to_string());
        self
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Render without colors, e.g. `error[E0100]: message (in attribute `cmd`)`
    pub fn format_plain(&self) -> String {
        let mut output = format!("{}[{}]: {}", self.level.as_str(), self.code, self.message);

        if let Some(attr) = &self.attribute {
            output.push_str(&format!(" (in attribute `{}`)", attr));
        }

        for note in &self.notes {
            output.push_str(&format!("\n = {}", note));
        }

        if let Some(help) = &self.help {
            output.push_str(&format!("\n help: {}", help));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Header: error[E0100]: message
        write!(f, "{}[{}]: {}", self.level, self.code, self.message.bold())?;

        if let Some(attr) = &self.attribute {
            write!(f, "\n {} attribute `{}`", "-->".cyan().bold(), attr)?;
        }

        for note in &self.notes {
            write!(f, "\n {} {}", "=".cyan().bold(), note.cyan())?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n {} {}", "help:".green().bold(), help)?;
        }

        Ok(())
    }
}

/// Diagnostic collection and reporting engine
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        log::debug!("diagnostic: {}", diagnostic.format_plain());
        match diagnostic.level {
            ErrorLevel::Error => self.error_count += 1,
            ErrorLevel::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all diagnostics to stderr
    pub fn print_all(&self) {
        for diag in &self.diagnostics {
            eprintln!("{}", diag);
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        if self.error_count > 0 {
            eprintln!(
                "\n{}: {} error{} emitted",
                "error".red().bold(),
                self.error_count,
                if self.error_count == 1 { "" } else { "s" }
            );
        }

        if self.warning_count > 0 {
            eprintln!(
                "{}: {} warning{} emitted",
                "warning".yellow().bold(),
                self.warning_count,
                if self.warning_count == 1 { "" } else { "s" }
            );
        }
    }

    /// Export diagnostics as JSON for editors and CI tooling
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&serde_json::json!({ "diagnostics": self.diagnostics }))
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }
}

impl RuleErrorConsumer for DiagnosticEngine {
    fn rule_warning(&mut self, message: &str) {
        self.emit(Diagnostic::warning(
            error_codes::RULE_WARNING,
            message.to_string(),
        ));
    }

    fn rule_error(&mut self, message: &str) {
        self.emit(Diagnostic::error(
            error_codes::RULE_ERROR,
            message.to_string(),
        ));
    }

    fn attribute_warning(&mut self, attr_name: &str, message: &str) {
        self.emit(
            Diagnostic::warning(error_codes::ATTRIBUTE_WARNING, message.to_string())
                .with_attribute(attr_name),
        );
    }

    fn attribute_error(&mut self, attr_name: &str, message: &str) {
        self.emit(
            Diagnostic::error(error_codes::ATTRIBUTE_ERROR, message.to_string())
                .with_attribute(attr_name),
        );
    }

    fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Common error codes
pub mod error_codes {
    // Errors (E0001-E0999)
    pub const RULE_ERROR: &str = "E0100";
    pub const ATTRIBUTE_ERROR: &str = "E0200";

    // Warnings (W0001-W9999)
    pub const RULE_WARNING: &str = "W0100";
    pub const ATTRIBUTE_WARNING: &str = "W0200";
}
