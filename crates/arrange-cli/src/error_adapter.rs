//! Error adapter for converting ArrangeError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use log::Level;
use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity};

use arrange::ArrangeError;

/// Adapter rendering an [`ArrangeError`] as a miette diagnostic.
///
/// Selection problems are user mistakes rather than failures, so they are
/// reported with warning severity.
pub struct ErrorAdapter<'a>(pub &'a ArrangeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ArrangeError::Io(_) => "arrange::io",
            ArrangeError::InvalidSelection(_) => "arrange::selection",
            ArrangeError::InvalidConfig(_) => "arrange::config",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<Severity> {
        match self.0 {
            ArrangeError::InvalidSelection(_) => Some(Severity::Warning),
            _ => Some(Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            ArrangeError::InvalidSelection(_) => {
                "select at least one item and name the active item with `active` or --active; \
                 an active item outside the scene also needs `active_position`"
            }
            ArrangeError::InvalidConfig(_) => {
                "counts must be at least 1 with a product that fits in usize, \
                 and spacing at least 0.1 on every axis"
            }
            ArrangeError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

impl ErrorAdapter<'_> {
    /// Log level matching the diagnostic's severity.
    pub fn log_level(&self) -> Level {
        match self.severity() {
            Some(Severity::Advice) => Level::Info,
            Some(Severity::Warning) => Level::Warn,
            _ => Level::Error,
        }
    }
}

/// Wrap an error for rendering.
pub fn to_reportable(err: &ArrangeError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
