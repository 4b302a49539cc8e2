//! Error adapter for converting VennError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use venndraw::VennError;

/// Adapter for [`VennError`] variants.
///
/// Library errors carry no source spans, so the adapter contributes a
/// stable code per variant and, where useful, a help line.
pub struct ErrorAdapter<'a>(pub &'a VennError);

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
        let code = match &self.0 {
            VennError::Io(_) => "venndraw::io",
            VennError::InvalidArgument(_) => "venndraw::invalid_argument",
            VennError::Style(_) => "venndraw::style",
            VennError::Export(_) => "venndraw::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            VennError::InvalidArgument(_) => {
                "pass --data 2 to 4 times, with one --name per set if names are given"
            }
            VennError::Style(_) => {
                "colors accept CSS syntax such as `#5a9bd480` or `rgba(92, 192, 98, 0.5)`"
            }
            VennError::Io(_) | VennError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
