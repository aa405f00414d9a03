//! Error types for identifier parsing and table loading

/// Error raised when a raw string is not a recognizable publication identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ParseError {
    /// No publisher/series prefix matched the start of the input
    #[error("failed to parse serie for {input}{}", render_trace(.trace))]
    UnknownSeries {
        input: String,
        trace: Option<String>,
    },

    /// The series' numbering rule rejected what was left of the input
    #[error("invalid document number {residual:?} for {series} in {input}{}", render_trace(.trace))]
    InvalidDocumentNumber {
        input: String,
        series: String,
        residual: String,
        trace: Option<String>,
    },

    /// An identifier was built without a document number
    #[error("document number must not be empty")]
    EmptyDocumentNumber,
}

impl ParseError {
    /// Original input that failed to parse, if any
    pub fn input(&self) -> Option<&str> {
        match self {
            ParseError::UnknownSeries { input, .. } => Some(input),
            ParseError::InvalidDocumentNumber { input, .. } => Some(input),
            ParseError::EmptyDocumentNumber => None,
        }
    }

    /// Diagnostic description of the furthest position the grammar reached
    pub fn trace(&self) -> Option<&str> {
        match self {
            ParseError::UnknownSeries { trace, .. } => trace.as_deref(),
            ParseError::InvalidDocumentNumber { trace, .. } => trace.as_deref(),
            ParseError::EmptyDocumentNumber => None,
        }
    }

    /// Replace the reported input with the caller's original text.
    ///
    /// The grammar only sees the rewritten code, while callers expect the
    /// error to name what they passed in.
    pub(crate) fn with_input(self, original: &str) -> Self {
        match self {
            ParseError::UnknownSeries { trace, .. } => ParseError::UnknownSeries {
                input: original.to_string(),
                trace,
            },
            ParseError::InvalidDocumentNumber {
                series,
                residual,
                trace,
                ..
            } => ParseError::InvalidDocumentNumber {
                input: original.to_string(),
                series,
                residual,
                trace,
            },
            other => other,
        }
    }
}

fn render_trace(trace: &Option<String>) -> String {
    match trace {
        Some(trace) => format!("\ncause: {}", trace),
        None => String::new(),
    }
}

/// Errors that can occur when loading a legacy code table
#[derive(Debug, thiserror::Error)]
pub enum LegacyCodesError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Empty token in rule {0}")]
    EmptyToken(usize),
}
