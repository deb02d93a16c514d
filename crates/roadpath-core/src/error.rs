use thiserror::Error;

/// A problem with a single input line. The line is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing {field} token")]
    MissingToken { line: usize, field: &'static str },

    #[error("line {line}: malformed edge weight '{token}'")]
    InvalidWeight { line: usize, token: String },

    #[error("line {line}: negative edge weight {weight} is not supported")]
    NegativeWeight { line: usize, weight: i64 },

    #[error("line {line}: not valid UTF-8")]
    InvalidEncoding { line: usize },
}

impl ParseError {
    /// The 1-based input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingToken { line, .. }
            | Self::InvalidWeight { line, .. }
            | Self::NegativeWeight { line, .. }
            | Self::InvalidEncoding { line } => *line,
        }
    }
}

/// A failure that aborts loading altogether.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),
}
