//! Error representations
use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeneralError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no local IP address found")]
    AddressNotFound,
}

/// Error for parsing colors, case modes, and format names.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    context: Box<ParseContext>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            source: None,
        }
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    pub fn with_expected<S: Into<String>>(mut self, value: S) -> Self {
        self.context.expected = Some(value.into());
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn snippet(&self) -> Option<&str> {
        self.context.snippet.as_deref()
    }

    pub fn expected(&self) -> Option<&str> {
        self.context.expected.as_deref()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}{}", self.kind, self.context)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(value: ParseErrorKind) -> Self {
        Self::new(value)
    }
}

impl From<std::num::ParseIntError> for ParseError {
    fn from(value: std::num::ParseIntError) -> Self {
        ParseError::new(ParseErrorKind::InvalidNumber).with_source(value)
    }
}

impl From<std::num::ParseFloatError> for ParseError {
    fn from(value: std::num::ParseFloatError) -> Self {
        ParseError::new(ParseErrorKind::InvalidNumber).with_source(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    InvalidHex,
    Syntax,
    InvalidNumber,
    UnknownColor,
    UnknownMode,
    UnknownFormat,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::InvalidHex => "invalid hex color",
            Self::Syntax => "syntax error",
            Self::InvalidNumber => "invalid number",
            Self::UnknownColor => "unrecognized color",
            Self::UnknownMode => "unknown case mode",
            Self::UnknownFormat => "unknown color format",
        };

        f.write_str(value)
    }
}

#[derive(Debug, Default)]
struct ParseContext {
    snippet: Option<String>,
    expected: Option<String>,
}

impl Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(snippet) = &self.snippet {
            write!(f, " '{}'", snippet)?;
        }

        if let Some(expected) = &self.expected {
            write!(f, " (expected {})", expected)?;
        }

        Ok(())
    }
}
