use std::fmt;

use rgen_syntax::SyntaxError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Syntax(SyntaxError),
    /// The host regex engine refused the rendered pattern.
    Regex {
        pattern: String,
        msg: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Syntax(e) => write!(f, "syntax error {e}"),
            Error::Regex { pattern, msg } => {
                write!(f, "host regex rejected {pattern:?}: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Syntax(e) => Some(e),
            Error::Regex { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}
