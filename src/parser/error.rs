use std::{error, fmt};

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that stop a whole input from being read. Malformed lines
/// are not errors; the parsers skip them.
#[derive(Debug)]
pub enum GraphError {
    /// Wrapper for an IO error.
    IOError(std::io::Error),
    /// A table is missing a column it needs. Includes the column
    /// name.
    MissingColumn(&'static str),
    /// A format tag that isn't one of the supported dialects.
    UnknownFormat(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GraphError as GE;
        match self {
            GE::IOError(err) => write!(f, "IO error: {}", err),
            GE::MissingColumn(col) => {
                write!(f, "Table is missing the `{}` column", col)
            }
            GE::UnknownFormat(tag) => write!(
                f,
                "Unknown graph format '{}', expected one of \
                 'abyss-dot', 'flye-dot', 'gfa'",
                tag
            ),
        }
    }
}

impl From<std::io::Error> for GraphError {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl error::Error for GraphError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GraphError::IOError(err) => Some(err),
            _ => None,
        }
    }
}
