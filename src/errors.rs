/// Failure kinds of the submission pipeline. Each variant carries the full
/// message shown to the operator.
#[derive(Clone, Debug)]
pub enum Error {
    NotFound(String),
    Schema(String),
    Parse(String),
    Io(String),
    Usage(String),
}

pub use Error::*;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFound(message) | Schema(message) | Parse(message) | Io(message)
            | Usage(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for Error {}
