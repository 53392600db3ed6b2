/// Errors that can occur while loading resources or building the index.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("lexicon error: {0}")]
    Lexicon(String),
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
