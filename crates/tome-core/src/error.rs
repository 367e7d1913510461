/// Errors that can occur in Tome operations.
#[derive(Debug, thiserror::Error)]
pub enum TomeError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("malformed source document: {0}")]
    MalformedDocument(String),

    #[error("empty vocabulary: {0}")]
    EmptyVocabulary(String),

    #[error("corpus not frozen: {0}")]
    CorpusNotFrozen(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for TomeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
