#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("mounting a router to a non-literal base is not supported")]
    NonLiteralMount,

    #[error("a route needs at least one handler")]
    EmptyHandlers,

    #[error("capture name can not be empty")]
    EmptyCaptureName,

    #[error("wildcard pattern can only appear at end")]
    MisplacedWildcard,

    #[error("unknown method: {0:?}")]
    UnknownMethod(String),

    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
