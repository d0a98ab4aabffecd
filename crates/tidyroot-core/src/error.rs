use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("removal target must not be empty")]
    EmptyTarget,

    #[error("removal target '{0}' must be relative to the base path")]
    AbsoluteTarget(String),

    #[error("removal target '{0}' escapes the base path")]
    EscapingTarget(String),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
