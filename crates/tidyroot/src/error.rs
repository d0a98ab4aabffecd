use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] tidyroot_operations::OperationError),

    #[error("failed to write report")]
    Report(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
