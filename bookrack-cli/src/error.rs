use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Purchases file operation failed
    #[error("{0}")]
    Store(#[from] bookrack_catalog::StoreError),
}
