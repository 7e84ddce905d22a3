use std::path::PathBuf;

use thiserror::Error;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),

    // Details come through `source()`; `{:#}` prints the whole chain.
    #[error("Domain error occurred")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred")]
    InfrastructureError(#[from] InfrastructureError),
}
