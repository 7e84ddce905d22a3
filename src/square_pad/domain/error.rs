use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid fill color: {0}")]
    InvalidColor(String),

    #[error("Source image has zero width or height")]
    EmptyImage,

    #[error("Padded canvas of {side}x{side} pixels exceeds the allocation limit")]
    CanvasTooLarge { side: u64 },
}
