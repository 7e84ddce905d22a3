//! Pads an image onto a centered square canvas for launcher and splash icons.
//!
//! [`pad_to_square`] is the one-call entry point. Callers that want their own
//! storage or codec build a [`SquareIconService`] directly.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::path::Path;
use std::sync::Arc;

pub use application::error::ApplicationError;
pub use application::square_icon_service::SquareIconService;
pub use domain::color::Color;
pub use domain::image::PaddedImage;

use infrastructure::file_storage::LocalFileStorage;
use infrastructure::image_processor::DefaultImageProcessor;

/// Service wired with the `image` codecs and the local filesystem.
pub fn default_service() -> SquareIconService {
    SquareIconService::new(
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(LocalFileStorage::new()),
    )
}

pub fn pad_to_square(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    fill_color: Color,
) -> Result<PaddedImage, ApplicationError> {
    default_service().pad_to_square(source.as_ref(), destination.as_ref(), fill_color)
}
