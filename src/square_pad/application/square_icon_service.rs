use std::path::Path;
use std::sync::Arc;

use super::error::ApplicationError;
use image::ImageFormat;

use crate::domain::color::Color;
use crate::domain::image::PaddedImage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::image_store_trait::ImageStore;

/// Runs one source image through read, pad, encode and write.
pub struct SquareIconService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    image_store: Arc<dyn ImageStore + Send + Sync>,
}

impl SquareIconService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        image_store: Arc<dyn ImageStore + Send + Sync>,
    ) -> Self {
        Self {
            image_processor,
            image_store,
        }
    }

    fn map_path_to_format(&self, destination: &Path) -> Result<ImageFormat, ApplicationError> {
        ImageFormat::from_path(destination).map_err(|_| {
            ApplicationError::UnsupportedOutputFormat(destination.display().to_string())
        })
    }

    /// Pads `source` into a square canvas and writes it to `destination`.
    ///
    /// The destination is only touched once the padded image has been fully
    /// encoded in memory.
    pub fn pad_to_square(
        &self,
        source: &Path,
        destination: &Path,
        fill_color: Color,
    ) -> Result<PaddedImage, ApplicationError> {
        log::debug!(
            "SquareIconService: padding {} -> {} with fill {}",
            source.display(),
            destination.display(),
            fill_color
        );

        if !self.image_store.exists(source) {
            return Err(ApplicationError::SourceNotFound(source.to_path_buf()));
        }
        let output_format = self.map_path_to_format(destination)?;

        let image_data = self.image_store.read_image(source)?;
        let padded = self
            .image_processor
            .pad_to_square(image_data, fill_color, output_format)?;
        self.image_store.save_image(destination, &padded.data)?;

        log::debug!(
            "SquareIconService: wrote {}x{} {:?} image",
            padded.side(),
            padded.side(),
            padded.format
        );
        Ok(padded)
    }
}
