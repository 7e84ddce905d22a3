use crate::domain::color::Color;
use crate::domain::compositing::pad_rgba;
use crate::domain::image::PaddedImage;
use crate::domain::image_processor_trait::ImageProcessor;
use super::error::InfrastructureError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// `ImageProcessor` built on the `image` crate codecs.
pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }

    // Encoders for these formats reject an alpha channel.
    fn needs_flattening(format: ImageFormat) -> bool {
        matches!(format, ImageFormat::Jpeg)
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn pad_to_square(
        &self,
        image_bytes: Vec<u8>,
        fill_color: Color,
        output_format: ImageFormat,
    ) -> Result<PaddedImage, InfrastructureError> {
        // Format comes from the contents, never from the file name.
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        let input_format = reader.format().ok_or_else(|| {
            InfrastructureError::ImageProcessingError("Unrecognized image data".to_string())
        })?;
        let source = reader.decode().map_err(InfrastructureError::ImageLibError)?.to_rgba8();
        log::debug!(
            "Decoded {:?} source of {}x{}",
            input_format,
            source.width(),
            source.height()
        );

        let (canvas, geometry) = pad_rgba(&source, fill_color)?;
        log::debug!(
            "Padded to {}x{} with source at ({}, {})",
            geometry.final_size,
            geometry.final_size,
            geometry.x,
            geometry.y
        );

        let mut buffer = Cursor::new(Vec::new());
        if Self::needs_flattening(output_format) {
            DynamicImage::ImageRgba8(canvas)
                .to_rgb8()
                .write_to(&mut buffer, output_format)
                .map_err(InfrastructureError::ImageLibError)?;
        } else {
            canvas
                .write_to(&mut buffer, output_format)
                .map_err(InfrastructureError::ImageLibError)?;
        }

        Ok(PaddedImage::new(buffer.into_inner(), geometry, output_format))
    }
}
