use crate::domain::color::Color;
use crate::domain::image::PaddedImage;
use crate::infrastructure::error::InfrastructureError;
use image::ImageFormat;

/// Decodes source bytes, pads them to a square and encodes the result.
pub trait ImageProcessor {
    fn pad_to_square(
        &self,
        image_bytes: Vec<u8>,
        fill_color: Color,
        output_format: ImageFormat,
    ) -> Result<PaddedImage, InfrastructureError>;
}
