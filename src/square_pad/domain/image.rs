use image::ImageFormat;

use crate::domain::geometry::CanvasGeometry;

/// An encoded, padded square image ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedImage {
    pub data: Vec<u8>,
    pub geometry: CanvasGeometry,
    pub format: ImageFormat,
}

impl PaddedImage {
    pub fn new(data: Vec<u8>, geometry: CanvasGeometry, format: ImageFormat) -> Self {
        Self {
            data,
            geometry,
            format,
        }
    }

    pub fn side(&self) -> u32 {
        self.geometry.final_size
    }
}
