pub mod color;
pub mod compositing;
pub mod error;
pub mod geometry;
pub mod image;
pub mod image_processor_trait;
pub mod image_store_trait;
