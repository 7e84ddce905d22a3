pub mod error;
pub mod square_icon_service;
