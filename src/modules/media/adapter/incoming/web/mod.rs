mod image_payload;

pub use image_payload::{map_image_error, ImagePayload};
