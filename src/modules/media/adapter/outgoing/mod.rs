mod disabled_image_storage;
mod http_image_storage;

pub use disabled_image_storage::DisabledImageStorage;
pub use http_image_storage::HttpImageStorage;
