mod image_attachment_service;

pub use image_attachment_service::ImageAttachmentService;
