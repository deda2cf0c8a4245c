pub mod auth;
pub mod comment;
pub mod email;
pub mod media;
pub mod post;
