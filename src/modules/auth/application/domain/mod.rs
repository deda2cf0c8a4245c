pub mod entities;
pub mod otp;
pub mod reset_token;
