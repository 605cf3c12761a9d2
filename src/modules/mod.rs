pub mod auth;
pub mod thumbnail;
pub mod video;
