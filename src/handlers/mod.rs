//! HTTP handlers for the public surface.

pub mod health;
pub mod home;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use home::home_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use shorten::shorten_handler;
