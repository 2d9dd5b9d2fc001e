//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod contact;
pub mod health;
pub mod og_image;

pub use contact::contact_handler;
pub use health::health_handler;
pub use og_image::og_image_handler;
