//! HTML template rendering handlers for the public pages.

pub mod e4x;
pub mod home;
pub mod pilot_kit;

pub use e4x::e4x_handler;
pub use home::home_handler;
pub use pilot_kit::pilot_kit_handler;
