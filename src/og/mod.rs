//! Open Graph social-preview card composition.
//!
//! Deterministic, fixed-layout 1200x630 imagery for link previews. The
//! card is composed from static layers (gradient, dot band, title stack,
//! rule, footer); no request input varies the output.
//!
//! - [`OgCard`] - the card renderer
//! - [`palette`] - brand colors and pixel helpers

mod card;
pub mod palette;

pub use card::{CARD_HEIGHT, CARD_WIDTH, OgCard};
