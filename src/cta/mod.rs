//! Sticky call-to-action controller.
//!
//! The E4X page shows a persistent compact call-to-action bar once the hero
//! section has been scrolled out of view, and hides it again while the hero
//! (and its primary call-to-action) is on screen. The controller is a small
//! two-state machine driven by visibility callbacks; the surrounding page
//! runtime supplies region lookup and intersection observation through the
//! [`ViewportHost`] capability so the controller stays testable with a
//! double and portable across hosts.
//!
//! - [`ViewportHost`] / [`Subscription`] - host-supplied observation capability
//! - [`ObserverConfig`] - margin/threshold hysteresis settings
//! - [`StickyCta`] - the mounted controller instance

mod controller;
mod observer;

pub use controller::{CtaState, HERO_REGION_ID, StickyCta};
pub use observer::{IntersectionEntry, ObserverCallback, ObserverConfig, Subscription, ViewportHost};
