//! Viewport-observation capability supplied by the page host.

/// Hysteresis configuration for region observation.
///
/// `root_margin` biases the viewport edges before intersection is computed,
/// so the region counts as "left" slightly before it fully scrolls away;
/// `threshold` is the fraction of the region's area that must be visible to
/// count as intersecting. Both are fixed when the controller mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    pub root_margin: String,
    pub threshold: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: "-20% 0px 0px 0px".to_string(),
            threshold: 0.1,
        }
    }
}

/// One visibility change reported by the observation facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Whether the observed region currently intersects the (biased) viewport.
    pub is_intersecting: bool,
    /// Fraction of the region's area inside the viewport.
    pub ratio: f32,
}

/// Callback invoked on every visibility change, in delivery order.
pub type ObserverCallback = Box<dyn FnMut(IntersectionEntry)>;

/// An active observation. Dropping the subscription unsubscribes, so the
/// observation window can never outlive the controller that opened it.
pub trait Subscription {}

/// Capability interface the page host implements to give the controller
/// access to region lookup and intersection observation.
///
/// Production hosts delegate to the runtime's intersection-observation
/// facility; tests substitute a double that fires entries on demand.
pub trait ViewportHost {
    /// Returns whether a region with the given id exists in the document.
    fn region_exists(&self, region_id: &str) -> bool;

    /// Starts observing `region_id` under `config`, delivering visibility
    /// changes to `callback` until the returned subscription is dropped.
    fn subscribe(
        &self,
        region_id: &str,
        config: ObserverConfig,
        callback: ObserverCallback,
    ) -> Box<dyn Subscription>;
}
