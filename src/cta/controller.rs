//! Two-state controller for the persistent call-to-action bar.

use std::cell::Cell;
use std::rc::Rc;

use super::observer::{ObserverConfig, Subscription, ViewportHost};

/// Region id of the hero section observed by the production pages.
pub const HERO_REGION_ID: &str = "hero";

/// Render state of the sticky call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaState {
    /// The anchor region is on screen; the bar is not rendered.
    Hidden,
    /// The anchor region has left the viewport; the bar is rendered.
    Shown,
}

/// Mounted sticky call-to-action controller.
///
/// Holds at most one observation subscription, opened at mount and released
/// when the controller is dropped. State transitions are applied idempotently
/// from visibility callbacks: a re-delivered entry for the current state is
/// a no-op.
///
/// When the anchor region cannot be located at mount time the controller
/// enters [`CtaState::Shown`] immediately and observes nothing - a missing
/// anchor must not hide the affordance permanently.
pub struct StickyCta {
    state: Rc<Cell<CtaState>>,
    subscription: Option<Box<dyn Subscription>>,
}

impl StickyCta {
    /// Mounts the controller against `region_id` with the production
    /// margin/threshold configuration.
    pub fn mount(host: &dyn ViewportHost, region_id: &str) -> Self {
        Self::mount_with_config(host, region_id, ObserverConfig::default())
    }

    /// Mounts the controller with an explicit observer configuration.
    pub fn mount_with_config(
        host: &dyn ViewportHost,
        region_id: &str,
        config: ObserverConfig,
    ) -> Self {
        if !host.region_exists(region_id) {
            return Self {
                state: Rc::new(Cell::new(CtaState::Shown)),
                subscription: None,
            };
        }

        let state = Rc::new(Cell::new(CtaState::Hidden));
        let callback_state = Rc::clone(&state);

        let subscription = host.subscribe(
            region_id,
            config,
            Box::new(move |entry| {
                let next = if entry.is_intersecting {
                    CtaState::Hidden
                } else {
                    CtaState::Shown
                };
                callback_state.set(next);
            }),
        );

        Self {
            state,
            subscription: Some(subscription),
        }
    }

    /// Current render state.
    pub fn state(&self) -> CtaState {
        self.state.get()
    }

    /// Whether the call-to-action bar should be rendered.
    pub fn is_visible(&self) -> bool {
        self.state.get() == CtaState::Shown
    }

    /// Whether an observation subscription is currently held.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::{IntersectionEntry, ObserverCallback};
    use std::cell::RefCell;

    /// Test double standing in for the host's observation facility.
    #[derive(Default)]
    struct FakeHost {
        regions: Vec<String>,
        callback: Rc<RefCell<Option<ObserverCallback>>>,
        subscribed: Rc<Cell<bool>>,
        configs: RefCell<Vec<ObserverConfig>>,
    }

    impl FakeHost {
        fn with_region(region_id: &str) -> Self {
            Self {
                regions: vec![region_id.to_string()],
                ..Self::default()
            }
        }

        fn fire(&self, entry: IntersectionEntry) {
            let mut callback = self.callback.borrow_mut();
            callback
                .as_mut()
                .expect("no active subscription")(entry);
        }
    }

    struct FakeSubscription {
        callback: Rc<RefCell<Option<ObserverCallback>>>,
        subscribed: Rc<Cell<bool>>,
    }

    impl Subscription for FakeSubscription {}

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.callback.borrow_mut().take();
            self.subscribed.set(false);
        }
    }

    impl ViewportHost for FakeHost {
        fn region_exists(&self, region_id: &str) -> bool {
            self.regions.iter().any(|r| r == region_id)
        }

        fn subscribe(
            &self,
            _region_id: &str,
            config: ObserverConfig,
            callback: ObserverCallback,
        ) -> Box<dyn Subscription> {
            self.configs.borrow_mut().push(config);
            *self.callback.borrow_mut() = Some(callback);
            self.subscribed.set(true);
            Box::new(FakeSubscription {
                callback: Rc::clone(&self.callback),
                subscribed: Rc::clone(&self.subscribed),
            })
        }
    }

    fn left_viewport() -> IntersectionEntry {
        IntersectionEntry {
            is_intersecting: false,
            ratio: 0.05,
        }
    }

    fn entered_viewport() -> IntersectionEntry {
        IntersectionEntry {
            is_intersecting: true,
            ratio: 0.4,
        }
    }

    #[test]
    fn test_initial_state_is_hidden() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let cta = StickyCta::mount(&host, HERO_REGION_ID);

        assert_eq!(cta.state(), CtaState::Hidden);
        assert!(!cta.is_visible());
        assert!(cta.is_observing());
    }

    #[test]
    fn test_shows_when_region_leaves_viewport() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let cta = StickyCta::mount(&host, HERO_REGION_ID);

        host.fire(left_viewport());

        assert_eq!(cta.state(), CtaState::Shown);
        assert!(cta.is_visible());
    }

    #[test]
    fn test_hides_again_on_reentry() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let cta = StickyCta::mount(&host, HERO_REGION_ID);

        host.fire(left_viewport());
        host.fire(entered_viewport());

        assert_eq!(cta.state(), CtaState::Hidden);
    }

    #[test]
    fn test_redelivered_entry_is_noop() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let cta = StickyCta::mount(&host, HERO_REGION_ID);

        host.fire(left_viewport());
        host.fire(left_viewport());

        assert_eq!(cta.state(), CtaState::Shown);
    }

    #[test]
    fn test_missing_region_fails_visible() {
        let host = FakeHost::default();
        let cta = StickyCta::mount(&host, HERO_REGION_ID);

        assert_eq!(cta.state(), CtaState::Shown);
        assert!(!cta.is_observing());
        assert!(!host.subscribed.get());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let cta = StickyCta::mount(&host, HERO_REGION_ID);
        assert!(host.subscribed.get());

        drop(cta);

        assert!(!host.subscribed.get());
        assert!(host.callback.borrow().is_none());
    }

    #[test]
    fn test_mount_passes_production_config() {
        let host = FakeHost::with_region(HERO_REGION_ID);
        let _cta = StickyCta::mount(&host, HERO_REGION_ID);

        let configs = host.configs.borrow();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].root_margin, "-20% 0px 0px 0px");
        assert_eq!(configs[0].threshold, 0.1);
    }
}
