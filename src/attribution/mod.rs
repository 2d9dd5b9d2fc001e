//! Campaign-attribution continuity for internal navigation.
//!
//! Marketing funnels on the site span several pages (nav → microsite →
//! pilot kit). Links emitted by the page handlers pass through
//! [`rewrite_href`] so that an allow-listed set of campaign parameters
//! follows the visitor across internal clicks, while external links,
//! `mailto:`/`tel:` schemes, and in-page anchors are left untouched.
//!
//! - [`QueryParams`] - ordered multi-map of query-string parameters
//! - [`NavigationTarget`] - parsed internal link target
//! - [`rewrite_href`] - the attribution-preserving rewriter

mod query;
mod rewriter;

pub use query::QueryParams;
pub use rewriter::{ATTRIBUTION_PARAMS, NavigationTarget, TargetParseError, rewrite_href};
