//! Attribution-preserving link rewriting.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::QueryParams;

/// Campaign parameters carried across internal navigation, in the order
/// they are appended to a target that does not already define them.
pub const ATTRIBUTION_PARAMS: [&str; 5] =
    ["utm_source", "utm_medium", "utm_campaign", "utm_content", "from"];

/// Matches URI-scheme prefixes such as `mailto:`, `tel:` or `https:`.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// Synthetic base used to parse relative link targets.
static PARSE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://internal.invalid").unwrap());

/// Errors that can occur while parsing a link target.
#[derive(Debug, thiserror::Error)]
pub enum TargetParseError {
    #[error("Invalid link target: {0}")]
    InvalidTarget(String),

    #[error("Not an internal path: {0}")]
    NotInternal(String),
}

/// An internal link target split into its addressable parts.
///
/// Reconstructing the target with [`fmt::Display`] yields the path, then the
/// `?`-joined query when non-empty, then `#fragment` when non-empty.
#[derive(Debug, Clone)]
pub struct NavigationTarget {
    pub path: String,
    pub query: QueryParams,
    pub fragment: Option<String>,
}

impl NavigationTarget {
    /// Parses an internal path+query+fragment target.
    ///
    /// The empty string is treated as the current page and normalizes to `/`.
    ///
    /// # Errors
    ///
    /// Returns [`TargetParseError::NotInternal`] for absolute URLs and
    /// [`TargetParseError::InvalidTarget`] for text that cannot be resolved
    /// as a path reference.
    pub fn parse(input: &str) -> Result<Self, TargetParseError> {
        let reference = if input.is_empty() { "/" } else { input };

        let url = PARSE_BASE
            .join(reference)
            .map_err(|e| TargetParseError::InvalidTarget(e.to_string()))?;

        // A reference carrying its own scheme or authority resolves away
        // from the synthetic base and is not an internal path.
        if url.scheme() != PARSE_BASE.scheme() || url.host_str() != PARSE_BASE.host_str() {
            return Err(TargetParseError::NotInternal(input.to_string()));
        }

        Ok(Self {
            path: url.path().to_string(),
            query: QueryParams::from_query(url.query().unwrap_or("")),
            fragment: url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(ToString::to_string),
        })
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query.to_query_string())?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Rewrites an internal link target so campaign attribution follows the
/// visitor across pages.
///
/// `current` holds the query parameters of the page emitting the link. Each
/// allow-listed parameter with a non-empty current value is appended to the
/// target unless the target already defines it: explicit values win over
/// inherited ones.
///
/// Targets that carry a URI scheme (`mailto:`, `tel:`, `https:`, ...), are
/// protocol-relative (`//`), or are pure in-page anchors (`#`) pass through
/// unmodified. Text that cannot be parsed as a path is also returned as-is,
/// so a bad href never blocks navigation.
pub fn rewrite_href(target: &str, current: &QueryParams) -> String {
    if SCHEME_REGEX.is_match(target) || target.starts_with("//") || target.starts_with('#') {
        return target.to_string();
    }

    let mut parsed = match NavigationTarget::parse(target) {
        Ok(parsed) => parsed,
        Err(_) => return target.to_string(),
    };

    for name in ATTRIBUTION_PARAMS {
        if parsed.query.contains(name) {
            continue;
        }
        if let Some(value) = current.get(name)
            && !value.is_empty()
        {
            parsed.query.push(name, value);
        }
    }

    parsed.to_string()
}
