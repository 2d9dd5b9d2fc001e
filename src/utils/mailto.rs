//! Mailto-link construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped inside mailto query components.
///
/// Mirrors `encodeURIComponent`: alphanumerics and the marks
/// `- _ . ! ~ * ' ( )` stay bare, everything else is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a `mailto:` URI with encoded subject and body parameters.
///
/// The result carries a URI scheme, so the link rewriter passes it through
/// untouched.
pub fn mailto_link(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        utf8_percent_encode(subject, COMPONENT),
        utf8_percent_encode(body, COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::{QueryParams, rewrite_href};

    #[test]
    fn test_encodes_subject_and_body() {
        let link = mailto_link("owner@example.com", "E4X | Launch updates", "Hi,\n\nAdd me.\n");

        assert_eq!(
            link,
            "mailto:owner@example.com?subject=E4X%20%7C%20Launch%20updates&body=Hi%2C%0A%0AAdd%20me.%0A"
        );
    }

    #[test]
    fn test_unreserved_marks_stay_bare() {
        let link = mailto_link("owner@example.com", "a-b_c.d!e~f*g'h(i)j", "");

        assert!(link.contains("subject=a-b_c.d!e~f*g'h(i)j"));
    }

    #[test]
    fn test_rewriter_leaves_mailto_untouched() {
        let current: QueryParams = [("utm_source", "main-nav")].into_iter().collect();
        let link = mailto_link("owner@example.com", "Hello", "World");

        assert_eq!(rewrite_href(&link, &current), link);
    }
}
