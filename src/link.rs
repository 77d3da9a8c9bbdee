//! Link targets shared by every content shape that points somewhere.

use crate::validate::{FieldPath, Validate, ValidationError, check_href};
use serde::{Deserialize, Serialize};

/// A labelled link, used for calls to action and case-study links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

impl Link {
    /// Whether the link should open outside the site.
    ///
    /// An explicit `external` flag wins; otherwise absolute `http(s)` URLs
    /// are external and anchors, `mailto:` and `tel:` are not.
    pub fn is_external(&self) -> bool {
        self.external.unwrap_or_else(|| {
            self.href.starts_with("http://") || self.href.starts_with("https://")
        })
    }
}

impl Validate for Link {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        check_href(&self.href, &at.field("href"))
    }
}

/// Accepts `#`, `#anchor`, `mailto:x`, `tel:x`, or any absolute URL.
pub fn is_valid_href(href: &str) -> bool {
    if href == "#" {
        return true;
    }
    if let Some(anchor) = href.strip_prefix('#') {
        return !anchor.is_empty();
    }
    if let Some(address) = href.strip_prefix("mailto:") {
        return !address.is_empty();
    }
    if let Some(number) = href.strip_prefix("tel:") {
        return !number.is_empty();
    }
    is_absolute_url(href)
}

/// Whether `value` parses as an absolute URL (scheme included).
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
