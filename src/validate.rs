//! Field paths and the rule-checking pass that runs after decoding.
//!
//! Content is accepted in two phases. Serde decodes the shape (required
//! fields, primitive types, unknown fields, unknown `type` tags); then every
//! decoded value is walked by its [`Validate`] impl, which checks the rules
//! serde cannot express: link hrefs, absolute URLs, one-of media sources,
//! bounded percentages, unique section ids.
//!
//! Both phases report the first failure as a [`ValidationError`] carrying a
//! [`FieldPath`] to the offending field:
//!
//! ```text
//! pages.home.sections[3]: missing field `embedUrl`
//! sections[3].items[0].embedUrl: expected URL
//! ```

use crate::link;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// A dotted/indexed path into a content document, e.g. `sections[3].embedUrl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// The empty path (document root).
    pub fn root() -> Self {
        Self::default()
    }

    /// Descend into a named field.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Descend into a list element.
    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{}]", self.0, idx))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Content did not match its declared shape or broke a content rule.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: FieldPath,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

/// Rule checks for a decoded value, reporting the first failure at `at`.
pub trait Validate {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        for (idx, item) in self.iter().enumerate() {
            item.validate(&at.index(idx))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(at),
            None => Ok(()),
        }
    }
}

/// Decode one JSON value into `T`, attributing serde's message to `at`.
pub fn decode<T: DeserializeOwned>(
    value: serde_json::Value,
    at: &FieldPath,
) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|e| ValidationError::new(at.clone(), e.to_string()))
}

/// Decode every element of a JSON list on its own so errors name the index.
pub fn decode_list<T: DeserializeOwned>(
    values: Vec<serde_json::Value>,
    at: &FieldPath,
) -> Result<Vec<T>, ValidationError> {
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| decode(value, &at.index(idx)))
        .collect()
}

/// `href` must be an anchor, a non-empty `mailto:`/`tel:`, or an absolute URL.
pub fn check_href(href: &str, at: &FieldPath) -> Result<(), ValidationError> {
    if link::is_valid_href(href) {
        Ok(())
    } else {
        Err(ValidationError::new(
            at.clone(),
            format!("invalid link href `{href}`"),
        ))
    }
}

/// Like [`check_href`] for optional fields.
pub fn check_optional_href(href: Option<&str>, at: &FieldPath) -> Result<(), ValidationError> {
    href.map_or(Ok(()), |h| check_href(h, at))
}

/// Value must parse as an absolute URL.
pub fn check_url(value: &str, at: &FieldPath) -> Result<(), ValidationError> {
    if link::is_absolute_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new(at.clone(), "expected URL"))
    }
}

/// Percentages are rejected outside 0–100, never clamped.
pub fn check_percent(value: f64, at: &FieldPath) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            at.clone(),
            format!("expected a value between 0 and 100, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn path_builds_dotted_and_indexed_segments() {
        let path = FieldPath::root()
            .field("sections")
            .index(3)
            .field("embedUrl");
        assert_eq!(path.as_str(), "sections[3].embedUrl");
    }

    #[test]
    fn root_path_displays_placeholder() {
        assert_eq!(FieldPath::root().to_string(), "<root>");
    }

    #[test]
    fn error_display_is_path_then_message() {
        let err = ValidationError::new(FieldPath::root().field("cta").field("href"), "bad");
        assert_eq!(err.to_string(), "cta.href: bad");
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Named {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn decode_list_names_the_failing_index() {
        let values = vec![
            serde_json::json!({ "name": "ok" }),
            serde_json::json!({ "nam": "typo" }),
        ];
        let err = decode_list::<Named>(values, &FieldPath::root().field("items")).unwrap_err();
        assert_eq!(err.path.as_str(), "items[1]");
        assert!(err.message.contains("unknown field `nam`"));
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        let at = FieldPath::root();
        assert!(check_percent(0.0, &at).is_ok());
        assert!(check_percent(100.0, &at).is_ok());
        assert!(check_percent(-0.5, &at).is_err());
        assert!(check_percent(100.1, &at).is_err());
    }

    #[test]
    fn url_check_reports_expected_url() {
        let at = FieldPath::root().field("embedUrl");
        let err = check_url("figma.com/file/abc", &at).unwrap_err();
        assert_eq!(err.to_string(), "embedUrl: expected URL");
    }

    #[test]
    fn option_and_vec_delegate() {
        struct AlwaysBad;
        impl Validate for AlwaysBad {
            fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
                Err(ValidationError::new(at.clone(), "bad"))
            }
        }
        let at = FieldPath::root().field("xs");
        assert!(None::<AlwaysBad>.validate(&at).is_ok());
        assert!(Vec::<AlwaysBad>::new().validate(&at).is_ok());
        let err = vec![AlwaysBad].validate(&at).unwrap_err();
        assert_eq!(err.path.as_str(), "xs[0]");
    }
}
