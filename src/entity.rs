//! Page-level entities: projects, experience entries, and resources.
//!
//! These live alongside a page's sections rather than inside them; page
//! assembly renders them as a project index and an experience timeline.

use crate::validate::{FieldPath, Validate, ValidationError, check_optional_href};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Ordered; the same tag may appear on many projects.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Validate for Project {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        check_optional_href(self.link.as_deref(), &at.field("link"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    /// Free-text range, e.g. `"2021 - Present"`.
    pub duration: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
}

impl Validate for Experience {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// What a page-level [`Resource`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tool,
    Article,
    Template,
    Course,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Tool => "tool",
            ResourceKind::Article => "article",
            ResourceKind::Template => "template",
            ResourceKind::Course => "course",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub description: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Validate for Resource {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}
