//! Page and site aggregates, and the parsers that build them from JSON.
//!
//! Two document shapes are accepted:
//!
//! - **Portfolio** (`content.json`): the single-page home document: name,
//!   hero, tech stack, an ordered section list, socials.
//! - **Site** (`site-content.json`): `{ "pages": { "<slug>": PageContent } }`.
//!
//! Both parsers are all-or-nothing: the first shape or rule failure is
//! returned as a [`ValidationError`] with a path to the field, and no content
//! is produced. The parsed values are immutable; there is no write path.
//!
//! ## Slugs
//!
//! The key under `pages` is authoritative. A page whose `slug` field disagrees
//! with its key is stored with `slug` rewritten to the key, so lookups and
//! generated URLs always agree.

use crate::entity::{Experience, Project, Resource};
use crate::link::Link;
use crate::section::{Section, validate_sections};
use crate::validate::{FieldPath, Validate, ValidationError, decode, decode_list};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid content: {0}")]
    Validation(#[from] ValidationError),
}

// ============================================================================
// Site content (multi-page)
// ============================================================================

/// Hero overrides for a page; anything unset falls back to page fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHero {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Background name; see [`crate::generate::HeroBackground`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<PageHero>,
    pub sections: Vec<Section>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub resources: Vec<Resource>,
}

/// Wire shape of a page with lists left undecoded, so each element can be
/// decoded under its own path.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPage {
    title: String,
    description: String,
    slug: String,
    #[serde(default)]
    hero: Option<PageHero>,
    #[serde(default)]
    sections: Vec<Value>,
    #[serde(default)]
    projects: Vec<Value>,
    #[serde(default)]
    experiences: Vec<Value>,
    #[serde(default)]
    resources: Vec<Value>,
}

impl PageContent {
    fn from_raw(key: &str, raw: RawPage, at: &FieldPath) -> Result<Self, ValidationError> {
        let page = PageContent {
            title: raw.title,
            description: raw.description,
            slug: if raw.slug == key {
                raw.slug
            } else {
                key.to_string()
            },
            hero: raw.hero,
            sections: decode_list(raw.sections, &at.field("sections"))?,
            projects: decode_list(raw.projects, &at.field("projects"))?,
            experiences: decode_list(raw.experiences, &at.field("experiences"))?,
            resources: decode_list(raw.resources, &at.field("resources"))?,
        };
        page.validate(at)?;
        Ok(page)
    }

    /// Featured projects first, each group in authored order.
    pub fn projects_by_feature(&self) -> Vec<&Project> {
        let (mut featured, rest): (Vec<&Project>, Vec<&Project>) =
            self.projects.iter().partition(|p| p.featured);
        featured.extend(rest);
        featured
    }
}

impl Validate for PageContent {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        validate_sections(&self.sections, &at.field("sections"))?;
        self.projects.validate(&at.field("projects"))?;
        self.experiences.validate(&at.field("experiences"))?;
        self.resources.validate(&at.field("resources"))
    }
}

/// Every page of the site, keyed and ordered by slug as authored.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pages: Vec<PageContent>,
    by_slug: BTreeMap<String, usize>,
}

impl SiteContent {
    /// Look up a page. An unknown slug is a normal "not found", not an error.
    pub fn page_by_slug(&self, slug: &str) -> Option<&PageContent> {
        self.by_slug.get(slug).map(|&idx| &self.pages[idx])
    }

    /// All slugs in document order (not sorted).
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.slug.as_str())
    }

    /// All pages in document order.
    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Parse and validate a `site-content.json` document.
pub fn parse_site_content(raw: &str) -> Result<SiteContent, ContentError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(site_content_from_value(value)?)
}

/// Validate an already-parsed site document.
pub fn site_content_from_value(value: Value) -> Result<SiteContent, ValidationError> {
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawSite {
        pages: serde_json::Map<String, Value>,
    }

    let root = FieldPath::root();
    let raw: RawSite = decode(value, &root)?;
    let pages_at = root.field("pages");

    let mut site = SiteContent::default();
    for (key, page_value) in raw.pages {
        let at = pages_at.field(&key);
        check_slug(&key, &at)?;
        let raw_page: RawPage = decode(page_value, &at)?;
        let page = PageContent::from_raw(&key, raw_page, &at)?;
        site.by_slug.insert(key, site.pages.len());
        site.pages.push(page);
    }
    Ok(site)
}

/// Slugs become output directories, so each must be one plain path segment.
fn check_slug(slug: &str, at: &FieldPath) -> Result<(), ValidationError> {
    let invalid = slug.is_empty() || slug == "." || slug == ".." || slug.contains(['/', '\\']);
    if invalid {
        return Err(ValidationError::new(
            at.clone(),
            format!("invalid page slug '{slug}': expected a single path segment"),
        ));
    }
    Ok(())
}

// ============================================================================
// Portfolio content (single page)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioHero {
    pub headline: String,
    pub subheading: String,
    pub cta_primary: Link,
    pub cta_secondary: Link,
    #[serde(default)]
    pub floating_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechColumn {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechStack {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub columns: Vec<TechColumn>,
}

/// A footer social link. The href is rendered as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub name: String,
    pub tagline: String,
    /// Short mark shown in the header and footer.
    pub signature: String,
    pub hero: PortfolioHero,
    pub tech_stack: TechStack,
    pub sections: Vec<Section>,
    pub socials: Vec<SocialLink>,
}

impl Validate for PortfolioContent {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        let hero = at.field("hero");
        self.hero.cta_primary.validate(&hero.field("ctaPrimary"))?;
        self.hero
            .cta_secondary
            .validate(&hero.field("ctaSecondary"))?;
        validate_sections(&self.sections, &at.field("sections"))
    }
}

/// Parse and validate a `content.json` document.
pub fn parse_portfolio_content(raw: &str) -> Result<PortfolioContent, ContentError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(portfolio_content_from_value(value)?)
}

/// Validate an already-parsed portfolio document.
pub fn portfolio_content_from_value(value: Value) -> Result<PortfolioContent, ValidationError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct RawPortfolio {
        name: String,
        tagline: String,
        signature: String,
        hero: PortfolioHero,
        tech_stack: TechStack,
        sections: Vec<Value>,
        #[serde(default)]
        socials: Vec<SocialLink>,
    }

    let root = FieldPath::root();
    let raw: RawPortfolio = decode(value, &root)?;
    let content = PortfolioContent {
        name: raw.name,
        tagline: raw.tagline,
        signature: raw.signature,
        hero: raw.hero,
        tech_stack: raw.tech_stack,
        sections: decode_list(raw.sections, &root.field("sections"))?,
        socials: raw.socials,
    };
    content.validate(&root)?;
    Ok(content)
}

// ============================================================================
// Combined content
// ============================================================================

/// Everything loaded from a content directory, built once at startup and
/// passed by reference to whatever renders it.
#[derive(Debug, Clone, Default)]
pub struct Content {
    /// Home page document, when `content.json` exists.
    pub portfolio: Option<PortfolioContent>,
    /// Multi-page document; empty when `site-content.json` is absent.
    pub site: SiteContent,
}
