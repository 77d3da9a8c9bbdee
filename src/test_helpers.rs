//! Shared test utilities for the folio test suite.
//!
//! Provides fixture setup, lookups that panic with a clear message on miss,
//! and minimal valid JSON for every section kind.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = load_fixture_content();
//! let resume = find_page(&content, "resume");
//! assert!(!resume.sections.is_empty());
//!
//! let gallery: Section = serde_json::from_value(minimal_section_json(SectionKind::Gallery)).unwrap();
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Content, PageContent};
use crate::load::load;
use crate::section::SectionKind;
use serde_json::{Value, json};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Load and validate the fixture content directory.
pub fn load_fixture_content() -> Content {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    load(&fixtures)
        .unwrap_or_else(|e| panic!("fixture content failed to load: {e}"))
        .content
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a site page by slug. Panics if not found.
pub fn find_page<'a>(content: &'a Content, slug: &str) -> &'a PageContent {
    content.site.page_by_slug(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = content.site.slugs().collect();
        panic!("page '{slug}' not found. Available: {slugs:?}")
    })
}

// =========================================================================
// Minimal documents
// =========================================================================

/// The smallest valid JSON for a section kind.
///
/// Every example has `id` = `"<tag>-section"`, `title` = `"<tag> title"`, no
/// description, and spells out defaulted lists and flags so it serializes
/// back to exactly the same value.
pub fn minimal_section_json(kind: SectionKind) -> Value {
    let tag = kind.as_str();
    let mut value = match kind {
        SectionKind::Figma => json!({
            "items": [{
                "title": "Onboarding flows",
                "tags": [],
                "embedUrl": "https://www.figma.com/embed?embed_host=share&url=https://www.figma.com/file/abc"
            }]
        }),
        SectionKind::Miro => json!({
            "items": [{
                "title": "Journey map",
                "tags": [],
                "embedUrl": "https://miro.com/app/live-embed/uXjVabc="
            }]
        }),
        SectionKind::Video => json!({
            "items": [{
                "title": "Launch film",
                "embedUrl": "https://player.vimeo.com/video/76979871"
            }]
        }),
        SectionKind::Gallery => json!({
            "images": [{ "src": "/media/poster.avif", "alt": "Poster" }]
        }),
        SectionKind::CaseStudy => json!({
            "items": [{ "title": "Checkout rebuild", "outcomes": [], "links": [] }]
        }),
        SectionKind::Pdf => json!({
            "items": [{ "title": "Brand book", "file": "/docs/brand-book.pdf" }]
        }),
        SectionKind::HeroNarrative => json!({
            "narrative": [{ "heading": "Start", "body": "Where it began." }],
            "stats": [{ "label": "Retention", "value": "+18%", "progress": 62.5 }]
        }),
        SectionKind::StoryScroll => json!({
            "slides": [{ "id": "slide-1", "title": "Chapter one", "body": "It starts here." }]
        }),
        SectionKind::Manifesto => json!({
            "tenets": [{ "title": "Ship small", "detail": "Small bets compound." }]
        }),
        SectionKind::Highlights => json!({
            "highlights": [{ "title": "Launch", "description": "Zero to one." }]
        }),
        SectionKind::GrowthLab => json!({
            "experiments": [{ "title": "Referral loop", "description": "Invite flow test.", "tags": [] }]
        }),
        SectionKind::MotionReels => json!({
            "reels": [{ "title": "Logo sting", "file": "/video/sting.mp4" }]
        }),
        SectionKind::Capabilities => json!({
            "capabilities": [{ "title": "Strategy", "description": "Positioning.", "skills": [] }]
        }),
        SectionKind::Resources => json!({
            "enableSearch": false,
            "resources": [],
            "categories": []
        }),
        SectionKind::Contact => json!({
            "cta": { "label": "Say hello", "href": "mailto:hello@example.com" },
            "channels": []
        }),
        SectionKind::CountriesSlideshow => json!({
            "countries": [{ "name": "Japan", "flag": "🇯🇵" }]
        }),
    };

    let obj = value
        .as_object_mut()
        .unwrap_or_else(|| panic!("minimal {tag} example must be an object"));
    obj.insert("id".to_string(), json!(format!("{tag}-section")));
    obj.insert("type".to_string(), json!(tag));
    obj.insert("title".to_string(), json!(format!("{tag} title")));
    value
}

/// The smallest valid `content.json`: one gallery section, no floating words.
pub fn minimal_portfolio_json() -> Value {
    json!({
        "name": "Ada Example",
        "tagline": "Designer and growth lead",
        "signature": "AE",
        "hero": {
            "headline": "Designing systems that grow",
            "subheading": "Brand, product, and growth under one roof.",
            "ctaPrimary": { "label": "See work", "href": "#portfolio" },
            "ctaSecondary": { "label": "Get in touch", "href": "mailto:ada@example.com" }
        },
        "techStack": {
            "title": "Toolkit",
            "columns": [{ "heading": "Design", "items": ["Figma"] }]
        },
        "sections": [minimal_section_json(SectionKind::Gallery)],
        "socials": [{ "label": "GitHub", "href": "https://github.com/ada" }]
    })
}
