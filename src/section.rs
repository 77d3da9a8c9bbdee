//! The section union: every typed content block a page can contain.
//!
//! A page is an ordered list of [`Section`]s. Each section is tagged on the
//! wire by its `type` field, which selects one of sixteen variant shapes:
//!
//! ```json
//! { "id": "work", "type": "gallery", "title": "Selected work",
//!   "images": [{ "src": "/img/a.avif", "alt": "Poster" }] }
//! ```
//!
//! Every variant shares `id`, `title`, and an optional `description`
//! (exposed through [`SectionCommon`]); the rest of the payload is
//! variant-specific. Unknown tags and unknown fields fail decoding.
//!
//! Renderers are registered per variant struct through [`SectionVariant`],
//! which ties a struct to its [`SectionKind`] and recovers it from a
//! [`Section`] without casts.

use crate::link::Link;
use crate::validate::{
    FieldPath, Validate, ValidationError, check_href, check_optional_href, check_percent,
    check_url,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Kinds and the union
// ============================================================================

/// The `type` tag of a section, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Figma,
    Miro,
    Video,
    Gallery,
    CaseStudy,
    Pdf,
    HeroNarrative,
    StoryScroll,
    Manifesto,
    Highlights,
    GrowthLab,
    MotionReels,
    Capabilities,
    Resources,
    Contact,
    CountriesSlideshow,
}

impl SectionKind {
    pub const ALL: [SectionKind; 16] = [
        SectionKind::Figma,
        SectionKind::Miro,
        SectionKind::Video,
        SectionKind::Gallery,
        SectionKind::CaseStudy,
        SectionKind::Pdf,
        SectionKind::HeroNarrative,
        SectionKind::StoryScroll,
        SectionKind::Manifesto,
        SectionKind::Highlights,
        SectionKind::GrowthLab,
        SectionKind::MotionReels,
        SectionKind::Capabilities,
        SectionKind::Resources,
        SectionKind::Contact,
        SectionKind::CountriesSlideshow,
    ];

    /// The wire tag, e.g. `"case-study"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Figma => "figma",
            SectionKind::Miro => "miro",
            SectionKind::Video => "video",
            SectionKind::Gallery => "gallery",
            SectionKind::CaseStudy => "case-study",
            SectionKind::Pdf => "pdf",
            SectionKind::HeroNarrative => "hero-narrative",
            SectionKind::StoryScroll => "story-scroll",
            SectionKind::Manifesto => "manifesto",
            SectionKind::Highlights => "highlights",
            SectionKind::GrowthLab => "growth-lab",
            SectionKind::MotionReels => "motion-reels",
            SectionKind::Capabilities => "capabilities",
            SectionKind::Resources => "resources",
            SectionKind::Contact => "contact",
            SectionKind::CountriesSlideshow => "countries-slideshow",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed block of page content, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    Figma(FigmaSection),
    Miro(MiroSection),
    Video(VideoSection),
    Gallery(GallerySection),
    CaseStudy(CaseStudySection),
    Pdf(PdfSection),
    HeroNarrative(HeroNarrativeSection),
    StoryScroll(StoryScrollSection),
    Manifesto(ManifestoSection),
    Highlights(HighlightsSection),
    GrowthLab(GrowthLabSection),
    MotionReels(MotionReelsSection),
    Capabilities(CapabilitiesSection),
    Resources(ResourcesSection),
    Contact(ContactSection),
    CountriesSlideshow(CountriesSlideshowSection),
}

/// Fields every section variant carries.
pub trait SectionCommon {
    /// Stable render key and in-page anchor; unique within a page.
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

/// A variant struct that can be recovered from a [`Section`].
pub trait SectionVariant: SectionCommon + Sized {
    const KIND: SectionKind;

    fn from_section(section: &Section) -> Option<&Self>;
}

macro_rules! section_variants {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl SectionCommon for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn title(&self) -> &str {
                    &self.title
                }

                fn description(&self) -> Option<&str> {
                    self.description.as_deref()
                }
            }

            impl SectionVariant for $ty {
                const KIND: SectionKind = SectionKind::$variant;

                fn from_section(section: &Section) -> Option<&Self> {
                    match section {
                        Section::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*

        impl Section {
            pub fn kind(&self) -> SectionKind {
                match self {
                    $(Section::$variant(_) => SectionKind::$variant,)*
                }
            }

            fn common(&self) -> &dyn SectionCommon {
                match self {
                    $(Section::$variant(inner) => inner as &dyn SectionCommon,)*
                }
            }

            fn rules(&self) -> &dyn Validate {
                match self {
                    $(Section::$variant(inner) => inner as &dyn Validate,)*
                }
            }
        }
    };
}

section_variants! {
    FigmaSection => Figma,
    MiroSection => Miro,
    VideoSection => Video,
    GallerySection => Gallery,
    CaseStudySection => CaseStudy,
    PdfSection => Pdf,
    HeroNarrativeSection => HeroNarrative,
    StoryScrollSection => StoryScroll,
    ManifestoSection => Manifesto,
    HighlightsSection => Highlights,
    GrowthLabSection => GrowthLab,
    MotionReelsSection => MotionReels,
    CapabilitiesSection => Capabilities,
    ResourcesSection => Resources,
    ContactSection => Contact,
    CountriesSlideshowSection => CountriesSlideshow,
}

impl Section {
    pub fn id(&self) -> &str {
        self.common().id()
    }

    pub fn title(&self) -> &str {
        self.common().title()
    }

    pub fn description(&self) -> Option<&str> {
        self.common().description()
    }
}

impl Validate for Section {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        self.rules().validate(at)
    }
}

/// Check a page's section list: per-section rules, then id uniqueness.
pub fn validate_sections(sections: &[Section], at: &FieldPath) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for (idx, section) in sections.iter().enumerate() {
        let here = at.index(idx);
        section.validate(&here)?;
        if !seen.insert(section.id()) {
            return Err(ValidationError::new(
                here.field("id"),
                format!("duplicate section id `{}`", section.id()),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Shared payload pieces
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A design-tool embed (Figma file, Miro board).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmbedItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logos: Option<Vec<Logo>>,
}

/// A video or reel. At least one of `embedUrl` and `file` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Where a [`MediaItem`] plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource<'a> {
    /// A local video file, played with a native `<video>` element.
    File(&'a str),
    /// A third-party player URL, embedded in an `<iframe>`.
    Embed(&'a str),
}

impl MediaItem {
    /// The source to play. A local file wins over an embed URL.
    pub fn source(&self) -> Option<MediaSource<'_>> {
        match (self.file.as_deref(), self.embed_url.as_deref()) {
            (Some(file), _) if !file.is_empty() => Some(MediaSource::File(file)),
            (_, Some(url)) if !url.is_empty() => Some(MediaSource::Embed(url)),
            _ => None,
        }
    }
}

fn validate_media(items: &[MediaItem], at: &FieldPath, noun: &str) -> Result<(), ValidationError> {
    for (idx, item) in items.iter().enumerate() {
        if item.source().is_none() {
            return Err(ValidationError::new(
                at.index(idx),
                format!("each {noun} requires either an embedUrl or file path"),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Variant payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigmaSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<EmbedItem>,
}

impl Validate for FigmaSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        let items = at.field("items");
        for (idx, item) in self.items.iter().enumerate() {
            check_url(&item.embed_url, &items.index(idx).field("embedUrl"))?;
        }
        Ok(())
    }
}

/// Miro board URLs are taken as-is; boards are often shared as bare ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MiroSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<EmbedItem>,
}

impl Validate for MiroSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<MediaItem>,
}

impl Validate for VideoSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        validate_media(&self.items, &at.field("items"), "video item")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GallerySection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub images: Vec<GalleryImage>,
}

impl Validate for GallerySection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudy {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseStudySection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<CaseStudy>,
}

impl Validate for CaseStudySection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        let items = at.field("items");
        for (idx, item) in self.items.iter().enumerate() {
            item.links.validate(&items.index(idx).field("links"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdfItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdfSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<PdfItem>,
}

impl Validate for PdfSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NarrativeBlock {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Progress bar fill, 0 to 100. Kept as authored, so `92` stays an
    /// integer and `62.5` a float.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quote {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroNarrativeSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub narrative: Vec<NarrativeBlock>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

impl Validate for HeroNarrativeSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        let stats = at.field("stats");
        for (idx, stat) in self.stats.iter().enumerate() {
            if let Some(progress) = &stat.progress {
                let value = progress.as_f64().unwrap_or(f64::NAN);
                check_percent(value, &stats.index(idx).field("progress"))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageCredit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<ImageCredit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideResource {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideQuote {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StorySlide {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<SlideImage>,
    /// CSS background (color or gradient).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<SlideResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<SlideQuote>,
}

impl Validate for StorySlide {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        if let Some(credit) = self.image.as_ref().and_then(|i| i.credit.as_ref()) {
            check_optional_href(
                credit.url.as_deref(),
                &at.field("image").field("credit").field("url"),
            )?;
        }
        if let Some(resource) = &self.resource {
            check_href(&resource.href, &at.field("resource").field("href"))?;
        }
        Ok(())
    }
}

/// Full-bleed, scroll-driven slides. Renders without the shared shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryScrollSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slides: Vec<StorySlide>,
}

impl Validate for StoryScrollSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        self.slides.validate(&at.field("slides"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tenet {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestoSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tenets: Vec<Tenet>,
}

impl Validate for ManifestoSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightsSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub highlights: Vec<Highlight>,
}

impl Validate for HighlightsSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experiment {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrowthLabSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub experiments: Vec<Experiment>,
}

impl Validate for GrowthLabSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionReelsSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reels: Vec<MediaItem>,
}

impl Validate for MotionReelsSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        validate_media(&self.reels, &at.field("reels"), "reel")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capability {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilitiesSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capabilities: Vec<Capability>,
}

impl Validate for CapabilitiesSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// One entry in a resources hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceItem {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Free-form label such as `"Template"` or `"Newsletter"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Accent {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceCategory {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
    pub resources: Vec<ResourceItem>,
}

/// A resources hub: either a flat list or categorized groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourcesSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_placeholder: Option<String>,
    /// Shows the search box and keeps the hub inside the shared shell.
    #[serde(default)]
    pub enable_search: bool,
    #[serde(default)]
    pub resources: Vec<ResourceItem>,
    #[serde(default)]
    pub categories: Vec<ResourceCategory>,
}

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search by vibe, tool, or keyword...";

impl ResourcesSection {
    /// Categories to display.
    ///
    /// Explicit categories win. A flat list becomes a single category with
    /// id `<section id>-all` carrying the section's title and description.
    pub fn grouped(&self) -> Cow<'_, [ResourceCategory]> {
        if !self.categories.is_empty() || self.resources.is_empty() {
            return Cow::Borrowed(&self.categories);
        }
        Cow::Owned(vec![ResourceCategory {
            id: format!("{}-all", self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            icon: None,
            accent: None,
            resources: self.resources.clone(),
        }])
    }

    pub fn search_placeholder(&self) -> &str {
        self.search_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_PLACEHOLDER)
    }
}

impl Validate for ResourcesSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        let flat = at.field("resources");
        for (idx, item) in self.resources.iter().enumerate() {
            check_href(&item.link, &flat.index(idx).field("link"))?;
        }
        let categories = at.field("categories");
        for (cat_idx, category) in self.categories.iter().enumerate() {
            let resources = categories.index(cat_idx).field("resources");
            for (idx, item) in category.resources.iter().enumerate() {
                check_href(&item.link, &resources.index(idx).field("link"))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub href: String,
}

/// Closing call to action. Renders without the shared shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cta: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

pub const DEFAULT_AVAILABILITY: &str = "Currently welcoming new collaborations";

impl Validate for ContactSection {
    fn validate(&self, at: &FieldPath) -> Result<(), ValidationError> {
        self.cta.validate(&at.field("cta"))?;
        let channels = at.field("channels");
        for (idx, channel) in self.channels.iter().enumerate() {
            check_href(&channel.href, &channels.index(idx).field("href"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Country {
    pub name: String,
    /// Emoji flag or image path.
    pub flag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_visited: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountriesSlideshowSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub countries: Vec<Country>,
}

impl Validate for CountriesSlideshowSection {
    fn validate(&self, _at: &FieldPath) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::{Value, json};

    fn at() -> FieldPath {
        FieldPath::root().field("sections").index(0)
    }

    #[test]
    fn every_kind_round_trips_its_minimal_example() {
        for kind in SectionKind::ALL {
            let input = minimal_section_json(kind);
            let section: Section = serde_json::from_value(input.clone())
                .unwrap_or_else(|e| panic!("{kind} failed to decode: {e}"));
            assert_eq!(section.kind(), kind);
            section
                .validate(&at())
                .unwrap_or_else(|e| panic!("{kind} failed validation: {e}"));
            let output: Value = serde_json::to_value(&section).unwrap();
            assert_eq!(output, input, "{kind} did not round-trip");
        }
    }

    #[test]
    fn common_fields_are_exposed_for_every_kind() {
        for kind in SectionKind::ALL {
            let section: Section = serde_json::from_value(minimal_section_json(kind)).unwrap();
            assert_eq!(section.id(), format!("{}-section", kind.as_str()));
            assert_eq!(section.title(), format!("{} title", kind.as_str()));
            assert_eq!(section.description(), None);
        }
    }

    #[test]
    fn kind_tags_match_wire_tags() {
        for kind in SectionKind::ALL {
            let value = minimal_section_json(kind);
            assert_eq!(value["type"], kind.as_str());
        }
        assert_eq!(SectionKind::CaseStudy.to_string(), "case-study");
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let result: Result<Section, _> = serde_json::from_value(json!({
            "id": "x",
            "type": "carousel",
            "title": "X"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant `carousel`"), "{err}");
    }

    #[test]
    fn missing_type_tag_is_rejected() {
        let result: Result<Section, _> =
            serde_json::from_value(json!({ "id": "x", "title": "X", "images": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_field_is_rejected_per_kind() {
        let required: [(SectionKind, &str); 6] = [
            (SectionKind::Figma, "items"),
            (SectionKind::Gallery, "images"),
            (SectionKind::Manifesto, "tenets"),
            (SectionKind::Contact, "cta"),
            (SectionKind::CountriesSlideshow, "countries"),
            (SectionKind::StoryScroll, "slides"),
        ];
        for (kind, field) in required {
            let mut value = minimal_section_json(kind);
            value.as_object_mut().unwrap().remove(field);
            let result: Result<Section, _> = serde_json::from_value(value);
            let err = result.unwrap_err().to_string();
            assert!(err.contains(&format!("missing field `{field}`")), "{kind}: {err}");
        }
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut value = minimal_section_json(SectionKind::Pdf);
        value.as_object_mut().unwrap().remove("title");
        assert!(serde_json::from_value::<Section>(value).is_err());
    }

    #[test]
    fn figma_item_without_embed_url_is_rejected() {
        let result: Result<Section, _> = serde_json::from_value(json!({
            "id": "f",
            "type": "figma",
            "title": "F",
            "items": [{ "title": "Board", "tags": [] }]
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing field `embedUrl`"), "{err}");
    }

    #[test]
    fn extra_field_is_rejected() {
        let mut value = minimal_section_json(SectionKind::Gallery);
        value
            .as_object_mut()
            .unwrap()
            .insert("layout".to_string(), json!("masonry"));
        let err = serde_json::from_value::<Section>(value)
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown field `layout`"), "{err}");
    }

    #[test]
    fn figma_embed_must_be_absolute_url() {
        let section: Section = serde_json::from_value(json!({
            "id": "f",
            "type": "figma",
            "title": "F",
            "items": [
                { "title": "ok", "tags": [], "embedUrl": "https://figma.com/embed?x=1" },
                { "title": "bad", "tags": [], "embedUrl": "figma file" }
            ]
        }))
        .unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.to_string(), "sections[0].items[1].embedUrl: expected URL");
    }

    #[test]
    fn miro_embed_is_not_url_checked() {
        let section: Section = serde_json::from_value(json!({
            "id": "m",
            "type": "miro",
            "title": "M",
            "items": [{ "title": "Board", "tags": [], "embedUrl": "uXjVOabc=" }]
        }))
        .unwrap();
        assert!(section.validate(&at()).is_ok());
    }

    #[test]
    fn video_item_needs_embed_or_file() {
        let neither: Section = serde_json::from_value(json!({
            "id": "v",
            "type": "video",
            "title": "V",
            "items": [{ "title": "Nothing to play" }]
        }))
        .unwrap();
        let err = neither.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].items[0]");
        assert!(err.message.contains("embedUrl or file"));

        for item in [
            json!({ "title": "Embed", "embedUrl": "https://player.vimeo.com/video/1" }),
            json!({ "title": "File", "file": "/video/reel.mp4" }),
            json!({ "title": "Both", "file": "/video/reel.mp4", "embedUrl": "https://youtu.be/x" }),
        ] {
            let section: Section = serde_json::from_value(json!({
                "id": "v", "type": "video", "title": "V", "items": [item]
            }))
            .unwrap();
            assert!(section.validate(&at()).is_ok());
        }
    }

    #[test]
    fn reel_needs_embed_or_file() {
        let section: Section = serde_json::from_value(json!({
            "id": "r",
            "type": "motion-reels",
            "title": "R",
            "reels": [{ "title": "ok", "file": "/r.mp4" }, { "title": "empty" }]
        }))
        .unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].reels[1]");
        assert!(err.message.contains("reel"));
    }

    #[test]
    fn file_wins_over_embed() {
        let both = MediaItem {
            title: "Both".to_string(),
            description: None,
            platform: None,
            embed_url: Some("https://youtu.be/x".to_string()),
            file: Some("/video/reel.mp4".to_string()),
        };
        assert_eq!(both.source(), Some(MediaSource::File("/video/reel.mp4")));

        let embed_only = MediaItem {
            file: None,
            ..both.clone()
        };
        assert_eq!(
            embed_only.source(),
            Some(MediaSource::Embed("https://youtu.be/x"))
        );

        let empty_file = MediaItem {
            file: Some(String::new()),
            ..both
        };
        assert_eq!(
            empty_file.source(),
            Some(MediaSource::Embed("https://youtu.be/x"))
        );
    }

    #[test]
    fn progress_out_of_range_is_rejected_not_clamped() {
        let section: Section = serde_json::from_value(json!({
            "id": "h",
            "type": "hero-narrative",
            "title": "H",
            "narrative": [],
            "stats": [
                { "label": "Retention", "value": "92%", "progress": 92 },
                { "label": "Growth", "value": "140%", "progress": 140 }
            ]
        }))
        .unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].stats[1].progress");

        let Section::HeroNarrative(inner) = &section else {
            panic!("expected hero-narrative");
        };
        assert_eq!(inner.stats[1].progress, Some(Number::from(140)));
    }

    #[test]
    fn integer_and_float_progress_serialize_as_written() {
        let input = json!({
            "id": "h",
            "type": "hero-narrative",
            "title": "H",
            "narrative": [],
            "stats": [
                { "label": "Retention", "value": "92%", "progress": 92 },
                { "label": "Activation", "value": "+18%", "progress": 62.5 },
                { "label": "Churn", "value": "0%", "progress": 0 }
            ]
        });
        let section: Section = serde_json::from_value(input.clone()).unwrap();
        section.validate(&at()).unwrap();
        assert_eq!(serde_json::to_value(&section).unwrap(), input);
    }

    #[test]
    fn contact_cta_href_is_checked() {
        let mut value = minimal_section_json(SectionKind::Contact);
        value["cta"]["href"] = json!("mailto:");
        let section: Section = serde_json::from_value(value).unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].cta.href");
    }

    #[test]
    fn contact_channel_href_is_checked() {
        let mut value = minimal_section_json(SectionKind::Contact);
        value["channels"] = json!([
            { "label": "Email", "href": "mailto:hi@example.com" },
            { "label": "Call", "href": "tel:" }
        ]);
        let section: Section = serde_json::from_value(value).unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].channels[1].href");
    }

    #[test]
    fn story_slide_links_are_checked() {
        let section: Section = serde_json::from_value(json!({
            "id": "s",
            "type": "story-scroll",
            "title": "S",
            "slides": [{
                "id": "one",
                "title": "One",
                "body": "Body",
                "image": { "src": "/a.avif", "alt": "A", "credit": { "name": "Ann", "url": "ann" } }
            }]
        }))
        .unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[0].slides[0].image.credit.url");
    }

    #[test]
    fn categorized_resource_links_are_checked() {
        let section: Section = serde_json::from_value(json!({
            "id": "r",
            "type": "resources",
            "title": "R",
            "categories": [{
                "id": "tools",
                "title": "Tools",
                "resources": [
                    { "title": "Kit", "description": "d", "link": "https://kit.dev", "type": "Tool" },
                    { "title": "Bad", "description": "d", "link": "kit", "type": "Tool" }
                ]
            }]
        }))
        .unwrap();
        let err = section.validate(&at()).unwrap_err();
        assert_eq!(
            err.path.as_str(),
            "sections[0].categories[0].resources[1].link"
        );
    }

    #[test]
    fn flat_resources_group_into_synthetic_category() {
        let section: ResourcesSection = serde_json::from_value(json!({
            "id": "toolkit",
            "title": "Toolkit",
            "description": "Things I use",
            "resources": [
                { "title": "Kit", "description": "d", "link": "https://kit.dev", "type": "Tool" }
            ]
        }))
        .unwrap();
        let grouped = section.grouped();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].id, "toolkit-all");
        assert_eq!(grouped[0].title, "Toolkit");
        assert_eq!(grouped[0].resources.len(), 1);
        assert!(!section.enable_search);
        assert_eq!(section.search_placeholder(), DEFAULT_SEARCH_PLACEHOLDER);
    }

    #[test]
    fn empty_resources_have_no_groups() {
        let section: ResourcesSection =
            serde_json::from_value(json!({ "id": "r", "title": "R" })).unwrap();
        assert!(section.grouped().is_empty());
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let sections: Vec<Section> = vec![
            serde_json::from_value(minimal_section_json(SectionKind::Gallery)).unwrap(),
            serde_json::from_value(minimal_section_json(SectionKind::Pdf)).unwrap(),
            serde_json::from_value(minimal_section_json(SectionKind::Gallery)).unwrap(),
        ];
        let err = validate_sections(&sections, &FieldPath::root().field("sections")).unwrap_err();
        assert_eq!(err.path.as_str(), "sections[2].id");
        assert!(err.message.contains("gallery-section"));
    }

    #[test]
    fn from_section_recovers_only_matching_variant() {
        let gallery: Section =
            serde_json::from_value(minimal_section_json(SectionKind::Gallery)).unwrap();
        assert!(GallerySection::from_section(&gallery).is_some());
        assert!(ContactSection::from_section(&gallery).is_none());
        assert_eq!(GallerySection::KIND, SectionKind::Gallery);
    }
}
