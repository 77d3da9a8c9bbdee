//! Per-variant section renderers.
//!
//! One function per [`Section`](crate::section::Section) variant, each taking
//! only its own variant struct. None of them emit the section heading or
//! wrapper element; framing is the dispatch layer's job (see
//! [`crate::dispatch`]). Full-bleed variants (`story-scroll`, `contact`,
//! search-less `resources`) render their own heading inside the body.
//!
//! All interpolated content goes through maud and is escaped.

use crate::section::{
    CapabilitiesSection, CaseStudySection, ContactSection, CountriesSlideshowSection,
    DEFAULT_AVAILABILITY, EmbedItem, FigmaSection, GallerySection, GrowthLabSection,
    HeroNarrativeSection, HighlightsSection, Logo, ManifestoSection, MediaItem, MediaSource,
    MiroSection, MotionReelsSection, PdfSection, ResourceCategory, ResourceItem,
    ResourcesSection, StoryScrollSection, StorySlide, VideoSection,
};
use maud::{Markup, html};

// ============================================================================
// Shared pieces
// ============================================================================

fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tags {
                @for tag in tags {
                    li.tag { (tag) }
                }
            }
        }
    }
}

fn logo_row(logos: Option<&[Logo]>) -> Markup {
    html! {
        @if let Some(logos) = logos.filter(|l| !l.is_empty()) {
            div.logos {
                @for logo in logos {
                    img src=(logo.src) alt=(logo.alt.as_deref().unwrap_or("")) loading="lazy";
                }
            }
        }
    }
}

fn embed_card(item: &EmbedItem, frame_title: &str) -> Markup {
    html! {
        article.embed-card {
            div.embed-frame {
                iframe src=(item.embed_url) title={ (frame_title) ": " (item.title) }
                    loading="lazy" allowfullscreen {}
            }
            div.embed-body {
                h3 { (item.title) }
                @if let Some(desc) = &item.description {
                    p { (desc) }
                }
                (tag_list(&item.tags))
                (logo_row(item.logos.as_deref()))
            }
        }
    }
}

fn media_card(item: &MediaItem) -> Markup {
    html! {
        article.media-card {
            div.media-frame {
                @match item.source() {
                    Some(MediaSource::File(file)) => {
                        video controls preload="metadata" playsinline {
                            source src=(file) type="video/mp4";
                        }
                    }
                    Some(MediaSource::Embed(url)) => {
                        iframe src=(url) title=(item.title) loading="lazy" allowfullscreen {}
                    }
                    None => {}
                }
            }
            div.media-body {
                h3 { (item.title) }
                @if let Some(platform) = &item.platform {
                    span.platform { (platform) }
                }
                @if let Some(desc) = &item.description {
                    p { (desc) }
                }
            }
        }
    }
}

// ============================================================================
// Variant renderers
// ============================================================================

pub fn figma(section: &FigmaSection) -> Markup {
    html! {
        div.embed-grid.figma {
            @for item in &section.items {
                (embed_card(item, "Figma"))
            }
        }
    }
}

pub fn miro(section: &MiroSection) -> Markup {
    html! {
        div.embed-grid.miro {
            @for item in &section.items {
                (embed_card(item, "Miro board"))
            }
        }
    }
}

pub fn video(section: &VideoSection) -> Markup {
    html! {
        div.media-grid.video {
            @for item in &section.items {
                (media_card(item))
            }
        }
    }
}

pub fn gallery(section: &GallerySection) -> Markup {
    html! {
        div.gallery-grid {
            @for image in &section.images {
                figure.gallery-item {
                    img src=(image.src) alt=(image.alt) loading="lazy";
                    @if let Some(caption) = &image.caption {
                        figcaption { (caption) }
                    }
                }
            }
        }
    }
}

pub fn case_study(section: &CaseStudySection) -> Markup {
    html! {
        div.case-studies {
            @for item in &section.items {
                article.case-study {
                    header {
                        @if let Some(logo) = &item.logo {
                            img.case-logo src=(logo) alt=(item.logo_alt.as_deref().unwrap_or(&item.title));
                        }
                        h3 { (item.title) }
                    }
                    @if let Some(summary) = &item.summary {
                        p.summary { (summary) }
                    }
                    @if !item.outcomes.is_empty() {
                        ul.outcomes {
                            @for outcome in &item.outcomes {
                                li { (outcome) }
                            }
                        }
                    }
                    @if !item.links.is_empty() {
                        div.case-links {
                            @for link in &item.links {
                                @if link.is_external() {
                                    a href=(link.href) target="_blank" rel="noopener" { (link.label) }
                                } @else {
                                    a href=(link.href) { (link.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn pdf(section: &PdfSection) -> Markup {
    html! {
        div.pdf-list {
            @for item in &section.items {
                article.pdf-item {
                    h3 { (item.title) }
                    @if let Some(desc) = &item.description {
                        p { (desc) }
                    }
                    @if let Some(file) = &item.file {
                        object.pdf-frame data=(file) type="application/pdf" {
                            a href=(file) { "Open PDF" }
                        }
                    } @else {
                        p.pdf-pending { "Document coming soon." }
                    }
                }
            }
        }
    }
}

pub fn hero_narrative(section: &HeroNarrativeSection) -> Markup {
    html! {
        div.hero-narrative {
            div.narrative {
                @for block in &section.narrative {
                    div.narrative-block {
                        h3 { (block.heading) }
                        p { (block.body) }
                    }
                }
            }
            @if !section.stats.is_empty() {
                dl.stats {
                    @for stat in &section.stats {
                        div.stat {
                            dt { (stat.label) }
                            dd.stat-value { (stat.value) }
                            @if let Some(note) = &stat.annotation {
                                dd.stat-note { (note) }
                            }
                            @if let Some(progress) = &stat.progress {
                                dd.stat-progress {
                                    span.progress-bar style={ "width: " (progress.to_string()) "%" } {}
                                }
                            }
                        }
                    }
                }
            }
            @if let Some(quote) = &section.quote {
                blockquote.narrative-quote {
                    p { (quote.text) }
                    footer {
                        (quote.author)
                        @if let Some(role) = &quote.role {
                            ", " span.role { (role) }
                        }
                    }
                }
            }
        }
    }
}

fn slide_style(slide: &StorySlide) -> Option<String> {
    let mut style = Vec::new();
    if let Some(bg) = &slide.background {
        style.push(format!("--slide-bg: {bg}"));
    }
    if let Some(img) = &slide.background_image {
        style.push(format!("--slide-bg-image: url('{img}')"));
    }
    if let Some(accent) = &slide.accent {
        style.push(format!("--slide-accent: {accent}"));
    }
    if let Some(overlay) = &slide.overlay {
        style.push(format!("--slide-overlay: {overlay}"));
    }
    (!style.is_empty()).then(|| style.join("; "))
}

pub fn story_scroll(section: &StoryScrollSection) -> Markup {
    html! {
        div.story-scroll {
            header.story-intro {
                h2 { (section.title) }
                @if let Some(desc) = &section.description {
                    p { (desc) }
                }
            }
            @for slide in &section.slides {
                article.story-slide id=(slide.id) style=[slide_style(slide)] {
                    div.slide-copy {
                        @if let Some(eyebrow) = &slide.eyebrow {
                            span.eyebrow { (eyebrow) }
                        }
                        h3 { (slide.title) }
                        p { (slide.body) }
                        @if let Some(quote) = &slide.quote {
                            blockquote {
                                p { (quote.text) }
                                @if let Some(author) = &quote.author {
                                    footer {
                                        (author)
                                        @if let Some(role) = &quote.role {
                                            ", " (role)
                                        }
                                    }
                                }
                            }
                        }
                        @if let Some(resource) = &slide.resource {
                            a.slide-resource href=(resource.href) {
                                (resource.label)
                                @if let Some(desc) = &resource.description {
                                    span { (desc) }
                                }
                            }
                        }
                    }
                    @if let Some(image) = &slide.image {
                        figure.slide-image {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                            @if let Some(credit) = &image.credit {
                                figcaption {
                                    "Photo: "
                                    @if let Some(url) = &credit.url {
                                        a href=(url) rel="noopener" { (credit.name) }
                                    } @else {
                                        (credit.name)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn manifesto(section: &ManifestoSection) -> Markup {
    html! {
        ol.manifesto {
            @for tenet in &section.tenets {
                li.tenet {
                    h3 { (tenet.title) }
                    p { (tenet.detail) }
                }
            }
        }
    }
}

pub fn highlights(section: &HighlightsSection) -> Markup {
    html! {
        div.highlights {
            @for item in &section.highlights {
                article.highlight style=[item.accent.as_ref().map(|a| format!("--accent: {a}"))] {
                    @if let Some(logo) = &item.logo {
                        img.highlight-logo src=(logo) alt=(item.logo_alt.as_deref().unwrap_or(&item.title));
                    }
                    @if let Some(metric) = &item.metric {
                        span.metric { (metric) }
                    }
                    h3 { (item.title) }
                    p { (item.description) }
                }
            }
        }
    }
}

pub fn growth_lab(section: &GrowthLabSection) -> Markup {
    html! {
        div.growth-lab {
            @for experiment in &section.experiments {
                article.experiment {
                    h3 { (experiment.title) }
                    p { (experiment.description) }
                    (tag_list(&experiment.tags))
                    @if let Some(url) = &experiment.embed_url {
                        div.embed-frame {
                            iframe src=(url) title=(experiment.title) loading="lazy" {}
                        }
                    }
                }
            }
        }
    }
}

pub fn motion_reels(section: &MotionReelsSection) -> Markup {
    html! {
        div.media-grid.reels {
            @for reel in &section.reels {
                (media_card(reel))
            }
        }
    }
}

pub fn capabilities(section: &CapabilitiesSection) -> Markup {
    html! {
        div.capabilities {
            @for cap in &section.capabilities {
                article.capability data-tone=[cap.tone.as_deref()] {
                    @if let Some(icon) = &cap.icon {
                        span.icon aria-hidden="true" { (icon) }
                    }
                    h3 { (cap.title) }
                    p { (cap.description) }
                    (tag_list(&cap.skills))
                }
            }
        }
    }
}

fn resource_card(item: &ResourceItem) -> Markup {
    html! {
        a.resource-card href=(item.link) {
            @if let Some(icon) = &item.icon {
                span.icon aria-hidden="true" { (icon) }
            }
            span.resource-type { (item.kind) }
            @if let Some(badge) = &item.badge {
                span.badge { (badge) }
            }
            h4 { (item.title) }
            p { (item.description) }
            (tag_list(&item.tags))
        }
    }
}

fn category_block(category: &ResourceCategory) -> Markup {
    let accent = category
        .accent
        .as_ref()
        .map(|a| format!("--accent: {}", a.primary));
    html! {
        section.resource-category id=(category.id) style=[accent] {
            h3 {
                @if let Some(icon) = &category.icon {
                    span.icon aria-hidden="true" { (icon) " " }
                }
                (category.title)
            }
            @if let Some(desc) = &category.description {
                p { (desc) }
            }
            div.resource-grid {
                @for item in &category.resources {
                    (resource_card(item))
                }
            }
        }
    }
}

pub fn resources(section: &ResourcesSection) -> Markup {
    let groups = section.grouped();
    html! {
        div.resources-hub {
            @if !section.enable_search {
                header.resources-intro {
                    h2 { (section.title) }
                    @if let Some(desc) = &section.description {
                        p { (desc) }
                    }
                }
            }
            @if let Some(vibe) = &section.vibe {
                p.vibe { (vibe) }
            }
            @if section.enable_search {
                input.resource-search type="search" placeholder=(section.search_placeholder())
                    aria-label="Search resources";
            }
            @if groups.is_empty() {
                div.resources-empty {
                    p { "Resources are on their way." }
                }
            } @else {
                @for category in groups.iter() {
                    (category_block(category))
                }
            }
        }
    }
}

pub fn contact(section: &ContactSection) -> Markup {
    html! {
        div.contact-card {
            div.contact-copy {
                span.availability {
                    (section.availability.as_deref().unwrap_or(DEFAULT_AVAILABILITY))
                }
                h2 { (section.title) }
                @if let Some(desc) = &section.description {
                    p { (desc) }
                }
            }
            a.cta.cta-primary href=(section.cta.href) { (section.cta.label) }
            @if !section.channels.is_empty() {
                ul.channels {
                    @for channel in &section.channels {
                        li {
                            a href=(channel.href) { (channel.label) }
                            @if let Some(desc) = &channel.description {
                                span { (desc) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn countries_slideshow(section: &CountriesSlideshowSection) -> Markup {
    html! {
        ul.countries {
            @for country in &section.countries {
                li.country {
                    span.flag aria-hidden="true" { (country.flag) }
                    span.country-name { (country.name) }
                    @if let Some(year) = &country.year_visited {
                        span.year { (year) }
                    }
                    @if let Some(desc) = &country.description {
                        p { (desc) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionKind, SectionVariant};
    use crate::test_helpers::*;
    use serde_json::json;

    fn variant<V: SectionVariant + Clone>(value: serde_json::Value) -> V {
        let section = serde_json::from_value(value).unwrap();
        V::from_section(&section).expect("variant").clone()
    }

    #[test]
    fn video_prefers_file_over_embed() {
        let section: VideoSection = variant(json!({
            "id": "v",
            "type": "video",
            "title": "V",
            "items": [{
                "title": "Both",
                "file": "/video/reel.mp4",
                "embedUrl": "https://player.vimeo.com/video/1"
            }]
        }));
        let html = video(&section).into_string();
        assert!(html.contains(r#"<source src="/video/reel.mp4" type="video/mp4">"#));
        assert!(!html.contains("player.vimeo.com"));
    }

    #[test]
    fn video_embed_renders_iframe() {
        let section: VideoSection = variant(minimal_section_json(SectionKind::Video));
        let html = video(&section).into_string();
        assert!(html.contains("<iframe"));
    }

    #[test]
    fn progress_renders_as_width() {
        let section: HeroNarrativeSection =
            variant(minimal_section_json(SectionKind::HeroNarrative));
        let html = hero_narrative(&section).into_string();
        assert!(html.contains("width: 62.5%"));
    }

    #[test]
    fn integer_progress_renders_without_fraction() {
        let mut value = minimal_section_json(SectionKind::HeroNarrative);
        value["stats"][0]["progress"] = json!(92);
        let section: HeroNarrativeSection = variant(value);
        let html = hero_narrative(&section).into_string();
        assert!(html.contains("width: 92%"));
    }

    #[test]
    fn contact_uses_default_availability() {
        let section: ContactSection = variant(minimal_section_json(SectionKind::Contact));
        let html = contact(&section).into_string();
        assert!(html.contains(DEFAULT_AVAILABILITY));
        assert!(html.contains("mailto:hello@example.com"));
        assert!(html.contains("<h2>"));
    }

    #[test]
    fn resources_search_box_only_when_enabled() {
        let mut value = json!({
            "id": "kit",
            "type": "resources",
            "title": "Kit",
            "resources": [
                { "title": "Tool", "description": "d", "link": "https://t.dev", "type": "Tool" }
            ]
        });
        let plain: ResourcesSection = variant(value.clone());
        let html = resources(&plain).into_string();
        assert!(!html.contains("resource-search"));
        assert!(html.contains(r#"id="kit-all""#));
        assert!(html.contains("<h2>Kit</h2>"));

        value["enableSearch"] = json!(true);
        value["searchPlaceholder"] = json!("Find a kit");
        let searchable: ResourcesSection = variant(value);
        let html = resources(&searchable).into_string();
        assert!(html.contains(r#"placeholder="Find a kit""#));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn empty_resources_show_placeholder() {
        let section: ResourcesSection = variant(minimal_section_json(SectionKind::Resources));
        let html = resources(&section).into_string();
        assert!(html.contains("resources-empty"));
    }

    #[test]
    fn story_slide_style_carries_colors() {
        let section: StoryScrollSection = variant(json!({
            "id": "story",
            "type": "story-scroll",
            "title": "Story",
            "slides": [{
                "id": "dawn",
                "title": "Dawn",
                "body": "First light",
                "background": "#101820",
                "accent": "#f2aa4c"
            }]
        }));
        let html = story_scroll(&section).into_string();
        assert!(html.contains(r#"id="dawn""#));
        assert!(html.contains("--slide-bg: #101820; --slide-accent: #f2aa4c"));
    }

    #[test]
    fn gallery_escapes_captions() {
        let section: GallerySection = variant(json!({
            "id": "g",
            "type": "gallery",
            "title": "G",
            "images": [{ "src": "/a.avif", "alt": "A", "caption": "<b>bold</b>" }]
        }));
        let html = gallery(&section).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn case_study_external_links_open_new_tab() {
        let section: CaseStudySection = variant(json!({
            "id": "c",
            "type": "case-study",
            "title": "C",
            "items": [{
                "title": "Relaunch",
                "links": [
                    { "label": "Live", "href": "https://example.com" },
                    { "label": "Details", "href": "#details" }
                ]
            }]
        }));
        let html = case_study(&section).into_string();
        assert!(html.contains(r#"<a href="https://example.com" target="_blank" rel="noopener">Live</a>"#));
        assert!(html.contains(r##"<a href="#details">Details</a>"##));
    }
}
