//! HTML site generation.
//!
//! Takes validated [`Content`] and writes the final static site. Every page
//! shares the same chrome (header, navigation, footer) and inlines its CSS.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): portfolio hero, tech stack, sections in the
//!   configured home layout, footer. Without a portfolio document the home
//!   page is a simple index of the site pages.
//! - **Site pages** (`/{slug}/index.html`): page hero, project index,
//!   experience timeline, sections in the configured pages layout, footer.
//! - **Not found page** (`/404.html`).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── resume/
//! │   └── index.html
//! └── media/                 # everything under content/assets/
//!     └── ...
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and prefixed with the color
//! and theme custom properties generated from `config.toml`.

use crate::config::{self, SiteConfig};
use crate::content::{Content, PageContent, PortfolioContent, PortfolioHero, TechStack};
use crate::dispatch::{DispatchTable, Layout, RenderedSection, section_list};
use crate::entity::{Experience, Project};
use crate::link::Link;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Which template produced a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Site,
    NotFound,
}

/// One written HTML file.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub kind: PageKind,
    /// Output path relative to the output root, `/`-separated.
    pub path: String,
    pub title: String,
    /// Sections that produced markup.
    pub sections: usize,
}

/// What [`generate`] wrote.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<PageReport>,
    /// Copied asset files, relative to the assets directory.
    pub assets: Vec<String>,
}

/// Page hero backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroBackground {
    Aurora,
    Midnight,
    Sunrise,
    Glacier,
}

impl HeroBackground {
    /// Map a free-text background name to a known backdrop. Unknown or
    /// missing names mean no backdrop.
    pub fn resolve(value: Option<&str>) -> Option<Self> {
        match value? {
            "aurora" => Some(HeroBackground::Aurora),
            "midnight" => Some(HeroBackground::Midnight),
            "sunrise" => Some(HeroBackground::Sunrise),
            "glacier" => Some(HeroBackground::Glacier),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeroBackground::Aurora => "aurora",
            HeroBackground::Midnight => "midnight",
            HeroBackground::Sunrise => "sunrise",
            HeroBackground::Glacier => "glacier",
        }
    }
}

/// Generate the site with the built-in renderers.
pub fn generate(
    content: &Content,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    generate_with(&DispatchTable::standard(), content, config, source_dir, output_dir)
}

/// Generate the site, rendering sections through `table`.
pub fn generate_with(
    table: &DispatchTable,
    content: &Content,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let chrome = Chrome::new(content, config);
    let mut report = GenerateReport::default();

    fs::create_dir_all(output_dir)?;

    // Assets first so generated pages win on a name clash
    report.assets = copy_assets(&source_dir.join(&config.assets_dir), output_dir)?;

    match &content.portfolio {
        Some(portfolio) => {
            let rendered = table.render_sections(&portfolio.sections, config.layout.home);
            let html = render_home(portfolio, &rendered, config.layout.home, &chrome);
            write_page(output_dir, "index.html", html)?;
            report.pages.push(PageReport {
                kind: PageKind::Home,
                path: "index.html".to_string(),
                title: portfolio.name.clone(),
                sections: rendered.len(),
            });
        }
        None => {
            write_page(output_dir, "index.html", render_page_index(content, &chrome))?;
            report.pages.push(PageReport {
                kind: PageKind::Home,
                path: "index.html".to_string(),
                title: chrome.brand.clone(),
                sections: 0,
            });
        }
    }

    for page in content.site.pages() {
        let rendered = table.render_sections(&page.sections, config.layout.pages);
        let html = render_page(page, &rendered, config.layout.pages, &chrome);
        let path = format!("{}/index.html", page.slug);
        write_page(output_dir, &path, html)?;
        report.pages.push(PageReport {
            kind: PageKind::Site,
            path,
            title: page.title.clone(),
            sections: rendered.len(),
        });
    }

    write_page(output_dir, "404.html", render_not_found(&chrome))?;
    report.pages.push(PageReport {
        kind: PageKind::NotFound,
        path: "404.html".to_string(),
        title: NOT_FOUND_TITLE.to_string(),
        sections: 0,
    });

    Ok(report)
}

fn write_page(output_dir: &Path, rel: &str, html: Markup) -> std::io::Result<()> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html.into_string())
}

/// Copy everything under `src` into `dst`, preserving structure.
///
/// A missing assets directory is not an error.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    if !src.is_dir() {
        return Ok(copied);
    }
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(copied)
}

// ============================================================================
// Shared chrome
// ============================================================================

const NOT_FOUND_TITLE: &str = "Page not found";

struct NavItem {
    href: String,
    label: String,
}

/// Everything every page shares.
struct Chrome<'a> {
    css: String,
    brand: String,
    nav: Vec<NavItem>,
    portfolio: Option<&'a PortfolioContent>,
}

impl<'a> Chrome<'a> {
    fn new(content: &'a Content, config: &SiteConfig) -> Self {
        let color_css = config::generate_color_css(&config.colors);
        let theme_css = config::generate_theme_css(&config.theme);
        let css = format!("{}\n\n{}\n\n{}", color_css, theme_css, CSS_STATIC);

        let mut nav = vec![NavItem {
            href: "/".to_string(),
            label: "Home".to_string(),
        }];
        nav.extend(content.site.pages().iter().map(|page| NavItem {
            href: format!("/{}/", page.slug),
            label: page.title.clone(),
        }));

        Self {
            css,
            brand: content
                .portfolio
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Portfolio".to_string()),
            nav,
            portfolio: content.portfolio.as_ref(),
        }
    }
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header with brand and navigation
fn site_header(chrome: &Chrome, current: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (chrome.brand) }
            nav.site-nav {
                (render_nav(&chrome.nav, current))
            }
        }
    }
}

fn render_nav(items: &[NavItem], current: &str) -> Markup {
    html! {
        ul {
            @for item in items {
                li class=[(item.href == current).then_some("current")] {
                    a href=(item.href) { (item.label) }
                }
            }
        }
    }
}

/// Display form of a social link target: the mail domain for `mailto:`
/// links, the host for URLs.
pub fn social_handle(href: &str) -> String {
    if let Some(email) = href.strip_prefix("mailto:") {
        let domain = email.split('@').nth(1).unwrap_or(email);
        return domain.to_uppercase();
    }
    match url::Url::parse(href) {
        Ok(url) => url
            .host_str()
            .map(|host| host.trim_start_matches("www.").to_string())
            .unwrap_or_else(|| href.to_string()),
        Err(_) => href.to_string(),
    }
}

fn site_footer(chrome: &Chrome) -> Markup {
    let Some(portfolio) = chrome.portfolio else {
        return html! {
            footer.site-footer id="footer" {
                p.signature { (chrome.brand) }
            }
        };
    };
    // LinkedIn leads when present
    let primary = portfolio
        .socials
        .iter()
        .find(|s| s.label == "LinkedIn")
        .or_else(|| portfolio.socials.first());

    html! {
        footer.site-footer id="footer" {
            @if let Some(primary) = primary {
                a.footer-primary href=(primary.href) {
                    span { "Start a conversation on " (primary.label) }
                    span.handle { (social_handle(&primary.href)) }
                }
            }
            @if !portfolio.socials.is_empty() {
                ul.socials {
                    @for social in &portfolio.socials {
                        li {
                            a href=(social.href) { (social.label) }
                        }
                    }
                }
            }
            p.signature { (portfolio.signature) }
        }
    }
}

fn cta(link: &Link, class: &str) -> Markup {
    html! {
        @if link.is_external() {
            a class=(class) href=(link.href) target="_blank" rel="noopener" { (link.label) }
        } @else {
            a class=(class) href=(link.href) { (link.label) }
        }
    }
}

// ============================================================================
// Home page
// ============================================================================

fn portfolio_hero(hero: &PortfolioHero) -> Markup {
    html! {
        section.hero id="hero" {
            @if let Some(badge) = &hero.badge {
                span.hero-badge { (badge) }
            }
            h1 { (hero.headline) }
            p.hero-subheading { (hero.subheading) }
            div.hero-ctas {
                (cta(&hero.cta_primary, "cta cta-primary"))
                (cta(&hero.cta_secondary, "cta cta-secondary"))
            }
            @if !hero.floating_words.is_empty() {
                ul.floating-words aria-hidden="true" {
                    @for word in &hero.floating_words {
                        li { (word) }
                    }
                }
            }
        }
    }
}

fn tech_stack(stack: &TechStack) -> Markup {
    html! {
        section.tech-stack id="tech-stack" {
            h2 { (stack.title) }
            @if let Some(desc) = &stack.description {
                p.shell-description { (desc) }
            }
            div.tech-columns {
                @for column in &stack.columns {
                    div.tech-column {
                        h3 { (column.heading) }
                        ul {
                            @for item in &column.items {
                                li { (item) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// In-page jump list: hero, tech stack, each rendered section, footer.
fn section_index(portfolio: &PortfolioContent, rendered: &[RenderedSection]) -> Markup {
    html! {
        nav.section-index aria-label="Sections" {
            ol {
                li { a href="#hero" { "Intro" } }
                li { a href="#tech-stack" { (portfolio.tech_stack.title) } }
                @for entry in rendered {
                    @if let Some(section) = portfolio.sections.iter().find(|s| s.id() == entry.id) {
                        li { a href={ "#" (entry.id) } { (section.title()) } }
                    }
                }
                li { a href="#footer" { "Connect" } }
            }
        }
    }
}

fn render_home(
    portfolio: &PortfolioContent,
    rendered: &[RenderedSection],
    layout: Layout,
    chrome: &Chrome,
) -> Markup {
    let content = html! {
        (site_header(chrome, "/"))
        main.home-page {
            (section_index(portfolio, rendered))
            (portfolio_hero(&portfolio.hero))
            (tech_stack(&portfolio.tech_stack))
            (section_list(rendered, layout))
            (site_footer(chrome))
        }
    };

    let title = format!("{} | {}", portfolio.name, portfolio.tagline);
    base_document(&title, &chrome.css, Some("home"), content)
}

/// Home page when only site pages exist.
fn render_page_index(content: &Content, chrome: &Chrome) -> Markup {
    let body = html! {
        (site_header(chrome, "/"))
        main.index-page {
            h1 { (chrome.brand) }
            div.page-cards {
                @for page in content.site.pages() {
                    a.page-card href={ "/" (page.slug) "/" } {
                        h2 { (page.title) }
                        p { (page.description) }
                    }
                }
            }
            (site_footer(chrome))
        }
    };
    base_document(&chrome.brand, &chrome.css, None, body)
}

// ============================================================================
// Site pages
// ============================================================================

fn page_hero(page: &PageContent) -> Markup {
    let hero = page.hero.as_ref();
    let title = hero.map(|h| h.title.as_str()).unwrap_or(&page.title);
    let subtitle = hero
        .and_then(|h| h.subtitle.as_deref())
        .unwrap_or(&page.description);
    let background = HeroBackground::resolve(hero.and_then(|h| h.background.as_deref()));

    html! {
        header.page-hero data-background=[background.map(HeroBackground::as_str)] {
            h1 { (title) }
            p.page-subtitle { (subtitle) }
            @if subtitle != page.description {
                p.page-description { (page.description) }
            }
        }
    }
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.project-card.featured[project.featured] {
            @if let Some(thumb) = &project.thumbnail {
                img src=(thumb) alt=(project.title) loading="lazy";
            }
            span.category { (project.category) }
            h3 {
                @if let Some(link) = &project.link {
                    a href=(link) { (project.title) }
                } @else {
                    (project.title)
                }
            }
            p { (project.description) }
            @if !project.tags.is_empty() {
                ul.tags {
                    @for tag in &project.tags {
                        li.tag { (tag) }
                    }
                }
            }
        }
    }
}

fn experience_entry(exp: &Experience) -> Markup {
    html! {
        li.experience id=(exp.id) {
            @if let Some(logo) = &exp.logo {
                img.experience-logo src=(logo) alt=(exp.logo_alt.as_deref().unwrap_or(&exp.company));
            }
            h3 { (exp.role) " · " (exp.company) }
            span.duration { (exp.duration) }
            p { (exp.description) }
            ul.highlights {
                @for highlight in &exp.highlights {
                    li { (highlight) }
                }
            }
            @if let Some(tech) = exp.technologies.as_ref().filter(|t| !t.is_empty()) {
                ul.tags {
                    @for t in tech {
                        li.tag { (t) }
                    }
                }
            }
        }
    }
}

fn render_page(
    page: &PageContent,
    rendered: &[RenderedSection],
    layout: Layout,
    chrome: &Chrome,
) -> Markup {
    let current = format!("/{}/", page.slug);
    let projects = page.projects_by_feature();

    let content = html! {
        (site_header(chrome, &current))
        main.site-page {
            (page_hero(page))
            div.page-body {
                @if !projects.is_empty() {
                    section.project-index id="projects" {
                        span.eyebrow { "Project index" }
                        h2 { "Signature builds & launches" }
                        div.project-grid {
                            @for project in &projects {
                                (project_card(project))
                            }
                        }
                    }
                }
                @if !page.experiences.is_empty() {
                    section.experience-timeline id="experience" {
                        span.eyebrow { "Experience timeline" }
                        h2 { "Roles that shaped the craft" }
                        ol.timeline {
                            @for exp in &page.experiences {
                                (experience_entry(exp))
                            }
                        }
                    }
                }
                @if !rendered.is_empty() {
                    (section_list(rendered, layout))
                }
            }
            (site_footer(chrome))
        }
    };

    base_document(&page.title, &chrome.css, Some("page"), content)
}

fn render_not_found(chrome: &Chrome) -> Markup {
    let content = html! {
        (site_header(chrome, ""))
        main.not-found {
            h1 { (NOT_FOUND_TITLE) }
            p { "There is no page at this address." }
            a.cta.cta-primary href="/" { "Back home" }
        }
    };
    base_document(NOT_FOUND_TITLE, &chrome.css, Some("not-found"), content)
}

// ============================================================================
// Tests
// ============================================================================
