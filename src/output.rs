//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (page, section) is its semantic identity: positional
//! index, title, and variant tag. Files and slugs are shown as secondary
//! context. This makes the output readable as a content inventory while still
//! letting users trace data back to the documents it came from.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Home
//!     Source: content.json
//!     001 Growth narrative [hero-narrative]
//!     002 Say hello [contact]
//!
//! Pages
//!     Source: site-content.json
//! 001 Resume (resume)
//!     2 projects, 1 experience
//!     001 Capabilities [capabilities]
//!
//! Config
//!     config.toml
//!     assets/
//!
//! 2 pages, 3 sections
//! ```
//!
//! Sections whose kind has no registered renderer are marked
//! `(no renderer)`; they validate but render nothing.
//!
//! ## Build
//!
//! ```text
//! Home → index.html (2 sections)
//! 001 Resume → resume/index.html (1 section)
//! Not found → 404.html
//!
//! Assets
//!     favicon.svg
//!
//! Generated 2 pages, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::content::{PageContent, SiteContent};
use crate::dispatch::DispatchTable;
use crate::generate::{GenerateReport, PageKind};
use crate::load::Loaded;
use crate::section::Section;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// `1 section`, `3 sections`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Format one section line: index, title, tag, and a marker when nothing
/// would render it.
///
/// ```text
/// 001 Selected work [gallery]
/// 002 Say hello [contact] (no renderer)
/// ```
fn section_line(index: usize, section: &Section, table: &DispatchTable) -> String {
    let marker = if table.is_registered(section.kind()) {
        ""
    } else {
        " (no renderer)"
    };
    format!(
        "{} {} [{}]{}",
        format_index(index),
        section.title(),
        section.kind(),
        marker
    )
}

fn section_lines(sections: &[Section], table: &DispatchTable, depth: usize) -> Vec<String> {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}{}", indent(depth), section_line(i + 1, section, table)))
        .collect()
}

/// Summary of a page's entity lists, omitting empty ones.
///
/// ```text
/// 2 projects (1 featured), 1 experience
/// ```
fn page_inventory(page: &PageContent) -> Option<String> {
    let mut parts = Vec::new();
    if !page.projects.is_empty() {
        let featured = page.projects.iter().filter(|p| p.featured).count();
        let mut part = plural(page.projects.len(), "project");
        if featured > 0 {
            part.push_str(&format!(" ({} featured)", featured));
        }
        parts.push(part);
    }
    if !page.experiences.is_empty() {
        parts.push(plural(page.experiences.len(), "experience"));
    }
    if !page.resources.is_empty() {
        parts.push(plural(page.resources.len(), "resource"));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

// ============================================================================
// check
// ============================================================================

/// Format `check` output: the validated content inventory.
pub fn format_check_output(
    loaded: &Loaded,
    source_root: &Path,
    table: &DispatchTable,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut section_count = 0;

    if let Some(portfolio) = &loaded.content.portfolio {
        lines.push("Home".to_string());
        lines.push(format!("    Source: {}", loaded.config.content_file));
        lines.push(format!("    {}", truncate_desc(&portfolio.hero.headline, 60)));
        lines.extend(section_lines(&portfolio.sections, table, 1));
        section_count += portfolio.sections.len();
        lines.push(String::new());
    }

    let site = &loaded.content.site;
    if !site.is_empty() {
        lines.push("Pages".to_string());
        lines.push(format!("    Source: {}", loaded.config.site_content_file));
        for (i, page) in site.pages().iter().enumerate() {
            lines.push(format!("{} {} ({})", format_index(i + 1), page.title, page.slug));
            if let Some(inventory) = page_inventory(page) {
                lines.push(format!("    {}", inventory));
            }
            lines.extend(section_lines(&page.sections, table, 1));
            section_count += page.sections.len();
        }
        lines.push(String::new());
    }

    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join(&loaded.config.assets_dir).is_dir() {
        lines.push(format!("    {}/", loaded.config.assets_dir));
    }
    lines.push(String::new());

    lines.push(format!(
        "{}, {}",
        plural(site.len(), "page"),
        plural(section_count, "section")
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(loaded: &Loaded, source_root: &Path, table: &DispatchTable) {
    for line in format_check_output(loaded, source_root, table) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format `build` output: every written page, then copied assets.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut site_pages = 0;

    for page in &report.pages {
        match page.kind {
            PageKind::Home => lines.push(format!(
                "Home \u{2192} {} ({})",
                page.path,
                plural(page.sections, "section")
            )),
            PageKind::Site => {
                site_pages += 1;
                lines.push(format!(
                    "{} {} \u{2192} {} ({})",
                    format_index(site_pages),
                    page.title,
                    page.path,
                    plural(page.sections, "section")
                ));
            }
            PageKind::NotFound => lines.push(format!("Not found \u{2192} {}", page.path)),
        }
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("    {}", asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(site_pages, "page"),
        plural(report.assets.len(), "asset")
    ));

    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// pages / show
// ============================================================================

/// Format `pages` output: one slug per line, in document order.
pub fn format_pages(site: &SiteContent) -> Vec<String> {
    site.pages()
        .iter()
        .map(|page| format!("{} - {}", page.slug, page.title))
        .collect()
}

/// Print pages output to stdout.
pub fn print_pages(site: &SiteContent) {
    for line in format_pages(site) {
        println!("{}", line);
    }
}

/// Format `show` output: one page's fields and section list.
pub fn format_page_detail(page: &PageContent, table: &DispatchTable) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", page.title, page.slug)];
    lines.push(format!("    {}", truncate_desc(&page.description, 60)));
    if let Some(hero) = &page.hero {
        let background = hero.background.as_deref().unwrap_or("none");
        lines.push(format!("    Hero: {} [{}]", hero.title, background));
    }
    if let Some(inventory) = page_inventory(page) {
        lines.push(format!("    {}", inventory));
    }
    if !page.sections.is_empty() {
        lines.push(String::new());
        lines.push("Sections".to_string());
        for (i, section) in page.sections.iter().enumerate() {
            lines.push(format!("    {}", section_line(i + 1, section, table)));
            lines.push(format!("        #{}", section.id()));
        }
    }
    lines
}

/// Print show output to stdout.
pub fn print_page_detail(page: &PageContent, table: &DispatchTable) {
    for line in format_page_detail(page, table) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
