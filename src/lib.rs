//! # Folio
//!
//! A static site generator for single-author portfolio sites. All content lives
//! in two JSON documents: `content.json` describes the home page and
//! `site-content.json` describes every other page. Each page is an ordered list
//! of typed sections, and each section kind has exactly one renderer.
//!
//! # Architecture: Load, Then Render
//!
//! ```text
//! 1. Load      content/  →  Content    (parse + validate, all-or-nothing)
//! 2. Render    Content   →  dist/      (dispatch each section, assemble pages)
//! ```
//!
//! Rendering never sees unvalidated data. If any field anywhere in either
//! document is malformed, loading fails with the full path of the offending
//! field and nothing is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | Field paths, validation errors, and the [`validate::Validate`] trait |
//! | [`link`] | Links, CTAs, and URL checks shared by every schema |
//! | [`entity`] | Standalone entities: `Project`, `Experience`, `Resource` |
//! | [`section`] | The sixteen section variants and the [`section::Section`] union |
//! | [`content`] | Document roots: `PortfolioContent`, `SiteContent`, `PageContent` |
//! | [`load`] | Reads `config.toml` and both JSON documents from a content directory |
//! | [`dispatch`] | Section kind → renderer table, section framing, and layout |
//! | [`render`] | One Maud renderer per section kind |
//! | [`generate`] | Page assembly and HTML output with Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting for check, build, and page listings |
//!
//! # Design Decisions
//!
//! ## Two-Phase Validation
//!
//! Serde handles shape: required fields, types, and the `type` tag on sections.
//! Everything serde cannot express (URL syntax, non-empty strings, progress in
//! `0..=100`, media items needing a source) runs afterwards through
//! [`validate::Validate`]. Both phases report errors against a
//! [`validate::FieldPath`] such as `pages.home.sections[3].items[0].embedUrl`,
//! so an author can find the mistake without reading a stack of serde context.
//!
//! ## Typed Dispatch
//!
//! [`dispatch::DispatchTable`] maps every [`section::SectionKind`] to a renderer
//! that receives the concrete variant, not the whole union. Registering a
//! renderer for a kind replaces the previous one; a kind with no renderer is
//! skipped at render time and flagged by `folio check`.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a compile error, interpolation is escaped by default, and there is no
//! template directory to ship alongside the binary.

pub mod config;
pub mod content;
pub mod dispatch;
pub mod entity;
pub mod generate;
pub mod link;
pub mod load;
pub mod output;
pub mod render;
pub mod section;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
