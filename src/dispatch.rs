//! Section dispatch: tag → renderer, plus the shared shell.
//!
//! A [`DispatchTable`] maps each [`SectionKind`] to the renderer for its
//! variant struct. Registration is explicit and typed:
//!
//! ```rust,ignore
//! let mut table = DispatchTable::new();
//! table.register(render::gallery).register(render::contact);
//! let rendered = table.render_sections(&page.sections, Layout::Panel);
//! ```
//!
//! [`DispatchTable::render_sections`] walks the section list in order:
//!
//! 1. look up the renderer for the section's kind;
//! 2. unregistered kinds produce nothing for that entry (neighbours are
//!    unaffected);
//! 3. the result is either wrapped in the shared shell (heading, optional
//!    description, divider) or emitted bare for full-bleed variants; see
//!    [`framing`].
//!
//! Output order always equals input order.

use crate::render;
use crate::section::{Section, SectionKind, SectionVariant};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shell container styling. Affects only the shell, never dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Stacked cards on a long scrolling page (home).
    #[default]
    Stack,
    /// Wider floating panels (inner pages).
    Panel,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Stack => "stack",
            Layout::Panel => "panel",
        }
    }
}

/// How a rendered section is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Wrapped in the shared shell.
    Shell,
    /// Rendered bare; the variant manages its own layout.
    FullBleed,
}

/// Decide framing for a section in a given layout.
///
/// `story-scroll` and `contact` are always full-bleed. `resources` stays in
/// the shell only when search is enabled on a stacked page.
pub fn framing(section: &Section, layout: Layout) -> Framing {
    match section {
        Section::StoryScroll(_) | Section::Contact(_) => Framing::FullBleed,
        Section::Resources(hub) if !hub.enable_search || layout == Layout::Panel => {
            Framing::FullBleed
        }
        _ => Framing::Shell,
    }
}

/// One entry of [`DispatchTable::render_sections`] output.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub id: String,
    pub kind: SectionKind,
    pub framing: Framing,
    pub markup: Markup,
}

type RenderFn = Box<dyn Fn(&Section) -> Option<Markup> + Send + Sync>;

/// Explicit mapping from section kind to renderer.
#[derive(Default)]
pub struct DispatchTable {
    renderers: BTreeMap<SectionKind, RenderFn>,
}

impl DispatchTable {
    /// An empty table: every section renders as nothing until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in renderer from [`crate::render`].
    pub fn standard() -> Self {
        let mut table = Self::new();
        table
            .register(render::figma)
            .register(render::miro)
            .register(render::video)
            .register(render::gallery)
            .register(render::case_study)
            .register(render::pdf)
            .register(render::hero_narrative)
            .register(render::story_scroll)
            .register(render::manifesto)
            .register(render::highlights)
            .register(render::growth_lab)
            .register(render::motion_reels)
            .register(render::capabilities)
            .register(render::resources)
            .register(render::contact)
            .register(render::countries_slideshow);
        table
    }

    /// Register the renderer for variant `V`, replacing any previous one.
    pub fn register<V, F>(&mut self, render: F) -> &mut Self
    where
        V: SectionVariant + 'static,
        F: Fn(&V) -> Markup + Send + Sync + 'static,
    {
        self.renderers.insert(
            V::KIND,
            Box::new(move |section: &Section| V::from_section(section).map(&render)),
        );
        self
    }

    pub fn is_registered(&self, kind: SectionKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Kinds with no renderer, in [`SectionKind::ALL`] order.
    pub fn unregistered(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|k| !self.is_registered(*k))
            .collect()
    }

    /// Render one section through its renderer and framing.
    ///
    /// Returns `None` when no renderer is registered for its kind.
    pub fn render_section(&self, section: &Section, layout: Layout) -> Option<RenderedSection> {
        let render = self.renderers.get(&section.kind())?;
        let body = render(section)?;
        let framing = framing(section, layout);
        let markup = match framing {
            Framing::Shell => section_shell(section, layout, body),
            Framing::FullBleed => bare_section(section.id(), body),
        };
        Some(RenderedSection {
            id: section.id().to_string(),
            kind: section.kind(),
            framing,
            markup,
        })
    }

    /// Render every section in order, skipping unregistered kinds.
    pub fn render_sections(&self, sections: &[Section], layout: Layout) -> Vec<RenderedSection> {
        sections
            .iter()
            .filter_map(|section| self.render_section(section, layout))
            .collect()
    }
}

/// The shared shell: heading, optional description, divider, body.
pub fn section_shell(section: &Section, layout: Layout, body: Markup) -> Markup {
    html! {
        section.section id=(section.id()) data-layout=(layout.as_str()) {
            div class={ "section-shell shell-" (layout.as_str()) } {
                div.shell-heading {
                    h2 { (section.title()) }
                    @if let Some(desc) = section.description() {
                        p.shell-description { (desc) }
                    }
                }
                hr.shell-divider;
                div.shell-body { (body) }
            }
        }
    }
}

/// A full-bleed section: anchor id, no chrome.
pub fn bare_section(id: &str, body: Markup) -> Markup {
    html! {
        section.section.section-bare id=(id) {
            (body)
        }
    }
}

/// Wrap rendered sections for a page. Stacked pages get a `#portfolio`
/// container; panels are emitted as-is.
pub fn section_list(rendered: &[RenderedSection], layout: Layout) -> Markup {
    html! {
        @match layout {
            Layout::Stack => {
                div.section-stack id="portfolio" {
                    @for section in rendered {
                        (section.markup)
                    }
                }
            }
            Layout::Panel => {
                @for section in rendered {
                    (section.markup)
                }
            }
        }
    }
}
