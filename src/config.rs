//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table, the user's file is overlaid on top, and the
//! result is deserialized and validated.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the content root:
//!
//! ```text
//! content/
//! ├── config.toml          # overrides stock defaults
//! ├── content.json
//! ├── site-content.json
//! └── assets/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_file = "content.json"            # Home page document
//! site_content_file = "site-content.json"  # Inner pages document
//! assets_dir = "assets"                    # Copied verbatim to the output root
//!
//! [layout]
//! home = "stack"            # Shell styling on the home page
//! pages = "panel"           # Shell styling on inner pages
//!
//! [theme]
//! section_gap = "4rem"      # Vertical space between sections
//! radius = "1.25rem"        # Corner radius of shells and cards
//!
//! [theme.stack_width]
//! size = "90vw"
//! min = "20rem"
//! max = "64rem"
//!
//! [theme.panel_width]
//! size = "94vw"
//! min = "20rem"
//! max = "76rem"
//!
//! [colors.light]
//! background = "#f7f5f2"
//! surface = "#ffffff"
//! text = "#16161a"
//! text_muted = "#62626b"
//! border = "#e3e0da"
//! accent = "#3b5bdb"
//!
//! [colors.dark]
//! background = "#0d0d10"
//! surface = "#17171c"
//! text = "#ececf1"
//! text_muted = "#9a9aa6"
//! border = "#2a2a33"
//! accent = "#8ca2ff"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [layout]
//! home = "panel"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::dispatch::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Home page document, relative to the content root.
    pub content_file: String,
    /// Inner pages document, relative to the content root.
    pub site_content_file: String,
    /// Static files copied verbatim into the output root.
    pub assets_dir: String,
    /// Shell layout per page type.
    pub layout: LayoutConfig,
    /// Spacing and container sizes.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_file: "content.json".to_string(),
            site_content_file: "site-content.json".to_string(),
            assets_dir: "assets".to_string(),
            layout: LayoutConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let files = [
            ("content_file", &self.content_file),
            ("site_content_file", &self.site_content_file),
        ];
        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if Path::new(value).is_absolute() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be relative to the content root"
                )));
            }
        }
        if self.content_file == self.site_content_file {
            return Err(ConfigError::Validation(
                "content_file and site_content_file must differ".into(),
            ));
        }
        if Path::new(&self.assets_dir).is_absolute() {
            return Err(ConfigError::Validation(
                "assets_dir must be relative to the content root".into(),
            ));
        }
        if self.theme.section_gap.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.section_gap must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Which shell layout each page type uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Layout for `index.html`.
    pub home: Layout,
    /// Layout for every `<slug>/index.html`.
    pub pages: Layout,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            home: Layout::Stack,
            pages: Layout::Panel,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"90vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"20rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"64rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Vertical space between consecutive sections (CSS value).
    pub section_gap: String,
    /// Corner radius for shells and cards (CSS value).
    pub radius: String,
    /// Container width for stacked shells.
    pub stack_width: ClampSize,
    /// Container width for panel shells.
    pub panel_width: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            section_gap: "4rem".to_string(),
            radius: "1.25rem".to_string(),
            stack_width: ClampSize {
                size: "90vw".to_string(),
                min: "20rem".to_string(),
                max: "64rem".to_string(),
            },
            panel_width: ClampSize {
                size: "94vw".to_string(),
                min: "20rem".to_string(),
                max: "76rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Shell and card background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (descriptions, captions, nav).
    pub text_muted: String,
    /// Dividers and card outlines.
    pub border: String,
    /// Links, CTAs, progress bars.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f7f5f2".to_string(),
            surface: "#ffffff".to_string(),
            text: "#16161a".to_string(),
            text_muted: "#62626b".to_string(),
            border: "#e3e0da".to_string(),
            accent: "#3b5bdb".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d0d10".to_string(),
            surface: "#17171c".to_string(),
            text: "#ececf1".to_string(),
            text_muted: "#9a9aa6".to_string(),
            border: "#2a2a33".to_string(),
            accent: "#8ca2ff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the content directory:
#   content/config.toml
#
# Only the keys you want to override are needed.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Documents
# ---------------------------------------------------------------------------
# Home page document (portfolio: hero, tech stack, sections, socials).
content_file = "content.json"

# Inner pages document (a "pages" map keyed by slug).
site_content_file = "site-content.json"

# Directory copied verbatim into the output root (images, PDFs, video).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
# "stack": stacked cards on one long page, wrapped in #portfolio.
# "panel": wider floating panels.
# Layout only changes shell styling; every section renders either way.
[layout]
home = "stack"
pages = "panel"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Vertical space between consecutive sections (CSS value).
section_gap = "4rem"

# Corner radius of shells and cards (CSS value).
radius = "1.25rem"

# Width of stacked shells, as CSS clamp(min, size, max).
[theme.stack_width]
size = "90vw"
min = "20rem"
max = "64rem"

# Width of panel shells, as CSS clamp(min, size, max).
[theme.panel_width]
size = "94vw"
min = "20rem"
max = "76rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f7f5f2"
surface = "#ffffff"       # Shells and cards
text = "#16161a"
text_muted = "#62626b"    # Descriptions, captions, nav
border = "#e3e0da"
accent = "#3b5bdb"        # Links, CTAs, progress bars

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d0d10"
surface = "#17171c"
text = "#ececf1"
text_muted = "#9a9aa6"
border = "#2a2a33"
accent = "#8ca2ff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --section-gap: {section_gap};
    --radius: {radius};
    --stack-width: {stack_width};
    --panel-width: {panel_width};
}}"#,
        section_gap = theme.section_gap,
        radius = theme.radius,
        stack_width = theme.stack_width.to_css(),
        panel_width = theme.panel_width.to_css(),
    )
}
