//! Content directory loading.
//!
//! Reads the site config and the JSON documents it names from a content
//! directory, then parses them into a single [`Content`] value:
//!
//! ```text
//! content/
//! ├── config.toml          # optional
//! ├── content.json         # home page (PortfolioContent)
//! ├── site-content.json    # every other page (SiteContent)
//! └── assets/              # copied to the output root by `generate`
//! ```
//!
//! Either document may be missing, but not both. Any document that exists
//! must be fully valid; there is no degraded mode.

use crate::config::{self, SiteConfig};
use crate::content::{Content, ContentError, parse_portfolio_content, parse_site_content};
use crate::validate::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{file}: {source}")]
    Content {
        file: PathBuf,
        #[source]
        source: ContentError,
    },
    #[error("No content found in {0} (expected {1} or {2})")]
    NoContent(PathBuf, String, String),
}

impl LoadError {
    /// The validation failure behind this error, if that is what it is.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            LoadError::Content {
                source: ContentError::Validation(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}

/// A loaded content directory: config plus parsed documents.
#[derive(Debug)]
pub struct Loaded {
    pub config: SiteConfig,
    pub content: Content,
    /// Documents that were found and parsed, relative to the content root.
    pub sources: Vec<String>,
}

pub fn load(root: &Path) -> Result<Loaded, LoadError> {
    let config = config::load_config(root)?;
    let content = load_content(root, &config)?;

    let mut sources = Vec::new();
    if content.portfolio.is_some() {
        sources.push(config.content_file.clone());
    }
    if root.join(&config.site_content_file).is_file() {
        sources.push(config.site_content_file.clone());
    }

    Ok(Loaded {
        config,
        content,
        sources,
    })
}

/// Parse the content documents named by `config` under `root`.
pub fn load_content(root: &Path, config: &SiteConfig) -> Result<Content, LoadError> {
    let portfolio_path = root.join(&config.content_file);
    let site_path = root.join(&config.site_content_file);

    if !portfolio_path.is_file() && !site_path.is_file() {
        return Err(LoadError::NoContent(
            root.to_path_buf(),
            config.content_file.clone(),
            config.site_content_file.clone(),
        ));
    }

    let portfolio = read_document(&portfolio_path, parse_portfolio_content)?;
    let site = read_document(&site_path, parse_site_content)?.unwrap_or_default();

    Ok(Content { portfolio, site })
}

/// Read and parse one document; `Ok(None)` when the file does not exist.
fn read_document<T>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ContentError>,
) -> Result<Option<T>, LoadError> {
    if !path.is_file() {
        return Ok(None);
    }
    let wrap = |source: ContentError| LoadError::Content {
        file: path.to_path_buf(),
        source,
    };
    let raw = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    parse(&raw).map(Some).map_err(wrap)
}
