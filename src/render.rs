// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Orchestration of the subscribe button rendering pipeline.
//!
//! The renderer composes the collaborators in a fixed order: sanitize the
//! caller options, overlay the content overrides, transform the feeds
//! through the shared cache, and hand everything to the embed builder
//! together with a freshly generated accessor token. Rendering is
//! synchronous and bounded; the transform cache is the only shared state.

use std::{fs, path::Path, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    accessor::{AccessorIdGenerator, SystemIdGenerator},
    cache::{TransformCache, feed_cache_key},
    config::{ConfigSource, resolve_script_url},
    embed::build_embed_code,
    error::{self, Error},
    feed::{Feed, transform_feeds},
    options::ButtonOptions,
    registry::WhitelistRegistry
};

/// Podcast content rendered into the widget data payload.
///
/// The four string fields may be overridden per render call through the
/// equally-named [`ButtonOptions`] fields; options take precedence whenever
/// their value is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentData {
    /// Podcast title.
    #[serde(default)]
    pub title: String,

    /// Podcast subtitle.
    #[serde(default)]
    pub subtitle: String,

    /// Podcast description.
    #[serde(default)]
    pub description: String,

    /// Cover art URL.
    #[serde(default)]
    pub cover: String,

    /// Distribution feeds offered for subscription.
    #[serde(default)]
    pub feeds: Vec<Feed>
}

/// Loads a podcast content document from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// deserialized.
pub fn load_podcast(path: &Path) -> Result<ContentData, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_podcast(&contents)
}

/// Parses a podcast content document from a YAML string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be
/// decoded.
pub fn parse_podcast(contents: &str) -> Result<ContentData, Error> {
    let content: ContentData = serde_yaml::from_str(contents)?;
    Ok(content)
}

/// Renderer composing the sanitizer, feed transformer, identifier generator,
/// and embed builder.
///
/// One instance can serve concurrent page renders; the collaborators are
/// shared behind the renderer and only the transform cache carries state
/// across calls.
///
/// # Examples
///
/// ```
/// use sbtn::{ButtonOptions, ButtonRenderer, ContentData, Feed, StaticConfig};
///
/// let renderer = ButtonRenderer::new(StaticConfig::default());
/// let content = ContentData {
///     title: "Example Show".to_owned(),
///     feeds: vec![Feed {
///         media_type:    "audio/mpeg".to_owned(),
///         extension:     "mp3".to_owned(),
///         subscribe_url: "https://example.org/feed.rss".to_owned(),
///         directory_id:  None
///     }],
///     ..ContentData::default()
/// };
///
/// let markup = renderer.render(&content, &ButtonOptions::default())?;
/// assert!(markup.contains("data-json-data"));
/// # Ok::<(), sbtn::Error>(())
/// ```
pub struct ButtonRenderer {
    registry: WhitelistRegistry,
    config:   Arc<dyn ConfigSource>,
    ids:      Arc<dyn AccessorIdGenerator>,
    cache:    TransformCache
}

impl ButtonRenderer {
    /// Creates a renderer with the default whitelist registry, the system
    /// identifier generator, and a fresh transform cache.
    pub fn new(config: impl ConfigSource + 'static) -> Self {
        Self {
            registry: WhitelistRegistry::default(),
            config:   Arc::new(config),
            ids:      Arc::new(SystemIdGenerator::new()),
            cache:    TransformCache::new()
        }
    }

    /// Replaces the whitelist registry consulted during sanitization.
    pub fn with_registry(mut self, registry: WhitelistRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the identifier generator, enabling deterministic tests.
    pub fn with_id_generator(mut self, ids: impl AccessorIdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Shares an externally owned transform cache with this renderer.
    pub fn with_cache(mut self, cache: TransformCache) -> Self {
        self.cache = cache;
        self
    }

    /// Renders the embed markup for the provided content and options.
    ///
    /// Malformed option values degrade to defaults; an empty feed set yields
    /// an empty string. Both are normal outcomes, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](Error::Serialize) when the widget data
    /// payload cannot be encoded.
    pub fn render(&self, content: &ContentData, options: &ButtonOptions) -> Result<String, Error> {
        let args = options.sanitize(&self.registry);
        let content = overlay_overrides(content, options);

        let records = self
            .cache
            .cache_for(&feed_cache_key(&content.feeds), || transform_feeds(&content.feeds));
        if records.is_empty() {
            debug!("no feeds to render, returning empty embed");
            return Ok(String::new());
        }

        let token = self.ids.hex_token();
        let script_url = resolve_script_url(self.config.as_ref());
        let markup = build_embed_code(&content, &records, &args, &script_url, &token)?;

        debug!("built embed for {} feeds ({} bytes)", records.len(), markup.len());
        Ok(markup)
    }
}

/// Applies the non-empty content overrides from `options` onto `content`.
fn overlay_overrides(content: &ContentData, options: &ButtonOptions) -> ContentData {
    let mut merged = content.clone();

    for (target, replacement) in [
        (&mut merged.title, &options.title),
        (&mut merged.subtitle, &options.subtitle),
        (&mut merged.description, &options.description),
        (&mut merged.cover, &options.cover),
    ] {
        if let Some(value) = replacement.as_deref()
            && !value.trim().is_empty()
        {
            *target = value.to_owned();
        }
    }

    merged
}
