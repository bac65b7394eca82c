//! Utilities for rendering embeddable subscribe button markup.
//!
//! The library transforms podcast metadata and distribution feeds into a
//! self-contained HTML fragment: an inline data element plus a loader script
//! tag consumed by the client-side widget application. The pipeline
//! sanitizes caller-supplied options against a whitelist registry, memoizes
//! the feed transformation behind a single-flight cache, and guarantees the
//! produced markup is structurally well-formed with a collision-free global
//! accessor name per embed instance.

mod accessor;
mod cache;
mod config;
mod embed;
mod error;
mod feed;
mod options;
mod registry;
mod render;

pub use accessor::{ACCESSOR_PREFIX, AccessorIdGenerator, SystemIdGenerator, accessor_name};
pub use cache::{TransformCache, feed_cache_key};
pub use config::{
    CDN_SCRIPT_URL, ConfigSource, StaticConfig, load_config, parse_config, resolve_script_url
};
pub use embed::{build_embed_code, size_attribute};
pub use error::{Error, io_error};
pub use feed::{Feed, FeedRecord, transform_feeds, widget_format};
pub use options::{
    ButtonOptions, DEFAULT_COLOR, DEFAULT_FORMAT, DEFAULT_LANGUAGE, DEFAULT_SIZE, DEFAULT_STYLE,
    RenderArgs, ToggleValue, normalize_language
};
pub use registry::WhitelistRegistry;
pub use render::{ButtonRenderer, ContentData, load_podcast, parse_podcast};
