//! Configuration source deciding how the widget application is delivered.
//!
//! The renderer does not own configuration storage; the hosting environment
//! supplies it through the [`ConfigSource`] collaborator. The only decision
//! made here is whether the loader element references the CDN build of the
//! widget script or a self-hosted copy below the host's base URL. A
//! YAML-backed [`StaticConfig`] implementation is provided for hosts without
//! a live settings store.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{self, Error},
    options::ToggleValue
};

/// CDN location of the stock widget application script.
pub const CDN_SCRIPT_URL: &str = "https://cdn.podlove.org/subscribe-button/javascripts/app.js";
/// Path of the self-hosted widget script relative to the host base URL.
const SELF_HOSTED_SCRIPT_PATH: &str = "podlove-subscribe-button/javascripts/app.js";
/// Option controlling CDN vs. self-hosted delivery.
const USE_CDN_OPTION: &str = "use_cdn";

/// Host-provided configuration values consumed by the embed builder.
pub trait ConfigSource: Send + Sync {
    /// Returns the option stored under `name`, or `default` when unset.
    fn get_option(&self, name: &str, default: &str) -> String;

    /// Returns the base URL of the hosting site, without trailing slash
    /// guarantees.
    fn base_url(&self) -> String;
}

/// Static configuration loaded from a YAML document.
///
/// # Examples
///
/// ```
/// use sbtn::{ConfigSource, StaticConfig, parse_config};
///
/// let config = parse_config(
///     r#"
/// base_url: https://podcast.example.org
/// options:
///   use_cdn: "false"
/// "#,
/// )?;
/// assert_eq!(config.get_option("use_cdn", "true"), "false");
/// # Ok::<(), sbtn::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticConfig {
    /// Base URL of the hosting site.
    #[serde(default)]
    pub base_url: String,

    /// Free-form option storage mirroring the host's settings table.
    #[serde(default)]
    pub options: BTreeMap<String, String>
}

impl ConfigSource for StaticConfig {
    fn get_option(&self, name: &str, default: &str) -> String {
        self.options.get(name).cloned().unwrap_or_else(|| default.to_owned())
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

/// Loads a static configuration document from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// deserialized.
pub fn load_config(path: &Path) -> Result<StaticConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses a static configuration document from a YAML string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn parse_config(contents: &str) -> Result<StaticConfig, Error> {
    let config: StaticConfig = serde_yaml::from_str(contents)?;
    Ok(config)
}

/// Resolves the URL of the widget application script.
///
/// Delivery defaults to the CDN; hosts opt into their self-hosted copy by
/// setting the `use_cdn` option to a falsy value.
pub fn resolve_script_url(config: &dyn ConfigSource) -> String {
    let use_cdn = config.get_option(USE_CDN_OPTION, "true");
    if ToggleValue::Text(use_cdn).is_truthy() {
        CDN_SCRIPT_URL.to_owned()
    } else {
        let base = config.base_url();
        format!("{}/{SELF_HOSTED_SCRIPT_PATH}", base.trim_end_matches('/'))
    }
}
