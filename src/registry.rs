// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Whitelist registry describing the legal values for enumerated button
//! options.
//!
//! The registry maps option identifiers to human readable labels for the
//! three enumerated rendering options: button size, visual style, and cover
//! format. The sanitizer only consumes the key sets; the labels exist for
//! host environments that surface the choices in a settings UI. A built-in
//! registry matching the stock widget application is provided through
//! [`Default`], and hosts can deserialize their own registry from YAML when
//! the widget build they ship supports additional presets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Enumerations of legal values for the whitelisted rendering options.
///
/// # Examples
///
/// ```
/// use sbtn::WhitelistRegistry;
///
/// let registry = WhitelistRegistry::default();
/// assert!(registry.contains_size("big-logo"));
/// assert!(!registry.contains_style("sparkly"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WhitelistRegistry {
    /// Legal button sizes keyed by identifier.
    #[serde(default = "default_sizes")]
    pub sizes:   BTreeMap<String, String>,
    /// Legal visual styles keyed by identifier.
    #[serde(default = "default_styles")]
    pub styles:  BTreeMap<String, String>,
    /// Legal cover formats keyed by identifier.
    #[serde(default = "default_formats")]
    pub formats: BTreeMap<String, String>
}

impl Default for WhitelistRegistry {
    fn default() -> Self {
        Self {
            sizes:   default_sizes(),
            styles:  default_styles(),
            formats: default_formats()
        }
    }
}

impl WhitelistRegistry {
    /// Returns `true` when `value` is a legal size identifier.
    pub fn contains_size(&self, value: &str) -> bool {
        self.sizes.contains_key(value)
    }

    /// Returns `true` when `value` is a legal style identifier.
    pub fn contains_style(&self, value: &str) -> bool {
        self.styles.contains_key(value)
    }

    /// Returns `true` when `value` is a legal format identifier.
    pub fn contains_format(&self, value: &str) -> bool {
        self.formats.contains_key(value)
    }
}

fn labeled(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(id, label)| ((*id).to_owned(), (*label).to_owned()))
        .collect()
}

fn default_sizes() -> BTreeMap<String, String> {
    labeled(&[
        ("small", "Small"),
        ("medium", "Medium"),
        ("big", "Big"),
        ("big-logo", "Big with logo")
    ])
}

fn default_styles() -> BTreeMap<String, String> {
    labeled(&[
        ("filled", "Filled"),
        ("outline", "Outline"),
        ("frameless", "Frameless")
    ])
}

fn default_formats() -> BTreeMap<String, String> {
    labeled(&[
        ("rectangle", "Rectangle"),
        ("square", "Square"),
        ("cover", "Cover")
    ])
}
