// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Caller-supplied rendering options and their sanitization.
//!
//! Option bags arrive from shortcode-style host integrations and are only
//! partially trusted: the enumerated fields are checked against the
//! whitelist registry and silently fall back to module defaults when a value
//! is unknown. Sanitization never rejects a call — a malformed option
//! degrades to its default instead of surfacing an error to the embedding
//! page.

use serde::{Deserialize, Serialize};

use crate::registry::WhitelistRegistry;

/// Default button size when none or an unknown one is supplied.
pub const DEFAULT_SIZE: &str = "big";
/// Default cover format.
pub const DEFAULT_FORMAT: &str = "cover";
/// Default visual style.
pub const DEFAULT_STYLE: &str = "filled";
/// Default widget language.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Default accent color of the stock widget application.
pub const DEFAULT_COLOR: &str = "#75ad91";

/// Raw rendering options as supplied by the caller.
///
/// Every field is optional; unspecified fields fall back to the module
/// defaults during [`sanitize`](Self::sanitize). The four content fields
/// (`title`, `subtitle`, `description`, `cover`) double as overrides that
/// take precedence over equally-named podcast content data when non-empty.
///
/// # Examples
///
/// ```
/// use sbtn::{ButtonOptions, WhitelistRegistry};
///
/// let yaml = r#"
/// size: medium
/// language: de-DE
/// hide: "on"
/// "#;
/// let options: ButtonOptions = serde_yaml::from_str(yaml).expect("valid options");
/// let args = options.sanitize(&WhitelistRegistry::default());
///
/// assert_eq!(args.size, "medium");
/// assert_eq!(args.language, "de");
/// assert!(args.hide);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ButtonOptions {
    /// Requested button size; must be a whitelisted identifier to be kept.
    #[serde(default)]
    pub size: Option<String>,

    /// Requested cover format; must be a whitelisted identifier to be kept.
    #[serde(default)]
    pub format: Option<String>,

    /// Free-form width value. Only the exact value `auto` influences the
    /// emitted size string.
    #[serde(default)]
    pub width: Option<String>,

    /// Requested visual style; must be a whitelisted identifier to be kept.
    #[serde(default)]
    pub style: Option<String>,

    /// BCP-47-like language tag, reduced to its primary subtag.
    #[serde(default)]
    pub language: Option<String>,

    /// CSS color passed through to the widget application.
    #[serde(default)]
    pub color: Option<String>,

    /// Optional identifier distinguishing multiple buttons on one page.
    #[serde(default, alias = "buttonid", alias = "button-id")]
    pub button_id: Option<String>,

    /// Boolean-ish flag hiding the rendered button.
    #[serde(default)]
    pub hide: Option<ToggleValue>,

    /// Podcast title override.
    #[serde(default)]
    pub title: Option<String>,

    /// Podcast subtitle override.
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Podcast description override.
    #[serde(default)]
    pub description: Option<String>,

    /// Podcast cover URL override.
    #[serde(default)]
    pub cover: Option<String>
}

/// Boolean-ish option value accepted for the `hide` flag.
///
/// Host integrations hand the flag through in whatever shape their template
/// language produced, so booleans, integers, and strings are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ToggleValue {
    /// Native boolean.
    Bool(bool),
    /// Numeric flag; only `1` counts as truthy.
    Number(i64),
    /// Textual flag; `true`, `1`, and `on` count as truthy.
    Text(String)
}

impl ToggleValue {
    /// Returns `true` when the value is one of the accepted truthy
    /// representations: `true`, `"true"`, `"1"`, `1`, `"on"`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value == 1,
            Self::Text(value) => {
                matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on")
            }
        }
    }
}

/// Sanitized rendering arguments with all invariants established.
///
/// `size`, `format`, and `style` are guaranteed members of the whitelist
/// registry used during sanitization; `language` is always a lowercase
/// primary subtag. `width`, `color`, and `button_id` are passed through
/// verbatim — the host is responsible for sanitizing them upstream when they
/// originate from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderArgs {
    /// Whitelisted button size.
    pub size:      String,
    /// Whitelisted cover format.
    pub format:    String,
    /// Free-form width value, empty when unset.
    pub width:     String,
    /// Whitelisted visual style.
    pub style:     String,
    /// Lowercase primary language subtag.
    pub language:  String,
    /// CSS color literal.
    pub color:     String,
    /// Button identifier, present only when non-empty.
    pub button_id: Option<String>,
    /// Resolved hide flag.
    pub hide:      bool
}

impl Default for RenderArgs {
    fn default() -> Self {
        ButtonOptions::default().sanitize(&WhitelistRegistry::default())
    }
}

impl ButtonOptions {
    /// Merges the options over the module defaults and validates the
    /// enumerated fields against `registry`.
    ///
    /// Unknown `size`, `style`, or `format` values are silently replaced by
    /// their defaults; the raw caller value never reaches the output. This
    /// operation cannot fail.
    pub fn sanitize(&self, registry: &WhitelistRegistry) -> RenderArgs {
        let size = pick(self.size.as_deref(), DEFAULT_SIZE, |v| registry.contains_size(v));
        let format = pick(self.format.as_deref(), DEFAULT_FORMAT, |v| registry.contains_format(v));
        let style = pick(self.style.as_deref(), DEFAULT_STYLE, |v| registry.contains_style(v));

        let language = normalize_language(self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE));

        let color = self
            .color
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_COLOR)
            .to_owned();

        let button_id =
            self.button_id.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);

        RenderArgs {
            size,
            format,
            width: self.width.clone().unwrap_or_default(),
            style,
            language,
            color,
            button_id,
            hide: self.hide.as_ref().is_some_and(ToggleValue::is_truthy)
        }
    }
}

fn pick(supplied: Option<&str>, default: &str, is_valid: impl Fn(&str) -> bool) -> String {
    match supplied {
        Some(value) if is_valid(value) => value.to_owned(),
        _ => default.to_owned()
    }
}

/// Reduces a BCP-47-like language tag to its lowercase primary subtag.
///
/// Falls back to the default language when the tag is empty after trimming.
///
/// # Examples
///
/// ```
/// use sbtn::normalize_language;
///
/// assert_eq!(normalize_language("de"), "de");
/// assert_eq!(normalize_language("de-DE"), "de");
/// assert_eq!(normalize_language("en-GB"), "en");
/// ```
pub fn normalize_language(tag: &str) -> String {
    let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
    if primary.is_empty() {
        DEFAULT_LANGUAGE.to_owned()
    } else {
        primary.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{
        ButtonOptions, DEFAULT_COLOR, DEFAULT_FORMAT, DEFAULT_SIZE, DEFAULT_STYLE, RenderArgs,
        ToggleValue, normalize_language
    };
    use crate::registry::WhitelistRegistry;

    fn registry() -> WhitelistRegistry {
        WhitelistRegistry::default()
    }

    #[test]
    fn sanitize_of_empty_options_yields_defaults() {
        let args = ButtonOptions::default().sanitize(&registry());

        assert_eq!(args.size, DEFAULT_SIZE);
        assert_eq!(args.format, DEFAULT_FORMAT);
        assert_eq!(args.style, DEFAULT_STYLE);
        assert_eq!(args.language, "en");
        assert_eq!(args.color, DEFAULT_COLOR);
        assert_eq!(args.width, "");
        assert!(args.button_id.is_none());
        assert!(!args.hide);
    }

    #[test]
    fn sanitize_keeps_whitelisted_values() {
        let options = ButtonOptions {
            size: Some("small".to_owned()),
            format: Some("square".to_owned()),
            style: Some("outline".to_owned()),
            ..ButtonOptions::default()
        };

        let args = options.sanitize(&registry());
        assert_eq!(args.size, "small");
        assert_eq!(args.format, "square");
        assert_eq!(args.style, "outline");
    }

    #[test]
    fn sanitize_replaces_unknown_values_with_defaults() {
        let options = ButtonOptions {
            size: Some("enormous".to_owned()),
            format: Some("circle".to_owned()),
            style: Some("<script>".to_owned()),
            ..ButtonOptions::default()
        };

        let args = options.sanitize(&registry());
        assert_eq!(args.size, DEFAULT_SIZE);
        assert_eq!(args.format, DEFAULT_FORMAT);
        assert_eq!(args.style, DEFAULT_STYLE);
    }

    #[test]
    fn sanitize_passes_width_and_color_through() {
        let options = ButtonOptions {
            width: Some("300px".to_owned()),
            color: Some("rebeccapurple".to_owned()),
            ..ButtonOptions::default()
        };

        let args = options.sanitize(&registry());
        assert_eq!(args.width, "300px");
        assert_eq!(args.color, "rebeccapurple");
    }

    #[test]
    fn sanitize_drops_blank_button_id() {
        let options = ButtonOptions {
            button_id: Some("   ".to_owned()),
            ..ButtonOptions::default()
        };
        assert!(options.sanitize(&registry()).button_id.is_none());

        let options = ButtonOptions {
            button_id: Some(" sidebar ".to_owned()),
            ..ButtonOptions::default()
        };
        assert_eq!(options.sanitize(&registry()).button_id.as_deref(), Some("sidebar"));
    }

    #[test]
    fn language_keeps_primary_subtag_lowercased() {
        assert_eq!(normalize_language("de"), "de");
        assert_eq!(normalize_language("de-DE"), "de");
        assert_eq!(normalize_language("en-GB"), "en");
        assert_eq!(normalize_language("PT_br"), "pt");
        assert_eq!(normalize_language("  fr-CA  "), "fr");
        assert_eq!(normalize_language(""), "en");
    }

    #[test]
    fn hide_accepts_documented_truthy_representations() {
        for value in [
            ToggleValue::Bool(true),
            ToggleValue::Number(1),
            ToggleValue::Text("true".to_owned()),
            ToggleValue::Text("1".to_owned()),
            ToggleValue::Text("on".to_owned()),
        ] {
            assert!(value.is_truthy(), "{value:?} should be truthy");
        }
    }

    #[test]
    fn hide_rejects_other_representations() {
        for value in [
            ToggleValue::Bool(false),
            ToggleValue::Number(0),
            ToggleValue::Number(2),
            ToggleValue::Text("false".to_owned()),
            ToggleValue::Text("yes".to_owned()),
            ToggleValue::Text("off".to_owned()),
            ToggleValue::Text(String::new()),
        ] {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn options_deserialize_mixed_hide_shapes() {
        let truthy: ButtonOptions =
            serde_yaml::from_str("hide: 1").expect("numeric hide deserializes");
        assert!(truthy.sanitize(&registry()).hide);

        let textual: ButtonOptions =
            serde_yaml::from_str("hide: \"on\"").expect("textual hide deserializes");
        assert!(textual.sanitize(&registry()).hide);

        let falsy: ButtonOptions =
            serde_yaml::from_str("hide: false").expect("boolean hide deserializes");
        assert!(!falsy.sanitize(&registry()).hide);
    }

    #[test]
    fn options_deserialize_buttonid_alias() {
        let options: ButtonOptions =
            serde_yaml::from_str("buttonid: sidebar").expect("alias deserializes");
        assert_eq!(options.button_id.as_deref(), Some("sidebar"));
    }

    #[test]
    fn default_render_args_match_sanitized_defaults() {
        assert_eq!(RenderArgs::default(), ButtonOptions::default().sanitize(&registry()));
    }

    proptest! {
        #[test]
        fn sanitized_enumerations_are_always_whitelisted(
            size in ".{0,24}",
            style in ".{0,24}",
            format in ".{0,24}"
        ) {
            let options = ButtonOptions {
                size: Some(size),
                style: Some(style),
                format: Some(format),
                ..ButtonOptions::default()
            };
            let reg = registry();
            let args = options.sanitize(&reg);

            prop_assert!(reg.contains_size(&args.size));
            prop_assert!(reg.contains_style(&args.style));
            prop_assert!(reg.contains_format(&args.format));
        }

        #[test]
        fn normalized_language_is_lowercase_without_separators(tag in ".{0,16}") {
            let language = normalize_language(&tag);
            prop_assert!(!language.is_empty());
            prop_assert!(!language.contains(['-', '_']));
            prop_assert_eq!(language.to_ascii_lowercase(), language);
        }
    }
}
