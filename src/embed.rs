// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embed code construction for the subscribe button.
//!
//! The builder assembles the final markup fragment out of exactly two
//! elements: a data carrier script that assigns the serialized widget data
//! to a uniquely named global accessor, and a loader script that references
//! the widget application with the sanitized rendering options as
//! attributes. Structural safety is established by construction — the
//! serialized payload cannot contain an unescaped closing-tag sequence, and
//! the loader always serializes with an explicit closing tag.
//!
//! Trust boundary: `color`, `button_id`, and `width` are emitted as literal
//! attribute values. They are expected to originate from trusted host
//! configuration; callers embedding raw user input must sanitize upstream.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{
    accessor::accessor_name,
    error::Error,
    feed::FeedRecord,
    options::RenderArgs,
    render::ContentData
};

/// Serialized shape of the data handed to the widget application.
#[derive(Serialize)]
struct WidgetPayload<'a> {
    title:       &'a str,
    subtitle:    &'a str,
    description: &'a str,
    cover:       &'a str,
    feeds:       &'a [FeedRecord]
}

/// Builds the embed markup fragment.
///
/// Returns an empty string without constructing any element when `records`
/// is empty; this is the single early-exit condition of the pipeline.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when the widget payload
/// cannot be encoded as JSON.
pub fn build_embed_code(
    content: &ContentData,
    records: &[FeedRecord],
    args: &RenderArgs,
    script_url: &str,
    token: &str
) -> Result<String, Error> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let accessor = accessor_name(token);
    let payload = WidgetPayload {
        title:       &content.title,
        subtitle:    &content.subtitle,
        description: &content.description,
        cover:       &content.cover,
        feeds:       records
    };
    let data = escape_script_body(&serde_json::to_string(&payload)?);

    let mut markup = String::with_capacity(data.len() + script_url.len() + 256);
    let _ = writeln!(markup, "<script>window.{accessor} = {data};</script>");
    let _ = write!(
        markup,
        "<script src=\"{script_url}\" data-json-data=\"{accessor}\" data-language=\"{}\" data-size=\"{}\" data-format=\"{}\" data-style=\"{}\" data-color=\"{}\"",
        args.language,
        size_attribute(&args.size, &args.width),
        args.format,
        args.style,
        args.color,
    );
    if let Some(button_id) = args.button_id.as_deref() {
        let _ = write!(markup, " data-buttonid=\"{button_id}\"");
    }
    if args.hide {
        markup.push_str(" data-hide=\"true\"");
    }
    // The single-space body forces an explicit closing tag.
    markup.push_str("> </script>");

    Ok(markup)
}

/// Computes the size attribute emitted on the loader element.
///
/// The width only influences the attribute when it is exactly `auto`.
///
/// # Examples
///
/// ```
/// use sbtn::size_attribute;
///
/// assert_eq!(size_attribute("medium", "auto"), "medium auto");
/// assert_eq!(size_attribute("medium", ""), "medium");
/// assert_eq!(size_attribute("medium", "300px"), "medium");
/// ```
pub fn size_attribute(size: &str, width: &str) -> String {
    if width == "auto" {
        format!("{size} auto")
    } else {
        size.to_owned()
    }
}

/// Escapes serialized JSON so it can sit verbatim inside a script body.
///
/// Every `</` becomes `<\/`, which removes closing-tag sequences while
/// remaining a valid JSON string escape, so the payload parses back to the
/// identical document.
fn escape_script_body(json: &str) -> String {
    json.replace("</", "<\\/")
}
