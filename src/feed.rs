// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation logic that converts distribution feeds into widget-ready
//! records.
//!
//! Each feed exposes an asset file type, a subscribe URL, and an optional
//! podcast directory identifier. The transformer maps file extensions to the
//! canonical format identifiers understood by the widget application and
//! attaches a directory deep link when one can be derived. Input order is
//! preserved in the output.

use serde::{Deserialize, Serialize};

/// URL template prepended to strictly positive directory identifiers.
const ITUNES_DIRECTORY_URL: &str = "https://itunes.apple.com/podcast/id";
/// Variant advertised to the widget application for every feed.
const FEED_VARIANT: &str = "high";

/// Distribution feed entry as exposed by the hosting domain layer.
///
/// # Examples
///
/// ```
/// use sbtn::Feed;
///
/// let yaml = r#"
/// type: audio/mp4
/// extension: m4a
/// url: https://example.org/feed.m4a.rss
/// "#;
/// let feed: Feed = serde_yaml::from_str(yaml).expect("valid feed");
/// assert_eq!(feed.extension, "m4a");
/// assert!(feed.directory_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Feed {
    /// MIME type of the enclosure assets delivered by the feed.
    #[serde(rename = "type", alias = "media_type")]
    pub media_type: String,

    /// File extension of the enclosure assets.
    pub extension: String,

    /// Subscribe URL advertised to podcast clients.
    #[serde(alias = "url", alias = "subscribe-url")]
    pub subscribe_url: String,

    /// Optional directory identifier assigned by the iTunes podcast
    /// directory. Values that are not strictly positive are ignored.
    #[serde(default, alias = "itunes_id", alias = "directory-id")]
    pub directory_id: Option<i64>
}

/// Widget-ready record derived from a [`Feed`].
///
/// The serialized field names match the contract of the client-side widget
/// application, including the hyphenated directory link key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    /// MIME type copied verbatim from the feed.
    #[serde(rename = "type")]
    pub media_type: String,

    /// Canonical widget format identifier derived from the file extension.
    pub format: String,

    /// Subscribe URL copied verbatim from the feed.
    pub url: String,

    /// Quality variant; fixed for this pipeline.
    pub variant: String,

    /// Deep link into the iTunes podcast directory, present only when the
    /// feed carries a strictly positive directory identifier.
    #[serde(rename = "directory-url-itunes", skip_serializing_if = "Option::is_none")]
    pub directory_url_itunes: Option<String>
}

/// Maps a file extension to the canonical widget format identifier.
///
/// Extensions without a canonical mapping pass through unchanged.
///
/// # Examples
///
/// ```
/// use sbtn::widget_format;
///
/// assert_eq!(widget_format("m4a"), "aac");
/// assert_eq!(widget_format("oga"), "ogg");
/// assert_eq!(widget_format("mp3"), "mp3");
/// ```
pub fn widget_format(extension: &str) -> &str {
    match extension {
        "m4a" => "aac",
        "oga" => "ogg",
        other => other
    }
}

/// Transforms distribution feeds into widget-ready records, preserving order.
///
/// This is the public feed-transform entry point: the hosting domain layer
/// may call it independently before assembling content data, and the
/// renderer routes it through the transform cache (see
/// [`TransformCache`](crate::TransformCache)).
///
/// # Examples
///
/// ```
/// use sbtn::{Feed, transform_feeds};
///
/// let feeds = vec![Feed {
///     media_type:    "audio/mp4".to_owned(),
///     extension:     "m4a".to_owned(),
///     subscribe_url: "https://example.org/aac.rss".to_owned(),
///     directory_id:  Some(1_234)
/// }];
///
/// let records = transform_feeds(&feeds);
/// assert_eq!(records[0].format, "aac");
/// assert_eq!(
///     records[0].directory_url_itunes.as_deref(),
///     Some("https://itunes.apple.com/podcast/id1234")
/// );
/// ```
pub fn transform_feeds(feeds: &[Feed]) -> Vec<FeedRecord> {
    feeds.iter().map(transform_feed).collect()
}

fn transform_feed(feed: &Feed) -> FeedRecord {
    let directory_url_itunes = feed
        .directory_id
        .filter(|id| *id > 0)
        .map(|id| format!("{ITUNES_DIRECTORY_URL}{id}"));

    FeedRecord {
        media_type: feed.media_type.clone(),
        format: widget_format(&feed.extension).to_owned(),
        url: feed.subscribe_url.clone(),
        variant: FEED_VARIANT.to_owned(),
        directory_url_itunes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::{Feed, transform_feeds, widget_format};

    fn feed(extension: &str, url: &str, directory_id: Option<i64>) -> Feed {
        Feed {
            media_type: format!("audio/{extension}"),
            extension: extension.to_owned(),
            subscribe_url: url.to_owned(),
            directory_id
        }
    }

    #[test]
    fn widget_format_maps_known_extensions() {
        assert_eq!(widget_format("m4a"), "aac");
        assert_eq!(widget_format("oga"), "ogg");
    }

    #[test]
    fn widget_format_passes_through_unknown_extensions() {
        assert_eq!(widget_format("mp3"), "mp3");
        assert_eq!(widget_format("opus"), "opus");
        assert_eq!(widget_format(""), "");
    }

    #[test]
    fn transform_preserves_input_order() {
        let feeds = vec![
            feed("mp3", "https://example.org/mp3.rss", None),
            feed("m4a", "https://example.org/aac.rss", None),
            feed("oga", "https://example.org/ogg.rss", None),
        ];

        let records = transform_feeds(&feeds);
        let formats: Vec<&str> = records.iter().map(|r| r.format.as_str()).collect();
        assert_eq!(formats, ["mp3", "aac", "ogg"]);
    }

    #[test]
    fn transform_copies_url_and_type_verbatim() {
        let feeds = vec![feed("mp3", "https://example.org/feed?x=1&y=2", None)];
        let records = transform_feeds(&feeds);

        assert_eq!(records[0].url, "https://example.org/feed?x=1&y=2");
        assert_eq!(records[0].media_type, "audio/mp3");
        assert_eq!(records[0].variant, "high");
    }

    #[test]
    fn transform_builds_directory_url_for_positive_identifiers() {
        let feeds = vec![feed("mp3", "https://example.org/feed", Some(987_654_321))];
        let records = transform_feeds(&feeds);

        assert_eq!(
            records[0].directory_url_itunes.as_deref(),
            Some("https://itunes.apple.com/podcast/id987654321")
        );
    }

    #[test]
    fn transform_omits_directory_url_for_missing_or_invalid_identifiers() {
        let feeds = vec![
            feed("mp3", "https://example.org/a", None),
            feed("mp3", "https://example.org/b", Some(0)),
            feed("mp3", "https://example.org/c", Some(-12)),
        ];

        for record in transform_feeds(&feeds) {
            assert!(record.directory_url_itunes.is_none());
        }
    }

    #[test]
    fn transform_of_empty_input_is_empty() {
        assert!(transform_feeds(&[]).is_empty());
    }

    #[test]
    fn record_serializes_with_widget_field_names() {
        let feeds = vec![feed("m4a", "https://example.org/feed", Some(42))];
        let records = transform_feeds(&feeds);

        let json = serde_json::to_value(&records[0]).expect("record serializes");
        assert_eq!(json["type"], "audio/m4a");
        assert_eq!(json["format"], "aac");
        assert_eq!(json["variant"], "high");
        assert_eq!(json["directory-url-itunes"], "https://itunes.apple.com/podcast/id42");
    }

    #[test]
    fn record_omits_directory_key_when_absent() {
        let feeds = vec![feed("mp3", "https://example.org/feed", None)];
        let json = serde_json::to_value(&transform_feeds(&feeds)[0]).expect("record serializes");

        match json {
            Value::Object(map) => assert!(!map.contains_key("directory-url-itunes")),
            other => panic!("expected object, got {other:?}")
        }
    }

    #[test]
    fn feed_deserializes_from_aliased_document() {
        let yaml = r#"
            type: audio/ogg
            extension: oga
            url: https://example.org/ogg.rss
            itunes_id: 77
        "#;

        let parsed: Feed = serde_yaml::from_str(yaml).expect("feed deserializes");
        assert_eq!(parsed.media_type, "audio/ogg");
        assert_eq!(parsed.subscribe_url, "https://example.org/ogg.rss");
        assert_eq!(parsed.directory_id, Some(77));
    }
}
