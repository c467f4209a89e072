//! Share link for the promote button

use marquee_services::settings::PromotionSettings;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is in the share text; everything else is percent-encoded.
/// Spaces are then rewritten to `+` by [`escape_share_text`].
const SHARE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Pre-built share intent URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    url: String,
}

impl ShareLink {
    /// `<base_url>?text=<escaped message\ndescription\nlink>`.
    ///
    /// `language` is not part of the URL.
    pub fn new(promotion: &PromotionSettings) -> Self {
        let text = format!(
            "{}\n{}\n{}",
            promotion.message, promotion.description, promotion.link
        );
        let url = format!("{}?text={}", promotion.base_url, escape_share_text(&text));
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Form-style escaping: space becomes `+`, other escapes use lowercase hex.
fn escape_share_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for chunk in utf8_percent_encode(text, SHARE_TEXT) {
        match chunk {
            "%20" => escaped.push('+'),
            _ if chunk.starts_with('%') => escaped.push_str(&chunk.to_ascii_lowercase()),
            _ => escaped.push_str(chunk),
        }
    }
    escaped
}
