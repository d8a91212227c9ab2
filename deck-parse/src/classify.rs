//! Token classification for heading lines.
//!
//! The `data-slide` key namespace is reserved: its presence (bare, or with a
//! suffix) marks the heading as a slide boundary. Suffixed keys configure the
//! wrapping element; anything outside the namespace stays with the heading as
//! an ordinary attribute. Classification is a pure function of the token
//! list — the segmenter's transition logic never touches raw tokens.

use crate::attrs::Token;
use crate::types::AttrSet;

/// Reserved key prefix that marks a heading as a slide boundary.
pub const SLIDE_PREFIX: &str = "data-slide";

/// Canonical key that overrides the wrapper element name. Reachable both as
/// `data-slide-tag-name` and as a plain `tag-name` token; either way it names
/// the wrapper and is never serialized as an attribute.
pub const TAG_NAME_KEY: &str = "tagName";

/// Verdict for one heading line's annotation tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The heading starts a new slide.
    Boundary {
        /// Wrapper element override, if a `tag-name` key was present.
        tag_name: Option<String>,
        /// Prefix-stripped, camel-cased attributes for the wrapper element.
        slide_attrs: AttrSet,
        /// Unprefixed attributes re-emitted inline on the heading.
        heading_attrs: AttrSet,
    },
    /// No slide marker: the heading is ordinary body text.
    PassThrough { heading_attrs: AttrSet },
}

/// Classify a heading line's tokens.
///
/// Rules:
/// - bare `data-slide` flips the boundary flag and contributes nothing else;
/// - `data-slide-<suffix>[=v]` flips the flag, and `<suffix>` (camel-cased)
///   becomes a slide-configuring attribute;
/// - any other `key=value` is a heading attribute, key camel-cased;
/// - bare unprefixed keys have no effect.
///
/// Keys that merely *start with* the prefix without a `-` separator
/// (`data-slideshow`) are not markers.
pub fn classify(tokens: Vec<Token>) -> Verdict {
    let mut boundary = false;
    let mut tag_name: Option<String> = None;
    let mut slide_attrs = AttrSet::new();
    let mut heading_attrs = AttrSet::new();

    for token in tokens {
        if let Some(rest) = token.key.strip_prefix(SLIDE_PREFIX) {
            if rest.is_empty() {
                boundary = true;
                continue;
            }
            if let Some(suffix) = rest.strip_prefix('-') {
                boundary = true;
                let key = camel_case(suffix);
                let value = token.value.unwrap_or_default();
                if key == TAG_NAME_KEY {
                    tag_name = Some(value);
                } else {
                    slide_attrs.insert(key, value);
                }
                continue;
            }
            // Shares the prefix but not the namespace — ordinary key.
        }

        let Some(value) = token.value else {
            continue;
        };
        let key = camel_case(&token.key);
        if key == TAG_NAME_KEY {
            tag_name = Some(value);
        } else {
            heading_attrs.insert(key, value);
        }
    }

    if boundary {
        Verdict::Boundary {
            tag_name,
            slide_attrs,
            heading_attrs,
        }
    } else {
        Verdict::PassThrough { heading_attrs }
    }
}

/// Convert a hyphenated key to camel case: `tag-name` → `tagName`.
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut segments = key.split('-').filter(|s| !s.is_empty());

    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
