use serde::{Deserialize, Serialize};

/// Wrapper element used for slides that carry no `tag-name` override.
pub const DEFAULT_TAG: &str = "slidem-slide";

/// Engine name handed to the markdown renderer when none is configured.
pub const DEFAULT_ENGINE: &str = "md";

/// Options for splitting and rendering a deck.
#[derive(Debug, Clone)]
pub struct DeckOptions {
    /// Wrapper element for slides without an explicit `tag-name` annotation.
    pub default_tag: String,
    /// Engine name passed through to the markdown renderer.
    pub engine: String,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
        }
    }
}

/// A split outline document: preamble plus ordered slide fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Content that appeared before the first slide boundary. Emitted
    /// verbatim, never rendered.
    pub preamble: String,
    /// Slide fragments in document order.
    pub slides: Vec<Slide>,
}

/// One slide fragment cut out of the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Element the rendered body is wrapped in.
    pub tag_name: String,
    /// Slide-configuring attributes, serialized onto the wrapper element.
    pub attrs: AttrSet,
    /// Markdown body. Starts with the re-emitted heading line; body lines
    /// accumulate until the next boundary.
    pub content: String,
}

/// Insertion-ordered attribute map.
///
/// A later insert for an existing key replaces the value but keeps the key's
/// original position, so serialization is deterministic in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrSet {
    entries: Vec<(String, String)>,
}

impl AttrSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as HTML attribute syntax: `key="value"` pairs joined by
    /// single spaces, in discovery order.
    pub fn to_attr_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
