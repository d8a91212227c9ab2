//! `deck-parse` — splitter for annotated markdown outlines.
//!
//! One flat document goes in: headings marked with a `{data-slide ...}`
//! annotation open slide fragments, everything before the first marker stays
//! as an unrendered preamble. Each fragment's body is rendered to HTML
//! independently (and concurrently) and wrapped in its slide element, then
//! the pieces are reassembled in document order.
//!
//! # Quick start
//!
//! ```
//! let result = deck_parse::split(
//!     "# Hello {data-slide}\n\nworld\n",
//!     &deck_parse::DeckOptions::default(),
//! );
//! assert!(result.diagnostics.is_empty());
//! assert_eq!(result.deck.slides.len(), 1);
//! assert_eq!(result.deck.slides[0].content, "# Hello\n\nworld\n");
//! ```

pub mod attrs;
pub mod classify;
pub mod error;
pub mod parse;
pub mod render;
pub mod types;

pub use error::*;
pub use parse::{SplitResult, split};
pub use render::{CmarkRenderer, MarkdownRenderer, render_deck};
pub use types::*;

impl Deck {
    /// Render this deck to a final markup string.
    ///
    /// Convenience wrapper around [`render::render_deck`].
    pub async fn to_markup(
        &self,
        renderer: &dyn MarkdownRenderer,
        options: &DeckOptions,
    ) -> Result<String, RenderError> {
        render::render_deck(self, renderer, options).await
    }
}
