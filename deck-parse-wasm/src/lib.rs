//! WASM bindings for `deck-parse`.
//!
//! Exposes the outline-to-slides transformer to JavaScript build pipelines
//! via wasm-bindgen. Call `split()` with a document to get the segmentation
//! as JSON, or `render()` for the full transform with the built-in markdown
//! renderer.

use deck_parse::{CmarkRenderer, DeckOptions};
use wasm_bindgen::prelude::*;

/// Split an outline document and return the segmentation as JSON.
///
/// Returns a JSON object with `{ preamble, slides, diagnostics }`.
/// Each slide carries `tag_name`, `attrs` (ordered key/value pairs) and
/// its markdown `content`.
#[wasm_bindgen]
pub fn split(input: &str) -> String {
    let result = deck_parse::split(input, &DeckOptions::default());
    serde_json::json!({
        "preamble": result.deck.preamble,
        "slides": result.deck.slides,
        "diagnostics": result.diagnostics,
    })
    .to_string()
}

/// Transform an outline document into final slide markup.
///
/// Slides are rendered with the built-in markdown renderer and wrapped in
/// their slide elements; the preamble passes through verbatim. Rejects if
/// rendering fails for any slide.
#[wasm_bindgen]
pub async fn render(input: String) -> Result<String, JsError> {
    let options = DeckOptions::default();
    let result = deck_parse::split(&input, &options);
    result
        .deck
        .to_markup(&CmarkRenderer, &options)
        .await
        .map_err(|e| JsError::new(&e.to_string()))
}
