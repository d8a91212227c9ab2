//! Outline segmenter.
//!
//! A single line-by-line pass over the document. Heading lines are checked
//! for a slide-marker annotation; everything else accumulates into either the
//! preamble (before the first boundary) or the currently open slide.

use crate::attrs::{extract_annotation, parse_tokens};
use crate::classify::{Verdict, classify};
use crate::error::Diagnostic;
use crate::types::{Deck, DeckOptions, Slide};

/// Result of splitting an outline document.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// The split deck.
    pub deck: Deck,
    /// Non-fatal diagnostics collected during the walk.
    pub diagnostics: Vec<Diagnostic>,
}

/// Split an outline document into a preamble and ordered slide fragments.
///
/// This function never fails. Malformed annotation tokens degrade to
/// diagnostics; a document with no slide markers comes back as pure preamble.
///
/// Every input line lands exactly once in the preamble or in one slide's
/// content. Heading lines that open a slide are re-emitted with the
/// annotation block removed; heading attributes, if any, are reserialized
/// inline on that line so an attribute-aware markdown renderer can pick them
/// up.
pub fn split(input: &str, options: &DeckOptions) -> SplitResult {
    // Normalise CRLF → LF so line handling is platform-agnostic.
    let normalised = input.replace("\r\n", "\n");
    let mut lines: Vec<&str> = normalised.split('\n').collect();
    // A trailing newline produces one empty trailing segment, not a line.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut diagnostics = Vec::new();
    let mut preamble = String::new();
    let mut slides: Vec<Slide> = Vec::new();
    let mut current: Option<Slide> = None;

    for (idx, &line) in lines.iter().enumerate() {
        if is_heading(line)
            && let Some((title, inner)) = extract_annotation(line)
        {
            let (tokens, malformed) = parse_tokens(inner);
            for raw in malformed {
                diagnostics.push(Diagnostic::warning(
                    format!("ignoring malformed annotation token '{raw}'"),
                    idx + 1,
                ));
            }

            if let Verdict::Boundary {
                tag_name,
                slide_attrs,
                heading_attrs,
            } = classify(tokens)
            {
                if let Some(done) = current.take() {
                    slides.push(done);
                }

                let mut content = title;
                if !heading_attrs.is_empty() {
                    content.push_str(&format!(" {{{}}}", heading_attrs.to_attr_string()));
                }
                content.push('\n');

                current = Some(Slide {
                    tag_name: tag_name.unwrap_or_else(|| options.default_tag.clone()),
                    attrs: slide_attrs,
                    content,
                });
                continue;
            }
            // PassThrough: an annotated heading with no slide marker is
            // ordinary body text, emitted verbatim below.
        }

        match current.as_mut() {
            Some(slide) => {
                slide.content.push_str(line);
                slide.content.push('\n');
            }
            None => {
                preamble.push_str(line);
                preamble.push('\n');
            }
        }
    }

    // End-of-document flush.
    if let Some(done) = current.take() {
        slides.push(done);
    }

    SplitResult {
        deck: Deck { preamble, slides },
        diagnostics,
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}
