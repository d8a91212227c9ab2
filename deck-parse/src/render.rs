//! Slide rendering and reassembly.
//!
//! Each slide's body goes through the markdown renderer independently; the
//! renders run concurrently and the results are collected positionally, so
//! output order always matches input order no matter which render finishes
//! first. Any single failure fails the whole transform — a partial deck is
//! not a useful deliverable.

use futures::future::{BoxFuture, try_join_all};

use crate::error::{BoxError, RenderError};
use crate::types::{Deck, DeckOptions, Slide};

/// An asynchronous markdown-to-HTML renderer.
///
/// `engine` names the markup flavor the content is written in (usually
/// `"md"`); host pipelines that support several template languages dispatch
/// on it. Implementations are treated as pure: errors propagate to the
/// caller unmodified via [`RenderError::Slide`]'s source.
pub trait MarkdownRenderer: Send + Sync {
    fn render<'a>(
        &'a self,
        content: &'a str,
        engine: &'a str,
    ) -> BoxFuture<'a, Result<String, BoxError>>;
}

/// Built-in renderer over `pulldown-cmark` with GFM extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render<'a>(
        &'a self,
        content: &'a str,
        _engine: &'a str,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        let mut options = pulldown_cmark::Options::empty();
        options.insert(pulldown_cmark::Options::ENABLE_TABLES);
        options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
        options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);
        let parser = pulldown_cmark::Parser::new_ext(content, options);
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, parser);
        Box::pin(async move { Ok(html) })
    }
}

/// Render every slide of a deck and reassemble the final markup string.
///
/// All slide renders are launched up front and awaited together
/// (fail-fast). Output: the preamble verbatim, a newline, then the wrapped
/// slides joined by newlines. A deck with zero slides comes back as the
/// untouched preamble.
pub async fn render_deck(
    deck: &Deck,
    renderer: &dyn MarkdownRenderer,
    options: &DeckOptions,
) -> Result<String, RenderError> {
    let renders = deck.slides.iter().enumerate().map(|(index, slide)| async move {
        let html = renderer
            .render(&slide.content, &options.engine)
            .await
            .map_err(|source| RenderError::Slide {
                index,
                tag_name: slide.tag_name.clone(),
                source,
            })?;
        Ok::<_, RenderError>(wrap_slide(slide, &html))
    });

    let rendered = try_join_all(renders).await?;

    let mut out = deck.preamble.clone();
    if !rendered.is_empty() {
        out.push('\n');
        out.push_str(&rendered.join("\n"));
    }
    Ok(out)
}

/// Wrap rendered slide HTML in the slide's element, with its attributes
/// reserialized in discovery order.
fn wrap_slide(slide: &Slide, html: &str) -> String {
    if slide.attrs.is_empty() {
        format!("<{tag}>{html}</{tag}>", tag = slide.tag_name)
    } else {
        format!(
            "<{tag} {attrs}>{html}</{tag}>",
            tag = slide.tag_name,
            attrs = slide.attrs.to_attr_string(),
        )
    }
}
