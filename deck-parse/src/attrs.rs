//! Annotation block parsing for heading lines.
//!
//! A heading may carry a trailing `{...}` block of whitespace-separated
//! `key=value` tokens, e.g. `# Intro {data-slide class=title}`. This module
//! extracts the block and decomposes it into tokens; deciding what each token
//! *means* is the classifier's job.

/// A single annotation token found inside a `{...}` block.
///
/// Bare keys (no `=`) carry no value. Values arrive with one outer pair of
/// quotes already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: Option<String>,
}

/// Locate the rightmost `{...}` block on a heading line.
///
/// Returns the line with the block spliced out (trailing whitespace trimmed)
/// and the block's inner text. `None` when the line has no complete block —
/// an unmatched `{` has no annotation effect.
pub fn extract_annotation(line: &str) -> Option<(String, &str)> {
    let open = line.rfind('{')?;
    let close = open + 1 + line[open + 1..].find('}')?;
    let inner = &line[open + 1..close];
    let title = format!("{}{}", &line[..open], &line[close + 1..]);
    Some((title.trim_end().to_string(), inner))
}

/// Split annotation inner text into tokens.
///
/// Tokens are whitespace-separated. `key=value` yields a valued token with
/// one outer quote pair stripped from the value; a bare valid key yields a
/// value-less token. Syntactically broken tokens (empty key, key with
/// characters outside `[A-Za-z0-9_-]`) are skipped and reported back for
/// diagnostics — they never abort the split.
pub fn parse_tokens(inner: &str) -> (Vec<Token>, Vec<String>) {
    let mut tokens = Vec::new();
    let mut malformed = Vec::new();

    for raw in inner.split_whitespace() {
        match raw.split_once('=') {
            Some((key, value)) if is_valid_key(key) => tokens.push(Token {
                key: key.to_string(),
                value: Some(strip_quotes(value).to_string()),
            }),
            None if is_valid_key(raw) => tokens.push(Token {
                key: raw.to_string(),
                value: None,
            }),
            _ => malformed.push(raw.to_string()),
        }
    }

    (tokens, malformed)
}

/// Strip exactly one outer pair of matching quotes (`'...'` or `"..."`).
///
/// Inner content is left untouched: no recursive unquoting, no escape
/// processing.
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_block_means_no_annotation() {
        assert_eq!(extract_annotation("# Plain heading"), None);
    }

    #[test]
    fn trailing_block_is_extracted() {
        let (title, inner) = extract_annotation("# Title {data-slide}").unwrap();
        assert_eq!(title, "# Title");
        assert_eq!(inner, "data-slide");
    }

    #[test]
    fn rightmost_block_wins() {
        let (title, inner) = extract_annotation("# A {x=1} tail {data-slide}").unwrap();
        assert_eq!(inner, "data-slide");
        assert_eq!(title, "# A {x=1} tail");
    }

    #[test]
    fn unmatched_brace_is_ignored() {
        assert_eq!(extract_annotation("# Oops {data-slide"), None);
    }

    #[test]
    fn block_mid_line_is_spliced_out() {
        let (title, inner) = extract_annotation("# Mid {data-slide} dle").unwrap();
        assert_eq!(inner, "data-slide");
        assert_eq!(title, "# Mid  dle");
    }

    #[test]
    fn tokens_split_on_whitespace() {
        let (tokens, malformed) = parse_tokens("data-slide  tag-name=section");
        assert!(malformed.is_empty());
        assert_eq!(
            tokens,
            vec![
                Token { key: "data-slide".into(), value: None },
                Token { key: "tag-name".into(), value: Some("section".into()) },
            ]
        );
    }

    #[test]
    fn quoted_values_lose_one_outer_pair() {
        let (tokens, _) = parse_tokens(r#"a="one two" b='three'"#);
        // The splitter is whitespace-based, so quoted values with spaces split
        // apart; single-word quoted values round-trip cleanly.
        assert_eq!(tokens[0].value.as_deref(), Some("\"one"));
        assert_eq!(tokens[1].value.as_deref(), Some("three"));
    }

    #[test]
    fn double_and_single_quotes_normalize_identically() {
        assert_eq!(strip_quotes(r#""value""#), "value");
        assert_eq!(strip_quotes("'value'"), "value");
        assert_eq!(strip_quotes("value"), "value");
    }

    #[test]
    fn inner_quotes_are_untouched() {
        assert_eq!(strip_quotes(r#"'say "hi"'"#), r#"say "hi""#);
        assert_eq!(strip_quotes(r#""'nested'""#), "'nested'");
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        assert_eq!(strip_quotes(r#""half'"#), r#""half'"#);
        assert_eq!(strip_quotes("\""), "\"");
    }

    #[test]
    fn broken_tokens_are_reported_not_fatal() {
        let (tokens, malformed) = parse_tokens("=orphan ok=1 b!d=2");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].key, "ok");
        assert_eq!(malformed, vec!["=orphan".to_string(), "b!d=2".to_string()]);
    }

    #[test]
    fn empty_inner_yields_nothing() {
        let (tokens, malformed) = parse_tokens("   ");
        assert!(tokens.is_empty());
        assert!(malformed.is_empty());
    }
}
