use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::config::TitleConfig;
use crate::error::Result;

const SPLIT_MARKER: &str = "data-split";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpan {
    pub text: String,
    pub delay_ms: u32,
}

/// One span per character, staggered by `char_delay_s`. Whitespace becomes a
/// non-breaking space so inline-block spans keep the word gaps.
pub fn split_title(text: &str, char_delay_s: f64) -> Vec<CharSpan> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| CharSpan {
            text: if ch.is_whitespace() {
                '\u{a0}'.to_string()
            } else {
                ch.to_string()
            },
            delay_ms: (index as f64 * char_delay_s * 1000.0).round().max(0.0) as u32,
        })
        .collect()
}

/// Replaces the hero title's text with animated per-character spans. Runs at
/// most once per title element.
pub struct TitleReveal;

impl TitleReveal {
    pub fn apply(document: &Document, config: &TitleConfig) -> Result<usize> {
        let Some(title) = dom::query_one(document, &config.selector)? else {
            return Ok(0);
        };
        if title.has_attribute(SPLIT_MARKER) {
            return Ok(0);
        }

        // Edge whitespace is kept: it becomes leading or trailing NBSP spans
        // and shifts the stagger of the visible characters.
        let text = title.text_content().unwrap_or_default();
        let spans = split_title(&text, config.char_delay_s);
        title.set_text_content(None);
        for span in &spans {
            let el = document.create_element("span")?.unchecked_into::<HtmlElement>();
            el.set_text_content(Some(&span.text));
            dom::set_style(&el, "display", "inline-block")?;
            dom::set_style(&el, "opacity", "0")?;
            dom::set_style(&el, "transform", "translateY(20px)")?;
            // The shorthand resets the delay, so it has to go first.
            dom::set_style(&el, "animation", &config.animation)?;
            dom::set_style(&el, "animation-delay", &format!("{}ms", span.delay_ms))?;
            title.append_child(&el)?;
        }
        title.set_attribute(SPLIT_MARKER, "")?;
        Ok(spans.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_span_per_character_with_stagger() {
        let spans = split_title("E-Cell", 0.1);
        assert_eq!(spans.len(), 6);
        let delays: Vec<u32> = spans.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
        assert_eq!(spans[1].text, "-");
    }

    #[test]
    fn spaces_survive_as_nbsp() {
        let spans = split_title("Hi you", 0.1);
        assert_eq!(spans[2].text, "\u{a0}");
    }

    #[test]
    fn splits_by_scalar_value() {
        let spans = split_title("héllo✨", 0.05);
        assert_eq!(spans.len(), 6);
        assert_eq!(spans[1].text, "é");
        assert_eq!(spans[5].text, "✨");
        assert_eq!(spans[5].delay_ms, 250);
    }

    #[test]
    fn edge_whitespace_is_not_trimmed() {
        let spans = split_title(" Go\n", 0.1);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["\u{a0}", "G", "o", "\u{a0}"]);
        assert_eq!(spans[1].delay_ms, 100);
    }

    #[test]
    fn empty_title_yields_nothing() {
        assert!(split_title("", 0.1).is_empty());
    }
}
