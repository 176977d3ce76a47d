use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::{self, Listener};
use crate::config::AnchorConfig;
use crate::error::Result;

/// The in-page selector an anchor's href points at, if any. A bare `#` has
/// no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Smooth scrolling for same-page `#section` links.
pub struct AnchorScroller {
    _listeners: Vec<Listener>,
}

impl AnchorScroller {
    pub fn attach(document: &Document, config: &AnchorConfig) -> Result<Self> {
        let links = dom::query_all(document, &config.selector)?;
        let mut listeners = Vec::with_capacity(links.len());
        for link in &links {
            let doc = document.clone();
            let anchor = link.clone();
            listeners.push(Listener::new(link, "click", move |event| {
                event.prevent_default();
                dom::warn_on_err("anchor scroll", scroll_to(&doc, &anchor));
            })?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }

    pub fn detach(self) {}
}

fn scroll_to(document: &Document, anchor: &HtmlElement) -> Result<()> {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let Some(selector) = anchor_target(&href) else {
        return Ok(());
    };
    // Ids that are not valid selectors just have nowhere to go.
    let Ok(Some(target)) = document.query_selector(selector) else {
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_have_targets() {
        assert_eq!(anchor_target("#team"), Some("#team"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
    }
}
