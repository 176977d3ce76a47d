use web_sys::{Document, Element};

use super::reveal::Appearance;
use crate::config::MotionConfig;
use crate::error::{MotionError, Result};

const REDUCED_MOTION_RULES: &str = "animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
    scroll-behavior: auto !important;";

fn appearance_rules(appearance: Appearance, important: bool) -> String {
    let flag = if important { " !important" } else { "" };
    format!(
        "opacity: {}{flag}; transform: {}{flag};",
        appearance.opacity(),
        appearance.transform().unwrap_or("none"),
    )
}

/// Keyframes plus the overrides the motion guard toggles through body
/// classes. Content starts hidden only once this sheet is in the document,
/// so a page without it shows everything.
pub fn stylesheet(config: &MotionConfig) -> String {
    let reveal = &config.reveal.selector;
    let hero = &config.loading.selector;
    let guard = &config.guard;
    format!(
        r#"@keyframes charFadeIn {{
  to {{ opacity: 1; transform: translateY(0); }}
}}
{reveal} {{ {hidden} transition: opacity 0.6s ease, transform 0.6s ease; }}
{reveal}.{visible} {{ {shown} }}
{hero} {{ {hidden} transition: opacity 0.6s ease, transform 0.6s ease; }}
@media (prefers-reduced-motion: reduce) {{
  *, *::before, *::after {{ {REDUCED_MOTION_RULES} }}
}}
body.{reduced} *, body.{reduced} *::before, body.{reduced} *::after {{ {REDUCED_MOTION_RULES} }}
.{no_js} {reveal} {{ {shown} }}
.{fallback} {reveal} {{ {forced} }}
.{fallback} {hero} {{ {forced} }}
"#,
        hidden = appearance_rules(Appearance::Hidden, false),
        shown = appearance_rules(Appearance::Final, false),
        forced = appearance_rules(Appearance::Final, true),
        visible = config.reveal.visible_class,
        reduced = guard.reduced_motion_class,
        no_js = guard.no_js_class,
        fallback = guard.fallback_class,
    )
}

/// The injected `<style>` element; removed from `<head>` on drop.
pub struct Stylesheet {
    element: Element,
}

impl Stylesheet {
    pub fn inject(document: &Document, css: &str) -> Result<Self> {
        let head = document
            .head()
            .ok_or_else(|| MotionError::Dom("document has no <head>".to_string()))?;
        let element = document.create_element("style")?;
        element.set_attribute("data-motion", "")?;
        element.set_text_content(Some(css));
        head.append_child(&element)?;
        Ok(Self { element })
    }
}

impl Drop for Stylesheet {
    fn drop(&mut self) {
        self.element.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_rule_forces_final_state() {
        let css = stylesheet(&MotionConfig::default());
        assert!(css.contains(
            ".fallback-mode [data-aos] { opacity: 1 !important; transform: none !important; }"
        ));
    }

    #[test]
    fn hero_is_hidden_by_the_sheet_and_shown_by_fallback() {
        let css = stylesheet(&MotionConfig::default());
        assert!(css.contains(".hero-content > * { opacity: 0; transform: translateY(30px);"));
        assert!(css.contains(
            ".fallback-mode .hero-content > * { opacity: 1 !important; transform: none !important; }"
        ));
    }

    #[test]
    fn reduced_motion_override_is_class_scoped_too() {
        let css = stylesheet(&MotionConfig::default());
        assert!(css.contains("@media (prefers-reduced-motion: reduce)"));
        assert!(css.contains("body.reduced-motion *"));
        assert!(css.contains("transition-duration: 0.01ms !important"));
        assert!(css.contains("scroll-behavior: auto !important"));
    }

    #[test]
    fn reveal_rules_follow_config() {
        let mut config = MotionConfig::default();
        config.reveal.selector = ".reveal".to_string();
        config.reveal.visible_class = "shown".to_string();
        let css = stylesheet(&config);
        assert!(css.contains(".reveal { opacity: 0; transform: translateY(30px);"));
        assert!(css.contains(".reveal.shown { opacity: 1; transform: none; }"));
        assert!(css.contains(".no-js .reveal { opacity: 1; transform: none; }"));
        assert!(css.contains("@keyframes charFadeIn"));
    }
}
