use web_sys::{Document, HtmlElement, Window};

use super::dom::{self, Listener};
use crate::config::ParallaxConfig;
use crate::error::Result;

pub fn hero_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn hero_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// Moves the hero against the scroll direction. Inert when the page has no
/// hero.
pub struct ParallaxController {
    _listener: Listener,
}

impl ParallaxController {
    pub fn attach(
        window: &Window,
        document: &Document,
        config: &ParallaxConfig,
    ) -> Result<Option<Self>> {
        let Some(hero) = dom::query_one(document, &config.selector)? else {
            return Ok(None);
        };

        let win = window.clone();
        let rate = config.rate;
        let listener = Listener::new(window, "scroll", move |_| {
            dom::warn_on_err("parallax", apply(&win, &hero, rate));
        })?;

        Ok(Some(Self {
            _listener: listener,
        }))
    }

    pub fn detach(self) {}
}

fn apply(window: &Window, hero: &HtmlElement, rate: f64) -> Result<()> {
    let offset = hero_offset(window.scroll_y()?, rate);
    dom::set_style(hero, "transform", &hero_transform(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_moves_a_fifth_of_the_scroll_upwards() {
        assert_eq!(hero_offset(0.0, -0.2), 0.0);
        assert_eq!(hero_offset(500.0, -0.2), -100.0);
        assert_eq!(hero_transform(hero_offset(500.0, -0.2)), "translateY(-100px)");
    }

    #[test]
    fn fractional_offsets_are_kept() {
        assert_eq!(hero_transform(hero_offset(1.0, -0.5)), "translateY(-0.5px)");
    }
}
