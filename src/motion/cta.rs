use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use super::dom::{self, Listener};
use crate::config::CtaConfig;
use crate::error::Result;

pub fn press_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

/// Press and hover feedback for the landing page's call-to-action button.
pub struct CtaButton {
    release: Rc<RefCell<Option<Timeout>>>,
    _listeners: Vec<Listener>,
}

impl CtaButton {
    pub fn attach(document: &Document, config: &CtaConfig) -> Result<Option<Self>> {
        let Some(button) = dom::query_one(document, &format!("#{}", config.element_id))? else {
            return Ok(None);
        };

        let release = Rc::new(RefCell::new(None));
        let on_click = {
            let target = button.clone();
            let pressed = press_transform(config.press_scale);
            let press_ms = config.press_ms;
            let release = release.clone();
            Listener::new(&button, "click", move |_| {
                log::info!("Call-to-action clicked");
                dom::warn_on_err("cta press", dom::set_style(&target, "transform", &pressed));
                let released = target.clone();
                *release.borrow_mut() = Some(Timeout::new(press_ms, move || {
                    dom::warn_on_err("cta release", dom::clear_style(&released, "transform"));
                }));
            })?
        };
        let on_enter = background_listener(&button, "mouseenter", &config.hover_background)?;
        let on_leave = background_listener(&button, "mouseleave", &config.rest_background)?;

        Ok(Some(Self {
            release,
            _listeners: vec![on_click, on_enter, on_leave],
        }))
    }

    pub fn detach(self) {
        self.release.borrow_mut().take();
    }
}

fn background_listener(button: &HtmlElement, event: &'static str, background: &str) -> Result<Listener> {
    let target = button.clone();
    let background = background.to_string();
    Listener::new(button, event, move |_| {
        dom::warn_on_err("cta hover", dom::set_style(&target, "background", &background));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_shrinks_slightly() {
        assert_eq!(press_transform(0.98), "scale(0.98)");
    }
}
