//! 3D hover tilt for cards.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use super::dom::{self, Listener};
use super::timers::TimerSlots;
use crate::config::TiltConfig;
use crate::error::Result;

/// Pointer position relative to a card's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn relative_to(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(sample: PointerSample, width: f64, height: f64, divisor: f64) -> Self {
        let divisor = if divisor > 0.0 { divisor } else { 1.0 };
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (sample.y - center_y) / divisor,
            rotate_y: (center_x - sample.x) / divisor,
        }
    }

    pub fn transform(&self, perspective: f64, depth: f64) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            perspective, self.rotate_x, self.rotate_y, depth
        )
    }
}

pub struct TiltEffect {
    cards: usize,
    settles: Rc<RefCell<TimerSlots<Timeout>>>,
    _listeners: Vec<Listener>,
}

impl TiltEffect {
    pub fn attach(document: &Document, config: &TiltConfig) -> Result<Self> {
        let cards = dom::query_all(document, &config.selector)?;
        let mut listeners = Vec::with_capacity(cards.len() * 3);
        let settles = Rc::new(RefCell::new(TimerSlots::new(cards.len())));

        for (index, card) in cards.iter().enumerate() {
            let target = card.clone();
            let transition = config.transition.clone();
            listeners.push(Listener::new(card, "mouseenter", move |_| {
                dom::warn_on_err("tilt enter", dom::set_style(&target, "transition", &transition));
            })?);

            let target = card.clone();
            let config_move = config.clone();
            listeners.push(Listener::new(card, "mousemove", move |event| {
                dom::warn_on_err("tilt move", on_move(&target, &event, &config_move));
            })?);

            let target = card.clone();
            let settle_ms = config.settle_ms;
            let pending = settles.clone();
            listeners.push(Listener::new(card, "mouseleave", move |_| {
                dom::warn_on_err("tilt leave", dom::clear_style(&target, "transform"));
                let settled = target.clone();
                let settle = Timeout::new(settle_ms, move || {
                    dom::warn_on_err("tilt settle", dom::clear_style(&settled, "transition"));
                });
                // A later leave on the same card replaces (and cancels) the
                // earlier settle; both clear the same property.
                pending.borrow_mut().replace(index, settle);
            })?);
        }

        log::debug!("Tilt attached to {} cards", cards.len());
        Ok(Self {
            cards: cards.len(),
            settles,
            _listeners: listeners,
        })
    }

    pub fn cards(&self) -> usize {
        self.cards
    }

    pub fn detach(self) {
        self.settles.borrow_mut().clear();
    }
}

fn on_move(card: &HtmlElement, event: &Event, config: &TiltConfig) -> Result<()> {
    let Some(event) = event.dyn_ref::<MouseEvent>() else {
        return Ok(());
    };
    let rect = card.get_bounding_client_rect();
    let sample = PointerSample::relative_to(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
    );
    let tilt = Tilt::from_pointer(sample, rect.width(), rect.height(), config.divisor);
    dom::set_style(card, "transform", &tilt.transform(config.perspective, config.depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_card_is_identity_rotation() {
        let sample = PointerSample::relative_to(250.0, 175.0, 100.0, 50.0);
        let tilt = Tilt::from_pointer(sample, 300.0, 250.0, 10.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(
            tilt.transform(1000.0, 10.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
        );
    }

    #[test]
    fn corners_tilt_towards_the_pointer() {
        // Top-left corner of a 200x100 card.
        let tilt = Tilt::from_pointer(PointerSample { x: 0.0, y: 0.0 }, 200.0, 100.0, 10.0);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 10.0);

        // Bottom-right corner.
        let tilt = Tilt::from_pointer(PointerSample { x: 200.0, y: 100.0 }, 200.0, 100.0, 10.0);
        assert_eq!(tilt.rotate_x, 5.0);
        assert_eq!(tilt.rotate_y, -10.0);
        assert_eq!(
            tilt.transform(1000.0, 10.0),
            "perspective(1000px) rotateX(5deg) rotateY(-10deg) translateZ(10px)"
        );
    }

    #[test]
    fn non_positive_divisor_does_not_produce_infinities() {
        let tilt = Tilt::from_pointer(PointerSample { x: 0.0, y: 0.0 }, 20.0, 20.0, 0.0);
        assert!(tilt.rotate_x.is_finite());
        assert!(tilt.rotate_y.is_finite());
    }
}
