//! Scroll-triggered reveal of `[data-aos]` elements.
//!
//! Two producers decide visibility: a geometry poll run on scroll and resize,
//! and an IntersectionObserver. Both go through [`RevealTracker::mark`], so an
//! element is revealed once no matter which fires first or how often.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use super::dom::{self, Listener, Observer};
use crate::config::RevealConfig;
use crate::error::Result;

/// Whether an element whose top edge sits at `top` counts as on screen.
pub fn crosses_threshold(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// The two states the injected stylesheet gives a revealable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    Hidden,
    Final,
}

impl Appearance {
    pub fn opacity(self) -> f64 {
        match self {
            Appearance::Hidden => 0.0,
            Appearance::Final => 1.0,
        }
    }

    /// `None` is the untransformed state.
    pub fn transform(self) -> Option<&'static str> {
        match self {
            Appearance::Hidden => Some("translateY(30px)"),
            Appearance::Final => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    activated: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            activated: vec![false; len],
        }
    }

    /// Returns true only on the first call for `index`.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.activated.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Geometry pass. `top_of` is only asked about elements still hidden.
    /// Returns the indices revealed by this pass.
    pub fn poll<F>(&mut self, viewport_height: f64, offset: f64, mut top_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> f64,
    {
        let mut revealed = Vec::new();
        for index in 0..self.activated.len() {
            if self.activated[index] {
                continue;
            }
            if crosses_threshold(top_of(index), viewport_height, offset) && self.mark(index) {
                revealed.push(index);
            }
        }
        revealed
    }

    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.mark(index)
    }

    pub fn visible_count(&self) -> usize {
        self.activated.iter().filter(|v| **v).count()
    }
}

struct Shared {
    elements: Vec<HtmlElement>,
    tracker: RefCell<RevealTracker>,
    visible_class: String,
}

impl Shared {
    fn apply(&self, index: usize) -> Result<()> {
        if let Some(element) = self.elements.get(index) {
            element.class_list().add_1(&self.visible_class)?;
        }
        Ok(())
    }

    fn poll(&self, window: &Window, offset: f64) -> Result<()> {
        let height = dom::viewport_height(window)?;
        let revealed = self.tracker.borrow_mut().poll(height, offset, |i| {
            self.elements[i].get_bounding_client_rect().top()
        });
        for index in revealed {
            self.apply(index)?;
        }
        Ok(())
    }
}

pub struct ViewportRevealer {
    shared: Rc<Shared>,
    _listeners: Vec<Listener>,
    _observer: Option<Observer>,
}

impl ViewportRevealer {
    pub fn attach(window: &Window, document: &Document, config: &RevealConfig) -> Result<Self> {
        let elements = dom::query_all(document, &config.selector)?;
        let shared = Rc::new(Shared {
            tracker: RefCell::new(RevealTracker::new(elements.len())),
            elements,
            visible_class: config.visible_class.clone(),
        });

        let observer = {
            let observed = shared.clone();
            Observer::new(
                window,
                config.threshold,
                Some(&config.root_margin),
                &shared.elements,
                move |entry| {
                    let Some(index) = dom::index_of(&observed.elements, &entry.target()) else {
                        return;
                    };
                    let newly = observed
                        .tracker
                        .borrow_mut()
                        .observe(index, entry.is_intersecting());
                    if newly {
                        dom::warn_on_err("reveal", observed.apply(index));
                    }
                },
            )?
        };

        shared.poll(window, config.offset)?;

        let mut listeners = Vec::with_capacity(2);
        for event in ["scroll", "resize"] {
            let shared = shared.clone();
            let win = window.clone();
            let offset = config.offset;
            listeners.push(Listener::new(window, event, move |_| {
                dom::warn_on_err("reveal poll", shared.poll(&win, offset));
            })?);
        }

        log::debug!(
            "Reveal attached to {} elements (observer: {})",
            shared.elements.len(),
            observer.is_some()
        );

        Ok(Self {
            shared,
            _listeners: listeners,
            _observer: observer,
        })
    }

    pub fn revealed(&self) -> usize {
        self.shared.tracker.borrow().visible_count()
    }

    pub fn detach(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert!(crosses_threshold(649.0, 800.0, 150.0));
        assert!(!crosses_threshold(650.0, 800.0, 150.0));
        assert!(!crosses_threshold(900.0, 800.0, 150.0));
        assert!(crosses_threshold(-400.0, 800.0, 150.0));
    }

    #[test]
    fn mark_is_one_way() {
        let mut tracker = RevealTracker::new(2);
        assert!(tracker.mark(1));
        assert!(!tracker.mark(1));
        assert_eq!(tracker.visible_count(), 1);
        assert!(!tracker.mark(7));
        assert_eq!(tracker.visible_count(), 1);
    }

    #[test]
    fn poll_reveals_elements_above_the_line() {
        let mut tracker = RevealTracker::new(3);
        let tops = [100.0, 700.0, 2000.0];
        let revealed = tracker.poll(800.0, 150.0, |i| tops[i]);
        assert_eq!(revealed, vec![0]);

        // Scrolled down: the second element moves up past the line.
        let tops = [-500.0, 400.0, 1400.0];
        let revealed = tracker.poll(800.0, 150.0, |i| tops[i]);
        assert_eq!(revealed, vec![1]);
        assert_eq!(tracker.visible_count(), 2);
    }

    #[test]
    fn poll_skips_geometry_for_revealed_elements() {
        let mut tracker = RevealTracker::new(2);
        tracker.mark(0);
        let mut asked = Vec::new();
        tracker.poll(800.0, 150.0, |i| {
            asked.push(i);
            5000.0
        });
        assert_eq!(asked, vec![1]);
    }

    #[test]
    fn observer_and_poll_race_reveals_once() {
        let mut tracker = RevealTracker::new(1);
        assert!(tracker.observe(0, true));
        assert!(tracker.poll(800.0, 150.0, |_| 0.0).is_empty());

        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.poll(800.0, 150.0, |_| 0.0), vec![0]);
        assert!(!tracker.observe(0, true));
    }

    #[test]
    fn repeated_signals_never_unmark() {
        let mut tracker = RevealTracker::new(1);
        tracker.observe(0, true);
        for _ in 0..10 {
            assert!(!tracker.observe(0, false));
            assert!(tracker.poll(800.0, 150.0, |_| 5000.0).is_empty());
        }
        assert_eq!(tracker.visible_count(), 1);
    }

    #[test]
    fn non_intersecting_entry_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(0, false));
        assert_eq!(tracker.visible_count(), 0);
        assert!(tracker.observe(0, true));
    }

    #[test]
    fn appearances_match_the_stylesheet_states() {
        assert_eq!(Appearance::Hidden.opacity(), 0.0);
        assert_eq!(Appearance::Hidden.transform(), Some("translateY(30px)"));
        assert_eq!(Appearance::Final.opacity(), 1.0);
        assert_eq!(Appearance::Final.transform(), None);
    }
}
