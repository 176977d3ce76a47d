//! Page-load sequencing of the hero content.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use super::dom::{self, Listener};
use crate::config::LoadingConfig;
use crate::error::Result;

/// Reveal delay for the `index`-th hero child.
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// `document.readyState` after `load` has fired. A page mounted by the
/// router after that point never sees the event.
pub fn already_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Load event and fallback timer race; only the first one starts the
/// sequence.
#[derive(Debug, Default)]
pub struct LoadLatch {
    fired: Cell<bool>,
}

impl LoadLatch {
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Pending per-child reveal timeouts, cancelled when dropped.
type Stagger = Rc<RefCell<Vec<Timeout>>>;

pub struct LoadSequencer {
    latch: Rc<LoadLatch>,
    stagger: Stagger,
    _listener: Option<Listener>,
    _fallback: Option<Timeout>,
}

impl LoadSequencer {
    pub fn attach(window: &Window, document: &Document, config: &LoadingConfig) -> Result<Self> {
        let latch = Rc::new(LoadLatch::default());
        let stagger = Stagger::default();

        if already_loaded(&document.ready_state()) {
            start(&latch, &stagger, document, config);
            return Ok(Self {
                latch,
                stagger,
                _listener: None,
                _fallback: None,
            });
        }

        let listener = {
            let latch = latch.clone();
            let stagger = stagger.clone();
            let doc = document.clone();
            let config = config.clone();
            Listener::new(window, "load", move |_| start(&latch, &stagger, &doc, &config))?
        };
        let fallback = {
            let latch = latch.clone();
            let stagger = stagger.clone();
            let doc = document.clone();
            let config = config.clone();
            Timeout::new(config.fallback_ms, move || {
                if !latch.has_fired() {
                    log::debug!("Load event late, starting hero sequence anyway");
                }
                start(&latch, &stagger, &doc, &config);
            })
        };

        Ok(Self {
            latch,
            stagger,
            _listener: Some(listener),
            _fallback: Some(fallback),
        })
    }

    pub fn has_started(&self) -> bool {
        self.latch.has_fired()
    }

    pub fn detach(self) {
        let pending = self.stagger.borrow_mut().drain(..).count();
        if pending > 0 {
            log::debug!("Cancelled {} pending hero reveals", pending);
        }
    }
}

fn start(latch: &LoadLatch, stagger: &Stagger, document: &Document, config: &LoadingConfig) {
    if !latch.fire() {
        return;
    }
    dom::warn_on_err("load sequence", reveal_hero(stagger, document, config));
}

fn reveal_hero(stagger: &Stagger, document: &Document, config: &LoadingConfig) -> Result<()> {
    dom::body(document)?
        .class_list()
        .add_1(&config.loaded_class)?;
    let mut pending = stagger.borrow_mut();
    for (index, element) in dom::query_all(document, &config.selector)?
        .into_iter()
        .enumerate()
    {
        pending.push(Timeout::new(stagger_delay(index, config.stagger_ms), move || {
            dom::warn_on_err("hero reveal", dom::set_style(&element, "opacity", "1"));
            dom::warn_on_err(
                "hero reveal",
                dom::set_style(&element, "transform", "translateY(0)"),
            );
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let latch = LoadLatch::default();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn children_are_staggered() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay(i, 200)).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(stagger_delay(usize::MAX, 200), u32::MAX);
    }

    #[test]
    fn only_a_complete_document_counts_as_loaded() {
        assert!(already_loaded("complete"));
        assert!(!already_loaded("interactive"));
        assert!(!already_loaded("loading"));
        assert!(!already_loaded(""));
    }
}
