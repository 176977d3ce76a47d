//! Reduced-motion, error fallback and tab-visibility handling.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Animation, Document, ErrorEvent, HtmlElement, Window};

use super::dom::{self, Listener};
use crate::config::GuardConfig;
use crate::error::Result;

/// Page-wide motion state. Reduced motion is fixed at startup; fallback mode
/// can only be entered, never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    reduced_motion: bool,
    fallback: bool,
}

impl MotionState {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            fallback: false,
        }
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// True the first time only.
    pub fn enter_fallback(&mut self) -> bool {
        let entered = !self.fallback;
        self.fallback = true;
        entered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Pause,
    Play,
}

impl PlaybackCommand {
    pub fn for_visibility(hidden: bool) -> Self {
        if hidden {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        }
    }
}

pub fn prefers_reduced_motion(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

pub struct MotionPreferenceGuard {
    state: Rc<Cell<MotionState>>,
    body: HtmlElement,
    fallback_class: String,
    _listeners: Vec<Listener>,
}

impl MotionPreferenceGuard {
    /// Applies the reduced-motion class synchronously, then starts watching
    /// for errors and visibility changes.
    pub fn attach(window: &Window, document: &Document, config: &GuardConfig) -> Result<Self> {
        let body = dom::body(document)?;
        let reduced = prefers_reduced_motion(window, &config.reduced_motion_query);
        if reduced {
            body.class_list().add_1(&config.reduced_motion_class)?;
            log::info!("Reduced motion requested, collapsing animations");
        }
        let state = Rc::new(Cell::new(MotionState::new(reduced)));

        let on_error = {
            let state = state.clone();
            let body = body.clone();
            let class = config.fallback_class.clone();
            Listener::new(window, "error", move |event| {
                let message = event
                    .dyn_ref::<ErrorEvent>()
                    .map(|e| e.message())
                    .unwrap_or_default();
                log::warn!("Page error: {}", message);
                dom::warn_on_err("fallback", apply_fallback(&state, &body, &class));
            })?
        };

        let on_visibility = {
            let doc = document.clone();
            Listener::new(document, "visibilitychange", move |_| {
                apply_playback(&doc, PlaybackCommand::for_visibility(doc.hidden()));
            })?
        };

        Ok(Self {
            state,
            body,
            fallback_class: config.fallback_class.clone(),
            _listeners: vec![on_error, on_visibility],
        })
    }

    pub fn state(&self) -> MotionState {
        self.state.get()
    }

    /// Same one-way switch a page error flips.
    pub fn enter_fallback(&self) -> Result<()> {
        apply_fallback(&self.state, &self.body, &self.fallback_class)
    }

    pub fn detach(self) {}
}

fn apply_fallback(state: &Cell<MotionState>, body: &HtmlElement, class: &str) -> Result<()> {
    let mut current = state.get();
    if !current.enter_fallback() {
        return Ok(());
    }
    state.set(current);
    body.class_list().add_1(class)?;
    log::warn!("Entered fallback mode, revealing all animated content");
    Ok(())
}

fn apply_playback(document: &Document, command: PlaybackCommand) {
    for animation in document.get_animations().iter() {
        let Ok(animation) = animation.dyn_into::<Animation>() else {
            continue;
        };
        let result = match command {
            PlaybackCommand::Pause => animation.pause(),
            PlaybackCommand::Play => animation.play(),
        };
        if let Err(e) = result {
            log::warn!("Failed to {:?} animation: {:?}", command, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_entered_once() {
        let mut state = MotionState::new(false);
        assert!(!state.is_fallback());
        assert!(state.enter_fallback());
        assert!(state.is_fallback());
        assert!(!state.enter_fallback());
        assert!(state.is_fallback());
    }

    #[test]
    fn fallback_keeps_reduced_motion() {
        let mut state = MotionState::new(true);
        state.enter_fallback();
        assert!(state.is_reduced_motion());
        assert!(state.is_fallback());
    }

    #[test]
    fn hidden_tab_pauses_and_visible_tab_plays() {
        assert_eq!(PlaybackCommand::for_visibility(true), PlaybackCommand::Pause);
        assert_eq!(PlaybackCommand::for_visibility(false), PlaybackCommand::Play);
    }
}
