//! Decorative page motion.
//!
//! [`Motion::attach`] binds every controller to the current document and
//! returns a handle; dropping the handle (or calling [`Motion::detach`])
//! removes all listeners, observers, pending timers and the injected
//! stylesheet. Controllers are independent of each other. A missing element
//! just leaves its controller inert, and a controller that fails to attach is
//! skipped without taking the others down.

pub mod anchors;
pub mod counter;
pub mod cta;
pub mod dom;
pub mod guard;
pub mod loading;
pub mod parallax;
pub mod reveal;
pub mod styles;
pub mod tilt;
pub mod timers;
pub mod title;

use web_sys::{Document, Window};

use crate::config::{GuardConfig, MotionConfig};
use crate::error::Result;

use anchors::AnchorScroller;
use counter::CounterAnimation;
use cta::CtaButton;
use guard::{MotionPreferenceGuard, MotionState};
use loading::LoadSequencer;
use parallax::ParallaxController;
use reveal::ViewportRevealer;
use styles::Stylesheet;
use tilt::TiltEffect;
use title::TitleReveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Stylesheet,
    Preference,
    Reveal,
    Parallax,
    Tilt,
    Counters,
    Anchors,
    Title,
    Loading,
    Cta,
}

impl Stage {
    /// Stages whose content the stylesheet hides until the stage shows it.
    /// If one of these fails to attach, the page drops into fallback mode.
    pub fn hides_content(self) -> bool {
        matches!(self, Stage::Reveal | Stage::Loading)
    }
}

/// Overrides go in before anything can move.
pub const STARTUP: [Stage; 10] = [
    Stage::Stylesheet,
    Stage::Preference,
    Stage::Reveal,
    Stage::Parallax,
    Stage::Tilt,
    Stage::Counters,
    Stage::Anchors,
    Stage::Title,
    Stage::Loading,
    Stage::Cta,
];

#[derive(Default)]
pub struct Motion {
    stylesheet: Option<Stylesheet>,
    guard: Option<MotionPreferenceGuard>,
    reveal: Option<ViewportRevealer>,
    parallax: Option<ParallaxController>,
    tilt: Option<TiltEffect>,
    counters: Option<CounterAnimation>,
    anchors: Option<AnchorScroller>,
    loading: Option<LoadSequencer>,
    cta: Option<CtaButton>,
}

impl Motion {
    pub fn attach() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let config = MotionConfig::load(&document);
        Ok(Self::attach_with(&window, &document, &config))
    }

    pub fn attach_with(window: &Window, document: &Document, config: &MotionConfig) -> Self {
        let mut motion = Motion::default();
        for stage in STARTUP {
            if let Err(e) = motion.attach_stage(stage, window, document, config) {
                log::warn!("Skipping {:?} motion: {}", stage, e);
                if stage.hides_content() {
                    dom::warn_on_err("fallback", motion.fall_back(document, &config.guard));
                }
            }
        }

        log::info!(
            "Page motion attached: {} revealed, {} cards, {} counters, parallax {}, cta {}, reduced motion {}, fallback {}, hero started {}",
            motion.reveal.as_ref().map_or(0, ViewportRevealer::revealed),
            motion.tilt.as_ref().map_or(0, TiltEffect::cards),
            motion.counters.as_ref().map_or(0, CounterAnimation::tracked),
            motion.parallax.is_some(),
            motion.cta.is_some(),
            motion.state().is_some_and(|s| s.is_reduced_motion()),
            motion.state().is_some_and(|s| s.is_fallback()),
            motion.loading.as_ref().is_some_and(LoadSequencer::has_started),
        );
        motion
    }

    fn attach_stage(
        &mut self,
        stage: Stage,
        window: &Window,
        document: &Document,
        config: &MotionConfig,
    ) -> Result<()> {
        match stage {
            Stage::Stylesheet => {
                self.stylesheet = Some(Stylesheet::inject(document, &styles::stylesheet(config))?);
                if let Some(root) = document.document_element() {
                    root.class_list().remove_1(&config.guard.no_js_class)?;
                }
            }
            Stage::Preference => {
                self.guard = Some(MotionPreferenceGuard::attach(window, document, &config.guard)?);
            }
            Stage::Reveal => {
                self.reveal = Some(ViewportRevealer::attach(window, document, &config.reveal)?);
            }
            Stage::Parallax => {
                self.parallax = ParallaxController::attach(window, document, &config.parallax)?;
            }
            Stage::Tilt => {
                self.tilt = Some(TiltEffect::attach(document, &config.tilt)?);
            }
            Stage::Counters => {
                self.counters = Some(CounterAnimation::attach(window, document, &config.counter)?);
            }
            Stage::Anchors => {
                self.anchors = Some(AnchorScroller::attach(document, &config.anchors)?);
            }
            Stage::Title => {
                // The spans start transparent and rely on the sheet's keyframes.
                if self.stylesheet.is_some() {
                    TitleReveal::apply(document, &config.title)?;
                }
            }
            Stage::Loading => {
                self.loading = Some(LoadSequencer::attach(window, document, &config.loading)?);
            }
            Stage::Cta => {
                self.cta = CtaButton::attach(document, &config.cta)?;
            }
        }
        Ok(())
    }

    /// Forces every hidden element to its final state, through the guard when
    /// it is attached so later page errors see fallback as already entered.
    fn fall_back(&self, document: &Document, config: &GuardConfig) -> Result<()> {
        match &self.guard {
            Some(guard) => guard.enter_fallback(),
            None => {
                dom::body(document)?.class_list().add_1(&config.fallback_class)?;
                log::warn!("Entered fallback mode, revealing all animated content");
                Ok(())
            }
        }
    }

    pub fn state(&self) -> Option<MotionState> {
        self.guard.as_ref().map(MotionPreferenceGuard::state)
    }

    /// Tears controllers down in reverse startup order.
    pub fn detach(self) {
        let Motion {
            stylesheet,
            guard,
            reveal,
            parallax,
            tilt,
            counters,
            anchors,
            loading,
            cta,
        } = self;
        if let Some(cta) = cta {
            cta.detach();
        }
        if let Some(loading) = loading {
            loading.detach();
        }
        if let Some(anchors) = anchors {
            anchors.detach();
        }
        if let Some(counters) = counters {
            counters.detach();
        }
        if let Some(tilt) = tilt {
            tilt.detach();
        }
        if let Some(parallax) = parallax {
            parallax.detach();
        }
        if let Some(reveal) = reveal {
            reveal.detach();
        }
        if let Some(guard) = guard {
            guard.detach();
        }
        drop(stylesheet);
        log::debug!("Page motion detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_come_first() {
        assert_eq!(&STARTUP[..2], &[Stage::Stylesheet, Stage::Preference]);
        assert!(STARTUP[2..]
            .iter()
            .all(|s| !matches!(s, Stage::Stylesheet | Stage::Preference)));
    }

    #[test]
    fn guard_is_up_before_content_hiding_stages() {
        let preference = STARTUP.iter().position(|s| *s == Stage::Preference).unwrap();
        for (index, stage) in STARTUP.iter().enumerate() {
            if stage.hides_content() {
                assert!(preference < index, "{:?}", stage);
            }
        }
    }

    #[test]
    fn only_reveal_and_loading_hide_content() {
        let hiding: Vec<Stage> = STARTUP.into_iter().filter(|s| s.hides_content()).collect();
        assert_eq!(hiding, vec![Stage::Reveal, Stage::Loading]);
    }

    #[test]
    fn startup_lists_each_stage_once() {
        for stage in STARTUP {
            assert_eq!(STARTUP.iter().filter(|s| **s == stage).count(), 1);
        }
    }
}
