//! Tunables for every motion controller.
//!
//! Defaults match the markup the site ships with. A page may override any
//! subset by embedding
//! `<script type="application/json" id="motion-config">{ ... }</script>`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

pub const CONFIG_ELEMENT_ID: &str = "motion-config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub tilt: TiltConfig,
    pub counter: CounterConfig,
    pub title: TitleConfig,
    pub anchors: AnchorConfig,
    pub loading: LoadingConfig,
    pub cta: CtaConfig,
    pub guard: GuardConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Distance in px above the viewport bottom an element's top must cross.
    pub offset: f64,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "[data-aos]".to_string(),
            visible_class: "aos-animate".to_string(),
            offset: 150.0,
            threshold: 0.1,
            root_margin: "50px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub selector: String,
    pub rate: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-section".to_string(),
            rate: -0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub selector: String,
    pub divisor: f64,
    pub perspective: f64,
    pub depth: f64,
    pub transition: String,
    pub settle_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            selector: ".card, .activity-card".to_string(),
            divisor: 10.0,
            perspective: 1000.0,
            depth: 10.0,
            transition: "transform 0.3s ease, box-shadow 0.3s ease".to_string(),
            settle_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub attribute: String,
    pub counted_class: String,
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: "[data-counter]".to_string(),
            attribute: "data-counter".to_string(),
            counted_class: "counted".to_string(),
            threshold: 0.5,
            duration_ms: 2000,
            tick_ms: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub selector: String,
    pub char_delay_s: f64,
    pub animation: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-title".to_string(),
            char_delay_s: 0.1,
            animation: "charFadeIn 0.6s ease-out forwards".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub selector: String,
    pub loaded_class: String,
    pub fallback_ms: u32,
    pub stagger_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-content > *".to_string(),
            loaded_class: "loaded".to_string(),
            fallback_ms: 3000,
            stagger_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub element_id: String,
    pub press_scale: f64,
    pub press_ms: u32,
    pub hover_background: String,
    pub rest_background: String,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            element_id: "ctaButton".to_string(),
            press_scale: 0.98,
            press_ms: 100,
            hover_background: "linear-gradient(135deg, #2563eb, #7c3aed)".to_string(),
            rest_background: "linear-gradient(135deg, #3b82f6, #8b5cf6)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub reduced_motion_query: String,
    pub reduced_motion_class: String,
    pub fallback_class: String,
    pub no_js_class: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_string(),
            reduced_motion_class: "reduced-motion".to_string(),
            fallback_class: "fallback-mode".to_string(),
            no_js_class: "no-js".to_string(),
        }
    }
}

impl MotionConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the page's config block, falling back to defaults when it is
    /// missing or malformed.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("Loaded motion config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = MotionConfig::from_json("{}").unwrap();
        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.reveal.offset, 150.0);
        assert_eq!(config.counter.duration_ms, 2000);
        assert_eq!(config.counter.tick_ms, 16);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = MotionConfig::from_json(
            r#"{ "counter": { "duration_ms": 1000 }, "parallax": { "rate": -0.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.counter.duration_ms, 1000);
        assert_eq!(config.counter.tick_ms, 16);
        assert_eq!(config.counter.selector, "[data-counter]");
        assert_eq!(config.parallax.rate, -0.5);
        assert_eq!(config.parallax.selector, ".hero-section");
        assert_eq!(config.tilt, TiltConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = MotionConfig::from_json("{ reveal: ").unwrap_err();
        assert!(matches!(err, crate::error::MotionError::Config(_)));
    }
}
