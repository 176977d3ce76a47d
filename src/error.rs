use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("data-counter value {raw:?} is not a non-negative integer")]
    InvalidCounterTarget { raw: String },
    #[error("motion config is malformed: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
