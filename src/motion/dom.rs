//! Thin wrappers over web-sys: element lookup, inline styles, and listener
//! and observer registrations that unregister themselves when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::{MotionError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(MotionError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(MotionError::NoBody)
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn viewport_height(window: &Window) -> Result<f64> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn clear_style(element: &HtmlElement, property: &str) -> Result<()> {
    element.style().remove_property(property)?;
    Ok(())
}

/// Position of the element `target` refers to inside `elements`.
pub fn index_of(elements: &[HtmlElement], target: &Element) -> Option<usize> {
    elements
        .iter()
        .position(|el| AsRef::<Element>::as_ref(el) == target)
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Logs a failed event-handler step; handlers never propagate.
pub fn warn_on_err(context: &str, result: Result<()>) {
    if let Err(e) = result {
        log::warn!("{}: {}", context, e);
    }
}

/// An event listener registration. Removing it is tied to drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An IntersectionObserver watching a fixed set of elements. Disconnected
/// on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Returns `Ok(None)` when the runtime has no IntersectionObserver or
    /// refuses to construct one.
    pub fn new<F>(
        window: &Window,
        threshold: f64,
        root_margin: Option<&str>,
        elements: &[HtmlElement],
        mut on_entry: F,
    ) -> Result<Option<Self>>
    where
        F: FnMut(&IntersectionObserverEntry) + 'static,
    {
        if !supports_intersection_observer(window) {
            log::debug!("IntersectionObserver unavailable");
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver construction failed: {:?}", e);
                return Ok(None);
            }
        };
        for element in elements {
            observer.observe(element);
        }

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
