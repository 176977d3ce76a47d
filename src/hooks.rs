use yew::prelude::*;

use crate::motion::Motion;

/// Binds page motion once the page has rendered and unbinds it on unmount.
#[hook]
pub fn use_page_motion() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let motion = match Motion::attach() {
                Ok(motion) => Some(motion),
                Err(e) => {
                    log::error!("Page motion unavailable: {}", e);
                    None
                }
            };
            move || {
                if let Some(motion) = motion {
                    motion.detach();
                }
            }
        },
        (),
    );
}
