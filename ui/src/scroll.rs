//! Browser window as a [`ScrollSource`].
//!
//! Only does anything on wasm32; elsewhere the page never scrolls.

use shared::scroll::ScrollSource;

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ScrollSource, WindowScroll};
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    fn scroll_y() -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }

    impl ScrollSource for WindowScroll {
        type Handle = Option<Closure<dyn FnMut()>>;

        fn offset(&self) -> f64 {
            scroll_y()
        }

        fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Self::Handle {
            let window = web_sys::window()?;
            let listener = Closure::<dyn FnMut()>::new(move || on_scroll(scroll_y()));
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .ok()?;
            Some(listener)
        }

        fn unlisten(&self, handle: Self::Handle) {
            if let (Some(window), Some(listener)) = (web_sys::window(), handle) {
                if let Err(e) = window
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                {
                    warn!("Failed to remove scroll listener: {:?}", e);
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSource for WindowScroll {
    type Handle = ();

    fn offset(&self) -> f64 {
        0.0
    }

    fn listen(&self, _on_scroll: Box<dyn FnMut(f64)>) {}

    fn unlisten(&self, _handle: ()) {}
}
