use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use shared::header::NavState;
use shared::scroll::{ScrollSource, ScrollSubscription};

use crate::{LanguageSelect, Logo, SearchBox, WindowScroll};

/// Fixed top navigation bar.
///
/// `children` are the route links, rendered as list items next to the logo.
/// A search submitted from the header is handed to `on_navigate` as a path.
#[component]
pub fn Navbar(on_navigate: EventHandler<String>, children: Element) -> Element {
    let mut nav_state = use_signal(|| NavState::from_offset(WindowScroll.offset()));

    // Scoped to the mounted lifetime: attached once, released on unmount
    let subscription = use_hook(|| {
        let subscription = ScrollSubscription::attach(WindowScroll, move |offset| {
            let next = NavState::from_offset(offset);
            if *nav_state.peek() != next {
                nav_state.set(next);
            }
        });
        debug!("Scroll subscription attached");
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        if let Some(mut subscription) = subscription.borrow_mut().take() {
            subscription.release();
            debug!("Scroll subscription released");
        }
    });

    let state = nav_state();
    let background = state.background();

    rsx! {
        nav {
            class: "header",
            "data-variant": state.name(),
            style: "background-color: {background}",
            div { class: "header-col",
                Logo {}
                ul { class: "header-items", {children} }
            }
            div { class: "header-col",
                SearchBox { on_navigate }
                LanguageSelect {}
            }
        }
    }
}

/// Dot under the link of the current page. Grows in when its link becomes
/// active (`.header-marker` in the stylesheet).
#[component]
pub fn NavMarker() -> Element {
    rsx! {
        span { class: "header-marker" }
    }
}
