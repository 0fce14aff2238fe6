use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use shared::{SearchForm, SearchToggle};

use crate::use_i18n;

/// Expandable search form. The icon toggles the input open and closed;
/// submitting a valid keyword hands `/search?keyword=...` to `on_navigate`.
#[component]
pub fn SearchBox(on_navigate: EventHandler<String>) -> Element {
    let i18n = use_i18n();
    let mut toggle = use_signal(SearchToggle::default);
    let mut form = use_signal(SearchForm::default);

    let open = toggle.read().is_open();
    let scale = toggle.read().input_scale();
    let shift = toggle.read().icon_offset();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Ok(path) => {
                info!("Searching: {path}");
                on_navigate.call(path);
            }
            // Invalid input blocks navigation silently
            Err(e) => debug!("Search not submitted: {e}"),
        }
    };

    rsx! {
        form { class: "search", onsubmit,
            svg {
                class: "search-icon",
                style: "transform: translateX({shift}px)",
                fill: "currentColor",
                view_box: "0 0 20 20",
                xmlns: "http://www.w3.org/2000/svg",
                "aria-expanded": "{open}",
                onclick: move |_| toggle.write().toggle(),
                path {
                    d: "M8 4a4 4 0 100 8 4 4 0 000-8zM2 8a6 6 0 1110.89 3.476l4.817 4.817a1 1 0 01-1.414 1.414l-4.816-4.816A6 6 0 012 8z",
                    clip_rule: "evenodd",
                }
            }
            input {
                class: "search-input",
                style: "transform: scaleX({scale})",
                name: "keyword",
                tabindex: if open { "0" } else { "-1" },
                placeholder: i18n.t("search_placeholder"),
                value: "{form.read().keyword()}",
                oninput: move |evt| form.write().set_keyword(evt.value()),
            }
        }
    }
}
