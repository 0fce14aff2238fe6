use dioxus::prelude::*;
use ui::use_i18n;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page",
            h2 { class: "page-title", {i18n.t("not_found")} }
            p { class: "page-keyword", "{path}" }
        }
    }
}
