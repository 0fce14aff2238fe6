use dioxus::prelude::*;
use ui::use_i18n;

#[component]
pub fn TvPage() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { class: "page",
            h2 { class: "page-title", {i18n.t("tv_title")} }
        }
    }
}
