use dioxus::prelude::*;
use ui::use_i18n;

use crate::query::SearchQuery;

#[component]
pub fn SearchPage(query: SearchQuery) -> Element {
    let i18n = use_i18n();
    let keyword = query.keyword;

    rsx! {
        section { class: "page",
            h2 { class: "page-title", {i18n.t("search_title")} }
            p { class: "page-keyword", "\"{keyword}\"" }
        }
    }
}
