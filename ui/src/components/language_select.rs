use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::{select_language, Locale, LocaleStore};

use crate::use_i18n;

#[component]
pub fn LanguageSelect() -> Element {
    let mut i18n = use_i18n();
    let current = i18n.locale();

    rsx! {
        div { class: "language-select",
            select {
                aria_label: i18n.t("select_language"),
                value: current.code(),
                onchange: move |evt| match select_language(&mut i18n, &evt.value()) {
                    Ok(locale) => info!("Locale changed to {locale}"),
                    Err(e) => warn!("{e}"),
                },
                for locale in Locale::ALL {
                    option {
                        key: "{locale}",
                        value: locale.code(),
                        selected: locale == current,
                        "{locale.label()}"
                    }
                }
            }
        }
    }
}
