use dioxus::prelude::*;
use shared::config::CONFIG;
use shared::i18n::translate;
use shared::{Locale, LocaleStore};

/// Handle on the active display language, shared through context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct I18n {
    locale: Signal<Locale>,
}

impl I18n {
    pub fn new(locale: Signal<Locale>) -> Self {
        Self { locale }
    }

    /// Translation of `key` in the active locale. Reading it subscribes the
    /// calling component to locale changes.
    pub fn t(&self, key: &str) -> String {
        translate(*self.locale.read(), key)
    }
}

impl LocaleStore for I18n {
    fn locale(&self) -> Locale {
        *self.locale.read()
    }

    fn set_locale(&mut self, locale: Locale) {
        self.locale.set(locale);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}

#[component]
pub fn I18nProvider(children: Element) -> Element {
    let locale = use_signal(|| CONFIG.default_locale);

    use_context_provider(|| I18n::new(locale));

    rsx! {
        {children}
    }
}
