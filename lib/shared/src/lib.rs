//! Framework-free pieces of the header: everything here can be exercised
//! without a DOM.

pub mod config;
pub mod header;
pub mod i18n;
pub mod locale;
pub mod route;
pub mod scroll;
pub mod search;

pub use header::{NavState, SearchToggle};
pub use locale::{select_language, Locale, LocaleStore, UnknownLocale};
pub use route::NavLink;
pub use search::{KeywordError, SearchForm};
