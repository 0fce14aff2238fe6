pub mod language_select;
pub mod logo;
pub mod search_box;

pub use language_select::LanguageSelect;
pub use logo::Logo;
pub use search_box::SearchBox;
