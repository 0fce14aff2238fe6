//! The header's search form: one required `keyword` field, at least two
//! characters long. Submitting it only produces a navigation target.

use thiserror::Error;
use url::form_urlencoded;

pub const KEYWORD_MIN_LEN: usize = 2;

pub const SEARCH_PATH: &str = "/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeywordError {
    #[error("keyword is required")]
    Missing,
    #[error("keyword must be at least {min} characters, got {len}")]
    TooShort { min: usize, len: usize },
}

/// Checks the keyword the way the form field is declared: required, with a
/// minimum length counted in characters. No trimming is applied.
pub fn validate_keyword(keyword: &str) -> Result<&str, KeywordError> {
    if keyword.is_empty() {
        return Err(KeywordError::Missing);
    }
    let len = keyword.chars().count();
    if len < KEYWORD_MIN_LEN {
        return Err(KeywordError::TooShort {
            min: KEYWORD_MIN_LEN,
            len,
        });
    }
    Ok(keyword)
}

/// Results page location for `keyword`, e.g. `/search?keyword=ab`.
pub fn search_path(keyword: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("keyword", keyword)
        .finish();
    format!("{SEARCH_PATH}?{query}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    keyword: String,
}

impl SearchForm {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Returns the navigation target and resets the field. On a validation
    /// error the field keeps what the user typed.
    pub fn submit(&mut self) -> Result<String, KeywordError> {
        let path = search_path(validate_keyword(&self.keyword)?);
        self.keyword.clear();
        Ok(path)
    }
}
