use std::fmt;

use dioxus::router::FromQuery;
use url::form_urlencoded;

/// Query string of the results page, `keyword=<value>`.
///
/// Parsed and written as a form so the keyword survives spaces, `+` and `&`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

impl FromQuery for SearchQuery {
    fn from_query(query: &str) -> Self {
        let keyword = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "keyword")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        Self { keyword }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("keyword", &self.keyword)
            .finish();
        f.write_str(&query)
    }
}
