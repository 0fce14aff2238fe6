//! Static translation table for the client.

use crate::Locale;

/// `(key, ko, en, jp)`
const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("header_home", "홈", "Home", "ホーム"),
    ("header_tv", "TV 프로그램", "TV Shows", "テレビ番組"),
    (
        "search_placeholder",
        "영화나 TV 프로그램을 검색하세요...",
        "Search for movie or tv show...",
        "映画やテレビ番組を検索...",
    ),
    ("select_language", "언어 선택", "Select language", "言語を選択"),
    ("home_title", "인기 영화", "Popular movies", "人気の映画"),
    ("tv_title", "인기 TV 프로그램", "Popular TV shows", "人気のテレビ番組"),
    ("search_title", "검색 결과", "Search results", "検索結果"),
    (
        "not_found",
        "페이지를 찾을 수 없습니다",
        "Page not found",
        "ページが見つかりません",
    ),
];

/// Looks `key` up for `locale`. Unknown keys come back unchanged.
pub fn translate(locale: Locale, key: &str) -> String {
    CATALOG
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|(_, ko, en, jp)| match locale {
            Locale::Ko => *ko,
            Locale::En => *en,
            Locale::Jp => *jp,
        })
        .unwrap_or(key)
        .to_string()
}
