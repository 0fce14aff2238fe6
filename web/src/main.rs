use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::NavLink;

use query::SearchQuery;
use ui::{use_i18n, I18nProvider, Layout, NavMarker, Navbar};
use views::{HomePage, NotFound, SearchPage, TvPage};

mod query;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebLayout)]
        #[route("/")]
        HomePage {},
        #[route("/tv")]
        TvPage {},
        #[route("/search?:..query")]
        SearchPage { query: SearchQuery },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Nomflix" }

        I18nProvider { Router::<Route> {} }
    }
}

fn nav_route(link: NavLink) -> Route {
    match link {
        NavLink::Home => Route::HomePage {},
        NavLink::Tv => Route::TvPage {},
    }
}

#[component]
fn WebLayout() -> Element {
    let i18n = use_i18n();
    let nav = use_navigator();
    let active = NavLink::active_for(&use_route::<Route>().to_string());

    let on_navigate = move |target: String| match target.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => warn!("Ignoring navigation to {target}: {e}"),
    };

    rsx! {
        Layout {
            Navbar { on_navigate,
                for link in NavLink::ALL {
                    li { key: "{link.path()}", class: "header-item",
                        Link { class: "header-link", to: nav_route(link),
                            {i18n.t(link.label_key())}
                            if active == Some(link) {
                                NavMarker {}
                            }
                        }
                    }
                }
            }

            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::search::search_path;

    fn parse(path: &str) -> Route {
        path.parse()
            .unwrap_or_else(|e| panic!("{path} did not parse: {e}"))
    }

    #[test]
    fn search_path_keeps_keyword() {
        for keyword in ["ab", "star wars", "a&b", "c++", "50%", "검색"] {
            assert_eq!(
                parse(&search_path(keyword)),
                Route::SearchPage {
                    query: SearchQuery::new(keyword)
                },
                "{keyword}"
            );
        }
    }

    #[test]
    fn search_route_renders_header_path() {
        let route = Route::SearchPage {
            query: SearchQuery::new("star wars"),
        };
        assert_eq!(route.to_string(), search_path("star wars"));
        assert_eq!(route.to_string(), "/search?keyword=star+wars");
    }

    #[test]
    fn nav_links_match_routes() {
        for link in NavLink::ALL {
            assert_eq!(nav_route(link).to_string(), link.path());
            assert_eq!(parse(link.path()), nav_route(link));
        }
    }

    #[test]
    fn search_page_has_no_marker() {
        let path = Route::SearchPage {
            query: SearchQuery::new("ab"),
        }
        .to_string();
        assert_eq!(NavLink::active_for(&path), None);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(matches!(parse("/movies/1"), Route::NotFound { .. }));
    }
}
