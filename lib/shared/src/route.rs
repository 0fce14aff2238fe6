/// The two links of the header that carry an active-route marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    Tv,
}

impl NavLink {
    /// Render order, left to right.
    pub const ALL: [NavLink; 2] = [NavLink::Home, NavLink::Tv];

    pub fn path(&self) -> &'static str {
        match self {
            NavLink::Home => "/",
            NavLink::Tv => "/tv",
        }
    }

    /// Translation key of the link label.
    pub fn label_key(&self) -> &'static str {
        match self {
            NavLink::Home => "header_home",
            NavLink::Tv => "header_tv",
        }
    }

    /// Whether this link's marker should render for `location`.
    pub fn is_active(&self, location: &str) -> bool {
        route_path(location) == self.path()
    }

    /// The link matching `location`, if any. The paths are disjoint, so at
    /// most one marker is ever shown.
    pub fn active_for(location: &str) -> Option<NavLink> {
        Self::ALL.into_iter().find(|link| link.is_active(location))
    }
}

/// Strips the query string and fragment from a location.
pub fn route_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_only_on_known_paths() {
        assert_eq!(NavLink::active_for("/"), Some(NavLink::Home));
        assert_eq!(NavLink::active_for("/tv"), Some(NavLink::Tv));
        assert_eq!(NavLink::active_for("/search?keyword=dune"), None);
        assert_eq!(NavLink::active_for("/tv/1399"), None);
        assert_eq!(NavLink::active_for("/movies"), None);
        assert_eq!(NavLink::active_for(""), None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(NavLink::active_for("/?page=2"), Some(NavLink::Home));
        assert_eq!(NavLink::active_for("/tv#top"), Some(NavLink::Tv));
        assert_eq!(route_path("/search?keyword=ab"), "/search");
    }

    #[test]
    fn exactly_one_link_active() {
        for location in ["/", "/tv"] {
            let active = NavLink::ALL
                .iter()
                .filter(|link| link.is_active(location))
                .count();
            assert_eq!(active, 1, "{location}");
        }
    }
}
