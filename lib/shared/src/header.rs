//! Visual states of the header and the pure mappings from state to style.

/// Offset, in pixels, past which the header gets an opaque background.
pub const SCROLL_THRESHOLD: f64 = 40.0;

/// Horizontal distance the search icon slides when the search box opens.
pub const SEARCH_ICON_SHIFT: i32 = -180;

/// Background variant of the header, driven by the page scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Top,
    Scroll,
}

impl NavState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavState::Scroll
        } else {
            NavState::Top
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NavState::Top => "top",
            NavState::Scroll => "scroll",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavState::Top => "rgba(0, 0, 0, 0)",
            NavState::Scroll => "rgba(0, 0, 0, 1)",
        }
    }
}

/// Open state of the expandable search box. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchToggle {
    #[default]
    Closed,
    Open,
}

impl SearchToggle {
    pub fn toggle(&mut self) {
        *self = match self {
            SearchToggle::Closed => SearchToggle::Open,
            SearchToggle::Open => SearchToggle::Closed,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SearchToggle::Open)
    }

    /// Horizontal scale of the text input: 0 hidden, 1 fully visible.
    pub fn input_scale(&self) -> u8 {
        match self {
            SearchToggle::Closed => 0,
            SearchToggle::Open => 1,
        }
    }

    pub fn icon_offset(&self) -> i32 {
        match self {
            SearchToggle::Closed => 0,
            SearchToggle::Open => SEARCH_ICON_SHIFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_of_top() {
        assert_eq!(NavState::from_offset(0.0), NavState::Top);
        assert_eq!(NavState::from_offset(40.0), NavState::Top);
        assert_eq!(NavState::from_offset(40.5), NavState::Scroll);
        assert_eq!(NavState::from_offset(41.0), NavState::Scroll);
        assert_eq!(NavState::from_offset(1000.0), NavState::Scroll);
    }

    #[test]
    fn negative_overscroll_is_top() {
        assert_eq!(NavState::from_offset(-12.0), NavState::Top);
    }

    #[test]
    fn backgrounds_differ_only_in_alpha() {
        assert_eq!(NavState::Top.background(), "rgba(0, 0, 0, 0)");
        assert_eq!(NavState::Scroll.background(), "rgba(0, 0, 0, 1)");
        assert_eq!(NavState::default().name(), "top");
    }

    #[test]
    fn toggle_flips_once_per_click() {
        let mut search = SearchToggle::default();
        assert!(!search.is_open());

        search.toggle();
        assert!(search.is_open());
        assert_eq!(search.input_scale(), 1);
        assert_eq!(search.icon_offset(), -180);

        search.toggle();
        assert_eq!(search, SearchToggle::Closed);
        assert_eq!(search.input_scale(), 0);
        assert_eq!(search.icon_offset(), 0);
    }
}
