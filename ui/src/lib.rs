//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::{NavMarker, Navbar};

mod layout;
pub use layout::Layout;

mod i18n;
pub use i18n::*;

mod scroll;
pub use scroll::WindowScroll;

mod components;
pub use components::*;
