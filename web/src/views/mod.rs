mod home;
mod not_found;
mod search;
mod tv;

pub use home::HomePage;
pub use not_found::NotFound;
pub use search::SearchPage;
pub use tv::TvPage;
