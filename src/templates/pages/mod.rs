pub mod home;
pub mod search;

pub use home::home_page;
pub use search::search_page;
