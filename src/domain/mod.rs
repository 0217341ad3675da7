pub mod comparable;
pub mod format;
pub mod search;

pub use comparable::Comparable;
pub use search::{PinSelection, SearchState};
