//! UI components for the Guide Directory.

mod guide_list;
mod magnetic;
mod search_input;
mod status_message;

pub use guide_list::GuideList;
pub use search_input::SearchInput;
pub use status_message::StatusMessage;
