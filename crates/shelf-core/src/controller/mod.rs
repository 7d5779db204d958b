//! Controllers keeping local views consistent with the backend.

mod detail;
mod list;

pub use detail::{DetailController, DetailMode, Navigation, Transition};
pub use list::{Applied, FetchOutcome, FetchTask, ListController, PageState};
