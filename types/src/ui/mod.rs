//! UI state types shared by the engine and the tui layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod page;
mod scroll;
mod view_state;

pub use page::Page;
pub use scroll::ScrollState;
pub use view_state::UiOptions;
