//! Pure page state: every decision the page behaviors make, free of the DOM.
mod effect;
pub mod forms;
mod msg;
pub mod posts;
pub mod reveal;
pub mod scroll;
mod state;
pub mod toast;
pub mod typing;
mod update;

pub use effect::Effect;
pub use msg::{KeyOrigin, Msg, ScrollMetrics};
pub use state::PageState;
pub use update::update;
