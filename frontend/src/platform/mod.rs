//! Browser side: finds the page's elements, turns DOM events into messages
//! and applies the resulting effects.
mod cards;
mod controller;
pub mod dom;
mod elements;
mod entrance;
mod images;
mod toast;
mod typing;

pub use controller::PageController;
pub use elements::PageElements;
pub use typing::TypingEffect;
