pub mod blog_card;
pub mod toast;
