mod action;
mod element;
mod event;
mod form;
mod print_window;

pub use action::*;
pub use element::*;
pub use event::*;
pub use form::*;
pub use print_window::*;
