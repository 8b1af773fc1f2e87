//! Widgets shared by the console pages

pub mod widgets;

pub use widgets::*;
