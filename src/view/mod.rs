//! Rendering for the dashboard screen.

mod display;
mod pages;

pub use display::*;
pub use pages::*;
