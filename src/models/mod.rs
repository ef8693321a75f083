//! Data models for the positions dashboard.
//!
//! `Position` mirrors the server record; the form and display types are local only.

mod display;
mod form;
mod position;

pub use display::*;
pub use form::*;
pub use position::*;
