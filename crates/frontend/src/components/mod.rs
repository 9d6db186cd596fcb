//! Reusable UI components.

mod loading_screen;
mod project_card;

pub use loading_screen::*;
pub use project_card::*;
