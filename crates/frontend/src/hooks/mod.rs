//! Custom hooks.

mod use_projects;
mod use_section_ready;

pub use use_projects::*;
pub use use_section_ready::*;
