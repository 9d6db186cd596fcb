//! API route handlers.

mod projects;

pub use projects::*;
