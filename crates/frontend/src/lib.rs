//! Portfolio site - Yew WASM frontend
//!
//! Showcase pages for the experiment projects, with an animated loading
//! screen and optimistic project voting.

mod app;
mod components;
mod hooks;
mod loading;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
