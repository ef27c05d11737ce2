// src/render/mod.rs

pub mod layout;
pub mod figure;
mod fonts;
pub mod renderer;
pub mod persist;
#[cfg(feature = "gui")]
pub mod interactive;

pub use renderer::PanelRenderer;
