// src/config/mod.rs

pub mod settings;
pub mod load_settings;

pub use settings::{OutputMode, PlotSettings, PlotStyle};
pub use load_settings::load_plot_settings;
