// src/data/mod.rs

pub mod column;
pub mod table;
pub mod views;
pub mod loader;

pub use column::Column;
pub use views::ColumnViews;
pub use loader::load_trajectory;
