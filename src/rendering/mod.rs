pub mod chart;
pub mod grid;

pub use chart::{bar_at, draw_on_context, export_chart};
pub use grid::{draw_grid, hit_test};
