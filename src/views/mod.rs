// src/views/mod.rs
// Pure derivations from (dataset, selection) to what the presentation shows.

pub mod chart;
pub mod detail;
pub mod emphasis;
pub mod heatmap;
pub mod layout;
pub mod style;

pub use chart::{build_series, SeriesPoint};
pub use detail::{project, DetailViewModel};
pub use emphasis::{resolve, Emphasis};
pub use heatmap::HeatScale;
pub use layout::{position_of, GridCell, Layout, PeriodicLayout};
pub use style::CellStyle;
