// src/panels/mod.rs

pub mod detail;
pub mod navbar;

pub use detail::DetailPanel;
pub use navbar::NavBar;
