// src/lib.rs

pub mod config;
pub mod model;
pub mod state;
pub mod utils;
pub mod views;

#[cfg(feature = "gui")]
pub mod panels;
#[cfg(feature = "gui")]
pub mod rendering;
#[cfg(feature = "gui")]
pub mod ui;
