//src/model/mod.rs
pub mod dataset;
pub mod elements;
pub mod palette;

// Re-exports for cleaner imports
pub use dataset::Dataset;
pub use elements::{Category, Discovery, Element, PhysicalState, PropertyKey};
pub use palette::{classify, classify_label, ColorIdentity, PaletteId};
