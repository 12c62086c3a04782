pub mod report;

#[cfg(feature = "gui")]
pub mod logger;
