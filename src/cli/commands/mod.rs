pub mod analyze;
pub mod languages;
