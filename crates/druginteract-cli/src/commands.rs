pub mod analyze;
pub mod prepare;
pub mod types;
