pub mod agent;
pub mod effect;
pub mod interaction;
pub mod report;
pub mod rule;
pub mod tables;
