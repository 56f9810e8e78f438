//! # Workflows Module
//!
//! High-level entry points that run the whole analysis pipeline.
//!
//! - **Analysis Workflow** ([`analyze`]) - resolves both drugs, finds shared genes,
//!   classifies the combination and combines the per-gene scores, returning every
//!   intermediate result together with the finished report.

pub mod analyze;
