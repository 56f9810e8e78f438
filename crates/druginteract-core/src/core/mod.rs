//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Records** ([`models`]) - Agent, interaction and combination-rule rows, the
//!   loaded `DataTables`, and the `CombinationEffect` classification.
//! - **File I/O** ([`io`]) - Tab-separated table loading with column validation,
//!   projection of raw dumps to the required columns, and report sinks.

pub mod io;
pub mod models;
