//! # Engine Module
//!
//! The interaction-analysis engine: every stage of the pipeline, the report
//! builder that collects their output, and the supporting configuration, error and
//! progress types.
//!
//! ## Pipeline
//!
//! - **Agent resolution** ([`resolver`]) - display name to concept id
//! - **Gene overlap** ([`overlap`]) - genes influenced by both agents
//! - **Interaction type selection** ([`selector`]) - one representative type per agent
//! - **Combination classification** ([`classifier`]) - effect label for the type pair
//! - **Score combination** ([`combiner`]) - per-gene combined scores with explanations
//! - **Report building** ([`report`]) - ordered, append-only sections frozen into a `Report`
//!
//! All "first match" decisions (type selection, rule scan, per-gene score) use the
//! stable first occurrence in table order.

pub mod classifier;
pub mod combiner;
pub mod config;
pub mod error;
pub mod overlap;
pub mod progress;
pub mod report;
pub mod resolver;
pub mod selector;
