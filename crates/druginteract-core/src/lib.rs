//! # druginteract Core Library
//!
//! A library for assessing whether two drugs ("agents") can be combined, by
//! cross-referencing a gene-interaction table, an agent table, and a table of
//! combination-effect rules. The result is indicative only and is not clinical advice.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Read-only table records (`AgentRecord`,
//!   `InteractionRecord`, `CombinationRule`), the `CombinationEffect` sum type, and
//!   the I/O layer: TSV loading, column projection of raw dumps, and report sinks.
//!
//! - **[`engine`]: The Logic Core.** The individual analysis stages (agent
//!   resolution, gene overlap, interaction type selection, combination
//!   classification, score combination), the report builder, configuration,
//!   errors, and progress reporting. Every stage is a pure function of its inputs.
//!
//! - **[`workflows`]: The Public API.** Runs the stages in order and returns a
//!   complete `AnalysisResult` including the frozen `Report`.

pub mod core;
pub mod engine;
pub mod workflows;
