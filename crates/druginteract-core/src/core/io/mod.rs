//! Input/output for the tab-separated tables and the generated reports.
//!
//! Tables are read through the [`traits::TabularRecord`] contract, which names the
//! columns a record needs. Raw dumps with many more columns can be reduced to those
//! columns with [`prepare`], and finished reports are written through a
//! [`sink::ReportSink`].

pub mod prepare;
pub mod sink;
pub mod traits;
pub mod tsv;
