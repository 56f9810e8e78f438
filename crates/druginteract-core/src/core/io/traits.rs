use crate::core::models::agent::AgentRecord;
use crate::core::models::interaction::InteractionRecord;
use crate::core::models::rule::CombinationRule;
use serde::de::DeserializeOwned;

/// A record type that can be read from a headed, tab-separated table.
///
/// Implementors name the table (for error messages) and the header columns that
/// must be present. Columns beyond these are ignored by the reader.
pub trait TabularRecord: DeserializeOwned {
    /// Human readable table name, e.g. "Interactions file".
    const TABLE_NAME: &'static str;

    /// Header names that must appear in the file.
    fn required_columns() -> &'static [&'static str];
}

impl TabularRecord for InteractionRecord {
    const TABLE_NAME: &'static str = "Interactions file";

    fn required_columns() -> &'static [&'static str] {
        Self::REQUIRED_COLUMNS
    }
}

impl TabularRecord for AgentRecord {
    const TABLE_NAME: &'static str = "Drugs file";

    fn required_columns() -> &'static [&'static str] {
        Self::REQUIRED_COLUMNS
    }
}

impl TabularRecord for CombinationRule {
    const TABLE_NAME: &'static str = "Combinations file";

    fn required_columns() -> &'static [&'static str] {
        Self::REQUIRED_COLUMNS
    }
}
