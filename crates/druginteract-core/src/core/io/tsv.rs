use super::traits::TabularRecord;
use csv::StringRecord;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("TSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("{table} not found: {path}")]
    NotFound { table: &'static str, path: String },
    #[error("{table} is not a file: {path}")]
    NotAFile { table: &'static str, path: String },
    #[error("{table} is empty: {path}")]
    Empty { table: &'static str, path: String },
    #[error("{table} must be a .tsv file: {path}")]
    InvalidExtension { table: &'static str, path: String },
    #[error("Missing required column(s) [{}] in '{path}'", .missing.join(", "))]
    MissingColumns { path: String, missing: Vec<String> },
    #[error("Row on line {line} of '{path}' has {found} column(s), at least {needed} required")]
    ShortRow {
        path: String,
        line: u64,
        needed: usize,
        found: usize,
    },
}

/// Reads every record of a table from `path` after checking the file itself.
pub fn read_table<R: TabularRecord>(path: &Path) -> Result<Vec<R>, TableLoadError> {
    validate_input_file(path, R::TABLE_NAME)?;
    let shown = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|e| TableLoadError::Io {
        path: shown.clone(),
        source: e,
    })?;
    read_table_from(file, &shown)
}

/// Reads every record of a table from an arbitrary reader.
///
/// Rows may be longer or shorter than the header as long as every required
/// column is present. Rows holding only whitespace are skipped. `source` is only
/// used to label errors.
pub fn read_table_from<R: TabularRecord, Rd: Read>(
    reader: Rd,
    source: &str,
) -> Result<Vec<R>, TableLoadError> {
    let mut reader = reader_builder().flexible(true).from_reader(reader);
    let headers = normalized_headers(&mut reader, source)?;
    let required = R::required_columns();
    ensure_columns(&headers, required, source)?;
    let needed = required
        .iter()
        .filter_map(|column| headers.iter().position(|header| header == *column))
        .max()
        .map_or(0, |idx| idx + 1);

    let csv_err = |e: csv::Error| TableLoadError::Csv {
        path: source.to_string(),
        source: e,
    };
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        if is_blank(&row) {
            continue;
        }
        if row.len() < needed {
            return Err(TableLoadError::ShortRow {
                path: source.to_string(),
                line: row.position().map_or(0, |pos| pos.line()),
                needed,
                found: row.len(),
            });
        }
        let cells: StringRecord = (0..headers.len())
            .map(|idx| row.get(idx).unwrap_or(""))
            .collect();
        records.push(cells.deserialize::<R>(Some(&headers)).map_err(csv_err)?);
    }

    debug!(
        table = R::TABLE_NAME,
        rows = records.len(),
        "Read table from '{}'.",
        source
    );
    Ok(records)
}

pub(crate) fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|field| field.trim().is_empty())
}

/// Reader settings shared by all tables: tab separated, headed, no quote handling.
pub(crate) fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.delimiter(b'\t').quoting(false).has_headers(true);
    builder
}

/// Header row with surrounding whitespace and a leading byte-order mark removed.
pub(crate) fn normalized_headers<Rd: Read>(
    reader: &mut csv::Reader<Rd>,
    source: &str,
) -> Result<StringRecord, TableLoadError> {
    let headers = reader.headers().map_err(|e| TableLoadError::Csv {
        path: source.to_string(),
        source: e,
    })?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header = if i == 0 {
                header.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                header
            };
            header.trim()
        })
        .collect())
}

pub(crate) fn ensure_columns(
    headers: &StringRecord,
    required: &[&str],
    source: &str,
) -> Result<(), TableLoadError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TableLoadError::MissingColumns {
            path: source.to_string(),
            missing,
        })
    }
}

fn validate_input_file(path: &Path, table: &'static str) -> Result<(), TableLoadError> {
    let shown = path.to_string_lossy().to_string();
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TableLoadError::NotFound {
            table,
            path: shown.clone(),
        },
        _ => TableLoadError::Io {
            path: shown.clone(),
            source: e,
        },
    })?;

    if !metadata.is_file() {
        return Err(TableLoadError::NotAFile { table, path: shown });
    }
    if metadata.len() == 0 {
        return Err(TableLoadError::Empty { table, path: shown });
    }
    let is_tsv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    if !is_tsv {
        return Err(TableLoadError::InvalidExtension { table, path: shown });
    }
    Ok(())
}
