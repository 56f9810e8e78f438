use super::tsv::{TableLoadError, ensure_columns, is_blank, normalized_headers, reader_builder};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One raw dump to be reduced to `columns` and stored at `prepared`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareJob {
    pub raw: PathBuf,
    pub prepared: PathBuf,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareOutcome {
    /// Every prepared file was already present; nothing was written.
    AlreadyPrepared,
    /// Rows written per job, in job order.
    Prepared { rows: Vec<usize> },
}

impl PrepareJob {
    pub fn new(raw: PathBuf, prepared: PathBuf, columns: &[&str]) -> Self {
        Self {
            raw,
            prepared,
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Makes sure every prepared file exists.
///
/// Existing prepared files are reused unless `force` is set. Otherwise all raw
/// files must be present and are projected to their prepared counterparts.
pub fn ensure_prepared(jobs: &[PrepareJob], force: bool) -> Result<PrepareOutcome, TableLoadError> {
    if !force && jobs.iter().all(|job| job.prepared.exists()) {
        info!("Prepared files already present, skipping preparation.");
        return Ok(PrepareOutcome::AlreadyPrepared);
    }

    if let Some(missing) = jobs.iter().find(|job| !job.raw.exists()) {
        return Err(TableLoadError::NotFound {
            table: "Raw data file",
            path: missing.raw.to_string_lossy().to_string(),
        });
    }

    let mut rows = Vec::with_capacity(jobs.len());
    for job in jobs {
        let columns: Vec<&str> = job.columns.iter().map(String::as_str).collect();
        rows.push(project_columns(&job.raw, &job.prepared, &columns)?);
    }
    Ok(PrepareOutcome::Prepared { rows })
}

/// Writes a copy of `input` holding only `columns`, in that order.
///
/// Rows shorter than the header get empty cells. Returns the number of data rows
/// written.
pub fn project_columns(
    input: &Path,
    output: &Path,
    columns: &[&str],
) -> Result<usize, TableLoadError> {
    let input_shown = input.to_string_lossy().to_string();
    let output_shown = output.to_string_lossy().to_string();
    if !input.exists() {
        return Err(TableLoadError::NotFound {
            table: "Raw data file",
            path: input_shown,
        });
    }

    let mut reader = reader_builder()
        .flexible(true)
        .from_path(input)
        .map_err(|e| TableLoadError::Csv {
            path: input_shown.clone(),
            source: e,
        })?;
    let headers = normalized_headers(&mut reader, &input_shown)?;
    ensure_columns(&headers, columns, &input_shown)?;

    let indices: Vec<usize> = columns
        .iter()
        .filter_map(|column| headers.iter().position(|header| header == *column))
        .collect();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TableLoadError::Io {
            path: output_shown.clone(),
            source: e,
        })?;
    }

    let csv_err = |e: csv::Error| TableLoadError::Csv {
        path: output_shown.clone(),
        source: e,
    };
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(output)
        .map_err(csv_err)?;
    writer.write_record(columns).map_err(csv_err)?;

    let mut written = 0;
    for result in reader.records() {
        let record = result.map_err(|e| TableLoadError::Csv {
            path: input_shown.clone(),
            source: e,
        })?;
        if is_blank(&record) {
            continue;
        }
        let cells = indices.iter().map(|&idx| record.get(idx).unwrap_or(""));
        writer.write_record(cells).map_err(csv_err)?;
        written += 1;
    }
    writer.flush().map_err(|e| TableLoadError::Io {
        path: output_shown.clone(),
        source: e,
    })?;

    debug!(
        rows = written,
        "Projected '{}' to '{}'.", input_shown, output_shown
    );
    Ok(written)
}

/// The first `n` lines of a file, unparsed.
pub fn preview(path: &Path, n: usize) -> Result<Vec<String>, TableLoadError> {
    let shown = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|e| TableLoadError::Io {
        path: shown.clone(),
        source: e,
    })?;
    BufReader::new(file)
        .lines()
        .take(n)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TableLoadError::Io {
            path: shown,
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RAW_DRUGS: &str = "drug_claim_name\tnomenclature\tconcept_id\tsource_db\n\
                             clonidine\tx\tD1\tChEMBL\n\
                             compro\ty\tD2\n";

    #[test]
    fn project_columns_keeps_requested_columns_in_order() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        let out = dir.path().join("prepared").join("drugs.tsv");
        fs::write(&raw, RAW_DRUGS).unwrap();

        let rows = project_columns(&raw, &out, &["concept_id", "drug_claim_name"]).unwrap();
        assert_eq!(rows, 2);
        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "concept_id\tdrug_claim_name\nD1\tclonidine\nD2\tcompro\n");
    }

    #[test]
    fn project_columns_skips_whitespace_only_lines() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        let out = dir.path().join("out.tsv");
        fs::write(&raw, "drug_claim_name\tconcept_id\nclonidine\tD1\n   \ncompro\tD2\n").unwrap();

        let rows = project_columns(&raw, &out, &["concept_id"]).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(fs::read_to_string(&out).unwrap(), "concept_id\nD1\nD2\n");
    }

    #[test]
    fn project_columns_fills_short_rows_with_empty_cells() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        let out = dir.path().join("out.tsv");
        fs::write(&raw, RAW_DRUGS).unwrap();

        project_columns(&raw, &out, &["drug_claim_name", "source_db"]).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert!(content.ends_with("compro\t\n"));
    }

    #[test]
    fn project_columns_fails_for_missing_header() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        fs::write(&raw, RAW_DRUGS).unwrap();

        let result = project_columns(&raw, &dir.path().join("out.tsv"), &["interaction_type"]);
        assert!(matches!(result, Err(TableLoadError::MissingColumns { .. })));
    }

    #[test]
    fn ensure_prepared_reuses_existing_files() {
        let dir = tempdir().unwrap();
        let prepared = dir.path().join("drugs.tsv");
        fs::write(&prepared, "existing").unwrap();
        let job = PrepareJob::new(dir.path().join("absent.tsv"), prepared.clone(), &["concept_id"]);

        let outcome = ensure_prepared(&[job], false).unwrap();
        assert_eq!(outcome, PrepareOutcome::AlreadyPrepared);
        assert_eq!(fs::read_to_string(prepared).unwrap(), "existing");
    }

    #[test]
    fn ensure_prepared_projects_raw_files_when_forced() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        let prepared = dir.path().join("drugs.tsv");
        fs::write(&raw, RAW_DRUGS).unwrap();
        fs::write(&prepared, "stale").unwrap();
        let job = PrepareJob::new(raw, prepared.clone(), &["drug_claim_name", "concept_id"]);

        let outcome = ensure_prepared(&[job], true).unwrap();
        assert_eq!(outcome, PrepareOutcome::Prepared { rows: vec![2] });
        assert!(fs::read_to_string(prepared).unwrap().starts_with("drug_claim_name\tconcept_id\n"));
    }

    #[test]
    fn ensure_prepared_fails_without_raw_or_prepared_data() {
        let dir = tempdir().unwrap();
        let job = PrepareJob::new(
            dir.path().join("raw.tsv"),
            dir.path().join("prepared.tsv"),
            &["concept_id"],
        );
        let result = ensure_prepared(&[job], false);
        assert!(matches!(result, Err(TableLoadError::NotFound { .. })));
    }

    #[test]
    fn preview_returns_leading_lines() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("raw.tsv");
        fs::write(&raw, RAW_DRUGS).unwrap();
        let lines = preview(&raw, 2).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("clonidine"));
    }
}
