use crate::error::{CliError, Result};
use std::path::Path;

const REPORT_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

/// Checks that the report path names a '.txt' or '.pdf' file in a directory
/// that already exists. A bare file name refers to the working directory.
pub fn output_path(path: &Path) -> Result<()> {
    let has_report_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            REPORT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !has_report_extension {
        return Err(CliError::Argument(format!(
            "Output file must end with '.txt' or '.pdf': {}",
            path.display()
        )));
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(CliError::Argument(format!(
                "Output directory does not exist: {}",
                parent.display()
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn accepts_report_extensions_in_existing_directory() {
        let dir = tempdir().unwrap();
        assert!(output_path(&dir.path().join("report.txt")).is_ok());
        assert!(output_path(&dir.path().join("report.PDF")).is_ok());
    }

    #[test]
    fn accepts_bare_file_name() {
        assert!(output_path(Path::new("report.txt")).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = tempdir().unwrap();
        let result = output_path(&dir.path().join("report.docx"));
        assert!(matches!(result, Err(CliError::Argument(msg)) if msg.contains(".txt")));
        assert!(output_path(&dir.path().join("report")).is_err());
    }

    #[test]
    fn rejects_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let result = output_path(&dir.path().join("missing").join("report.txt"));
        assert!(matches!(result, Err(CliError::Argument(msg)) if msg.contains("does not exist")));
    }
}
