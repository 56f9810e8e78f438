use crate::cli::PrepareArgs;
use crate::error::Result;
use druginteract::core::io::prepare::{self, PrepareJob, PrepareOutcome};
use druginteract::core::models::agent::AgentRecord;
use druginteract::core::models::interaction::InteractionRecord;
use tracing::info;

pub const PREPARED_INTERACTIONS: &str = "interactions.tsv";
pub const PREPARED_DRUGS: &str = "drugs.tsv";

pub fn run(args: PrepareArgs) -> Result<()> {
    let jobs = [
        PrepareJob::new(
            args.raw_interactions.clone(),
            args.out_dir.join(PREPARED_INTERACTIONS),
            InteractionRecord::REQUIRED_COLUMNS,
        ),
        PrepareJob::new(
            args.raw_drugs.clone(),
            args.out_dir.join(PREPARED_DRUGS),
            AgentRecord::REQUIRED_COLUMNS,
        ),
    ];

    info!(force = args.force, "Preparing data files in {:?}", &args.out_dir);
    match prepare::ensure_prepared(&jobs, args.force)? {
        PrepareOutcome::AlreadyPrepared => {
            println!(
                "Prepared files already exist in {}; use --force to rebuild them.",
                args.out_dir.display()
            );
        }
        PrepareOutcome::Prepared { rows } => {
            for (job, count) in jobs.iter().zip(rows) {
                println!("Wrote {} rows to {}", count, job.prepared.display());
            }
        }
    }

    if args.preview > 0 {
        for job in &jobs {
            println!("\n--- {} ---", job.prepared.display());
            for line in prepare::preview(&job.prepared, args.preview)? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn prepare_args(dir: &Path, force: bool) -> PrepareArgs {
        PrepareArgs {
            raw_interactions: dir.join("raw_interactions.tsv"),
            raw_drugs: dir.join("raw_drugs.tsv"),
            out_dir: dir.join("prepared"),
            force,
            preview: 1,
        }
    }

    fn write_raw(dir: &Path) {
        fs::write(
            dir.join("raw_interactions.tsv"),
            "gene_name\tgene_claim_name\tdrug_concept_id\tinteraction_type\tinteraction_score\tsource\n\
             CYP2C9\tCYP2C9\tD1\tagonist\t0.2\tDrugBank\n",
        )
        .unwrap();
        fs::write(
            dir.join("raw_drugs.tsv"),
            "drug_claim_name\tdrug_name\tconcept_id\nclonidine\tCLONIDINE\tD1\n",
        )
        .unwrap();
    }

    #[test]
    fn projects_raw_dumps_into_out_dir() {
        let dir = tempdir().unwrap();
        write_raw(dir.path());

        run(prepare_args(dir.path(), false)).unwrap();

        let interactions =
            fs::read_to_string(dir.path().join("prepared").join(PREPARED_INTERACTIONS)).unwrap();
        assert_eq!(
            interactions,
            "gene_claim_name\tinteraction_type\tinteraction_score\tdrug_concept_id\n\
             CYP2C9\tagonist\t0.2\tD1\n"
        );
        let drugs = fs::read_to_string(dir.path().join("prepared").join(PREPARED_DRUGS)).unwrap();
        assert_eq!(drugs, "drug_claim_name\tconcept_id\nclonidine\tD1\n");
    }

    #[test]
    fn existing_prepared_files_are_kept_without_force() {
        let dir = tempdir().unwrap();
        write_raw(dir.path());
        run(prepare_args(dir.path(), false)).unwrap();

        let drugs_path = dir.path().join("prepared").join(PREPARED_DRUGS);
        fs::write(&drugs_path, "drug_claim_name\tconcept_id\nedited\tD9\n").unwrap();

        run(prepare_args(dir.path(), false)).unwrap();
        assert!(fs::read_to_string(&drugs_path).unwrap().contains("edited"));

        run(prepare_args(dir.path(), true)).unwrap();
        assert!(fs::read_to_string(&drugs_path).unwrap().contains("clonidine"));
    }

    #[test]
    fn missing_raw_files_fail() {
        let dir = tempdir().unwrap();
        let result = run(prepare_args(dir.path(), false));
        assert!(matches!(result, Err(CliError::Table(_))));
    }
}
