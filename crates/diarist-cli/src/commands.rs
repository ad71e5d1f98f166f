use crate::cli::{Cli, Command};
use crate::render::{render_merge, render_split};
use anyhow::Context;
use diarist_core::{current_year_month, DiaristConfig, Journal, JournalError};
use std::io::Write;
use std::path::PathBuf;

/// How a run ended, for the process exit code.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Ran,
    /// Nothing was touched
    MissingDirectory(PathBuf),
}

pub fn run_command(cli: Cli, out: &mut dyn Write) -> anyhow::Result<Outcome> {
    let mut config = DiaristConfig::load(&cli.vault, cli.config.as_deref())
        .context("failed to load configuration")?;

    let dir = match &cli.journals {
        Some(dir) => dir.clone(),
        None => config.journals_dir(&cli.vault),
    };
    let journal = Journal::open(dir);
    log::debug!("journal directory: {}", journal.dir.display());

    let result = match cli.command {
        Command::Fold(args) => {
            let current = args.as_of.unwrap_or_else(current_year_month);
            log::debug!("current month: {current}");
            journal
                .merge_to_month(current)
                .map(|report| render_merge(&report, cli.format, out))
        }
        Command::Unfold(args) => {
            if args.keep_month {
                config.unfold.keep_month_files = true;
            }
            journal
                .split_to_daily(&config.unfold)
                .map(|report| render_split(&report, cli.format, out))
        }
    };

    match result {
        Ok(written) => {
            written.context("failed to write report")?;
            Ok(Outcome::Ran)
        }
        Err(JournalError::MissingDirectory(dir)) => Ok(Outcome::MissingDirectory(dir)),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (Outcome, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut buf = Vec::new();
        let outcome = run_command(cli, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_fold_then_unfold_in_vault() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path();
        let journals = vault.join("journals");
        fs::create_dir(&journals).unwrap();
        fs::write(journals.join("2023-05-01.md"), "first\n").unwrap();
        fs::write(journals.join("2023-05-02.md"), "second\n").unwrap();
        let vault_arg = vault.to_str().unwrap();

        let (outcome, output) = run(&["diarist", "fold", "--vault", vault_arg, "--as-of", "2024-01"]);

        assert_eq!(outcome, Outcome::Ran);
        assert!(output.ends_with("fold complete: merged 2 daily files into 1 month files, 0 failed\n"));
        assert!(journals.join("2023-05.md").exists());
        assert!(!journals.join("2023-05-01.md").exists());

        let (outcome, output) = run(&["diarist", "unfold", "--vault", vault_arg, "--keep-month"]);

        assert_eq!(outcome, Outcome::Ran);
        assert!(output.contains("kept: "));
        assert!(journals.join("2023-05.md").exists());
        assert_eq!(fs::read_to_string(journals.join("2023-05-02.md")).unwrap(), "second");
    }

    #[test]
    fn test_missing_journal_directory() {
        let temp_dir = TempDir::new().unwrap();
        let vault_arg = temp_dir.path().to_str().unwrap();

        let (outcome, output) = run(&["diarist", "fold", "--vault", vault_arg]);

        assert_eq!(outcome, Outcome::MissingDirectory(temp_dir.path().join("journals")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_config_file_controls_folder_and_retention() {
        let temp_dir = TempDir::new().unwrap();
        let vault = temp_dir.path();
        let days = vault.join("diary");
        fs::create_dir(&days).unwrap();
        fs::write(
            vault.join(".diarist.yml"),
            "journals_folder: diary\nunfold:\n  keep_month_files: true\n",
        )
        .unwrap();
        fs::write(days.join("2023-05.md"), "## 2023-05-01\n\nhello\n").unwrap();

        let (outcome, _) = run(&["diarist", "split", "--vault", vault.to_str().unwrap()]);

        assert_eq!(outcome, Outcome::Ran);
        assert!(days.join("2023-05.md").exists());
        assert_eq!(fs::read_to_string(days.join("2023-05-01.md")).unwrap(), "hello");
    }

    #[test]
    fn test_journals_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere");
        fs::create_dir(&elsewhere).unwrap();
        fs::write(elsewhere.join("2023-05.md"), "## 2023-05-01\n\nhello\n").unwrap();

        let (_, output) = run(&[
            "diarist",
            "unfold",
            "--vault",
            temp_dir.path().to_str().unwrap(),
            "--journals",
            elsewhere.to_str().unwrap(),
            "--format",
            "json",
        ]);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["deleted"].as_array().unwrap().len(), 1);
        assert!(elsewhere.join("2023-05-01.md").exists());
        assert!(!elsewhere.join("2023-05.md").exists());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".diarist.yml"), "journals_folder: [1, 2]\n").unwrap();
        let cli = Cli::try_parse_from(["diarist", "fold", "--vault", temp_dir.path().to_str().unwrap()])
            .unwrap();

        let err = run_command(cli, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }
}
