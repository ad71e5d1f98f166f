use clap::{Args, Parser, Subcommand};
use diarist_core::YearMonth;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "diarist",
    about = "Fold daily journal notes into month files, and split them back",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Vault root; the journal directory is resolved against it
    #[arg(long, global = true, default_value = ".")]
    pub vault: PathBuf,

    /// Journal directory, overriding the configured one
    #[arg(long, global = true)]
    pub journals: Option<PathBuf>,

    /// Config file (default: <vault>/.diarist.yml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge yyyy-mm-dd.md files into yyyy-mm.md (current month excluded)
    #[command(visible_alias = "merge")]
    Fold(FoldArgs),
    /// Split yyyy-mm.md files back into yyyy-mm-dd.md
    #[command(visible_alias = "split")]
    Unfold(UnfoldArgs),
}

#[derive(Args, Debug)]
pub struct FoldArgs {
    /// Treat this month (yyyy-mm) as the current one instead of today's
    #[arg(long, value_name = "YYYY-MM")]
    pub as_of: Option<YearMonth>,
}

#[derive(Args, Debug)]
pub struct UnfoldArgs {
    /// Keep the month files after splitting
    #[arg(long)]
    pub keep_month: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fold_defaults() {
        let cli = Cli::try_parse_from(["diarist", "fold"]).unwrap();

        assert_eq!(cli.vault, PathBuf::from("."));
        assert_eq!(cli.journals, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(matches!(cli.command, Command::Fold(FoldArgs { as_of: None })));
    }

    #[test]
    fn test_parse_fold_as_of() {
        let cli = Cli::try_parse_from(["diarist", "merge", "--as-of", "2023-07"]).unwrap();

        match cli.command {
            Command::Fold(args) => assert_eq!(args.as_of, Some(YearMonth::new(2023, 7))),
            other => panic!("expected fold, got {other:?}"),
        }
        assert!(Cli::try_parse_from(["diarist", "fold", "--as-of", "2023-7"]).is_err());
        assert!(Cli::try_parse_from(["diarist", "fold", "--as-of", "2023-13"]).is_err());
    }

    #[test]
    fn test_parse_unfold_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "diarist",
            "unfold",
            "--keep-month",
            "--journals",
            "/tmp/journals",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Unfold(UnfoldArgs { keep_month: true })));
        assert_eq!(cli.journals, Some(PathBuf::from("/tmp/journals")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["diarist"]).is_err());
    }
}
