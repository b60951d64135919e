use clap::{Args as ClapArgs, ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// A CLI application that walks a folder tree and concatenates every
/// file's path and content into a single `output.txt` inside that folder.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, color = ColorChoice::Always)]
pub struct Cli {
    /// The subcommand to execute (e.g., 'dump' or 'batch').
    #[command(subcommand)]
    pub command: Commands,
}

/// Defines the available subcommands for the application.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Dump a single folder into `<FOLDER>/output.txt`.
    Dump(DumpArgs),
    /// Dump each candidate subfolder of a base directory that exists,
    /// skipping the ones that do not.
    Batch(BatchArgs),
}

/// Defines the arguments for the 'dump' subcommand.
#[derive(ClapArgs, Debug, Clone)]
pub struct DumpArgs {
    /// The root folder to walk. The output file is written inside it.
    #[arg(required = true)]
    pub folder: PathBuf,
}

/// Defines the arguments for the 'batch' subcommand.
#[derive(ClapArgs, Debug, Clone)]
pub struct BatchArgs {
    /// Candidate subfolders, resolved relative to the base directory.
    /// Each one that exists is dumped; missing ones are reported and
    /// skipped, and never fail the command.
    #[arg(required = true, num_args = 1..)]
    pub folders: Vec<PathBuf>,

    /// Base directory the candidate subfolders are resolved against.
    /// Defaults to the directory containing this executable.
    #[arg(short, long)]
    pub base: Option<PathBuf>,
}

// --- Unit Tests for CLI Parsing ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    /// Verifies that the `dump` command parses the required folder and
    /// nothing else.
    #[test]
    fn test_basic_dump_command() {
        let args = vec!["folder-to-text", "dump", "./my-project"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Dump(dump_args) => {
                assert_eq!(dump_args.folder, PathBuf::from("./my-project"));
            }
            _ => panic!("Expected Dump command to be parsed"),
        }
    }

    /// Verifies that the `batch` command collects every candidate folder
    /// and the optional base directory.
    #[test]
    fn test_batch_command_with_base() {
        let args = vec![
            "folder-to-text",
            "batch",
            "sisa.ui/app",
            "sisa.api",
            "--base",
            "/opt/sisa",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Batch(batch_args) => {
                assert_eq!(
                    batch_args.folders,
                    vec![PathBuf::from("sisa.ui/app"), PathBuf::from("sisa.api")]
                );
                assert_eq!(batch_args.base, Some(PathBuf::from("/opt/sisa")));
            }
            _ => panic!("Expected Batch command to be parsed"),
        }
    }

    /// The base directory is optional and defaults to `None` (resolved to
    /// the executable's directory at run time).
    #[test]
    fn test_batch_command_without_base() {
        let args = vec!["folder-to-text", "batch", "api"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Batch(batch_args) => {
                assert_eq!(batch_args.folders, vec![PathBuf::from("api")]);
                assert!(batch_args.base.is_none());
            }
            _ => panic!("Expected Batch command to be parsed"),
        }
    }

    /// Confirms that parsing fails if the required folder argument is missing.
    #[test]
    fn test_missing_required_argument_fails() {
        let args = vec!["folder-to-text", "dump"];
        let result = Cli::try_parse_from(args);

        assert!(
            result.is_err(),
            "Parsing should fail without the required folder"
        );
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    /// Confirms that `batch` requires at least one candidate folder.
    #[test]
    fn test_batch_without_folders_fails() {
        let args = vec!["folder-to-text", "batch"];
        let result = Cli::try_parse_from(args);

        assert!(result.is_err(), "Parsing should fail without candidates");
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    /// Confirms that parsing fails if no subcommand is provided.
    #[test]
    fn test_no_subcommand_fails() {
        let args = vec!["folder-to-text"];
        let result = Cli::try_parse_from(args);

        assert!(result.is_err(), "Parsing should fail without a subcommand");
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
