use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod cli;
pub mod processor;
pub mod walker;

use cli::{BatchArgs, Commands, DumpArgs};

/// The core logic of the application.
pub fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Dump(args) => run_dump(args),
        Commands::Batch(args) => run_batch(args),
    }
}

/// The logic for the 'dump' command: one folder, one artifact. A failure
/// to create the artifact is fatal and propagates to the caller.
fn run_dump(args: DumpArgs) -> anyhow::Result<()> {
    println!("Processing files in folder: {}", args.folder.display());

    let output_path = dump_folder(&args.folder, &walker::DEFAULT_EXCLUDES)?;

    println!("Output written to {}", output_path.display());
    Ok(())
}

/// The logic for the 'batch' command: every candidate subfolder that
/// exists under the base directory is dumped; missing candidates get a
/// console notice. No per-folder outcome fails the command, so the
/// process exits with status 0 after all attempts.
fn run_batch(args: BatchArgs) -> anyhow::Result<()> {
    let base = match args.base {
        Some(dir) => dir,
        None => default_base_dir()?,
    };

    for folder in &args.folders {
        let folder_path = base.join(folder);
        if folder_path.is_dir() {
            match dump_folder(&folder_path, &walker::DEFAULT_EXCLUDES) {
                Ok(output_path) => {
                    println!("Output written to {}", output_path.display());
                }
                Err(err) => {
                    eprintln!("error processing {}: {err:#}", folder_path.display());
                }
            }
        } else {
            println!("Folder '{}' not found in {}", folder.display(), base.display());
        }
    }

    Ok(())
}

/// Walks `root`, skipping any subdirectory whose name is in `excludes`,
/// and writes one record per file to `root/output.txt`. Returns the path
/// of the written artifact.
///
/// The artifact is created (or truncated) before the walk starts, so an
/// unwritable root fails fast. Per-file read failures are recorded
/// inline and never abort the dump; a root that cannot be walked at all
/// simply produces an empty artifact.
pub fn dump_folder(root: &Path, excludes: &HashSet<String>) -> anyhow::Result<PathBuf> {
    let output_path = root.join(processor::OUTPUT_FILE_NAME);

    // 1. Find all relevant files using the walker module
    let files = walker::find_files(root, excludes, &output_path);

    // 2. Write one record per file, in traversal order
    processor::process_files(files, &output_path)?;

    Ok(output_path)
}

/// The directory containing the running executable, the default base the
/// batch command resolves its candidate subfolders against.
fn default_base_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("could not resolve the executable's location")?;
    let dir = exe
        .parent()
        .context("the executable has no parent directory")?;
    Ok(dir.to_path_buf())
}
