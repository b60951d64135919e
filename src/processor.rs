use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;

/// Name of the artifact written inside the dumped folder.
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Outcome of reading one file. Per-file read failures are data, not
/// errors: they become a `Could not read file` record and the traversal
/// moves on to the next file.
#[derive(Debug)]
pub enum FileContent {
    /// Text content, with U+FFFD substituted for undecodable bytes.
    Text(String),
    /// The file could not be opened or read.
    Unreadable,
}

/// Reads a file as text, substituting the replacement character for any
/// byte sequence that is not valid UTF-8. Decoding never fails; only
/// I/O failures (permission denied, dangling symlink, ...) produce
/// `Unreadable`.
pub fn read_lossy(path: &Path) -> FileContent {
    match fs::read(path) {
        Ok(bytes) => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            warn!("could not read {}: {err}", path.display());
            FileContent::Unreadable
        }
    }
}

/// Processes the files yielded by the walker: creates (or truncates) the
/// output artifact, writes one record per file in traversal order, and
/// flushes the sink before returning.
///
/// Creating the output file is the only fatal failure; it happens before
/// the first file is touched, so a dump against an unwritable folder
/// fails fast without doing any work.
pub fn process_files<I>(files: I, output_path: &Path) -> anyhow::Result<()>
where
    I: IntoIterator<Item = PathBuf>,
{
    let file = File::create(output_path)
        .with_context(|| format!("could not create output file {}", output_path.display()))?;
    let mut output = BufWriter::new(file);

    for path in files {
        let content = read_lossy(&path);
        write_record(&mut output, &path, &content)?;
    }

    output
        .flush()
        .with_context(|| format!("could not flush output file {}", output_path.display()))?;
    Ok(())
}

/// Writes one record in the flat output format:
///
/// ```text
/// Folder: <parent directory path as traversed>
/// File: <file name>
/// Content:
/// <verbatim content>
/// ---
/// ```
///
/// or, when the file could not be read, `Could not read file` in place of
/// the content block. The delimiter is the literal `\n---\n` appended
/// after the verbatim content; a content line that is itself `---` is not
/// escaped, so the format is not strictly round-trippable.
pub fn write_record<W: Write>(
    output: &mut W,
    path: &Path,
    content: &FileContent,
) -> anyhow::Result<()> {
    let folder = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();

    writeln!(output, "Folder: {}", folder.display())?;
    writeln!(output, "File: {}", file_name)?;
    match content {
        FileContent::Text(text) => {
            writeln!(output, "Content:")?;
            output.write_all(text.as_bytes())?;
            output.write_all(b"\n---\n")?;
        }
        FileContent::Unreadable => {
            output.write_all(b"Could not read file\n---\n")?;
        }
    }
    Ok(())
}
