//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::format::dump_range;
use crate::relex::verify_resumption;

use super::{CliError, CliResult, ExitCode, LexArgs};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, or not valid UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();

    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Clamp the requested window to the buffer, warning about offsets that had to move.
fn clamp_window(len: usize, start: usize, end: Option<usize>) -> (usize, usize) {
    let end = match end {
        Some(end) if end > len => {
            tracing::warn!(end, len, "end offset is past the end of the file; clamping");
            len
        }
        Some(end) => end,
        None => len,
    };
    if start > end {
        tracing::warn!(start, end, "start offset is past the end offset; nothing to scan");
    }
    (start.min(end), end)
}

/// Print the token stream of one file.
pub fn lex_file(args: &LexArgs) -> CliResult<ExitCode> {
    let source = read_source(&args.file)?;
    let (start, end) = clamp_window(source.len(), args.start, args.end);

    let dump = dump_range(&source, start, end, args.state, &args.dump_config())
        .map_err(|e| CliError::failure(format!("Error dumping '{}': {}", args.file.display(), e)))?;
    print!("{}", dump);
    Ok(ExitCode::SUCCESS)
}

/// Check every token boundary of each file for resumption equivalence.
///
/// Keeps going after a failing file so all problems are reported in one run.
pub fn verify_files<P: AsRef<Path>>(files: &[P]) -> CliResult<ExitCode> {
    let mut failures = 0;

    for file_path in files {
        let file_path = file_path.as_ref();
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                failures += 1;
                continue;
            }
        };

        match verify_resumption(&source) {
            Ok(report) => println!(
                "ok {}: {} tokens, {} boundaries checked, {} skipped",
                file_path.display(),
                report.tokens,
                report.boundaries_checked,
                report.boundaries_skipped
            ),
            Err(mismatch) => {
                eprintln!("FAIL {}: {}", file_path.display(), mismatch);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CliError::failure(format!("\n{} of {} file(s) failed", failures, files.len())));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_window_defaults_to_whole_file() {
        assert_eq!(clamp_window(10, 0, None), (0, 10));
    }

    #[test]
    fn test_clamp_window_end_past_len() {
        assert_eq!(clamp_window(10, 2, Some(50)), (2, 10));
    }

    #[test]
    fn test_clamp_window_start_past_end() {
        assert_eq!(clamp_window(10, 8, Some(4)), (4, 4));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.bnd")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_verify_fixture() {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundle.bnd");
        assert_eq!(verify_files(&[fixture]).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_verify_reports_missing_files() {
        let err = verify_files(&["definitely/not/here.bnd"]).unwrap_err();
        assert!(err.message.contains("1 of 1 file(s) failed"));
    }
}
