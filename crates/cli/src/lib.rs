#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `project-files` command. It parses arguments with
//! `clap`, maps them onto [`project::ProjectOptions`], walks the requested
//! directory and prints the kept entries either one path per line or as a
//! JSON array.
//!
//! # Exit status
//!
//! - `0`: success, including `--help` and `--version`;
//! - `1`: the walk failed (unreadable manifest, bad pattern, I/O error);
//! - `2`: the command line could not be parsed.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["project-files", "--version"], &mut stdout, &mut stderr);
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("project-files"));
//! ```

use std::ffi::OsString;
use std::io::Write;

use logging::init_tracing;
use project::project_files_with;

mod args;
mod command;
mod output;
mod skip;

use args::{ParsedArgs, parse_args};
use output::write_entries;
use skip::SkipDirectories;

/// Name the command reports in usage and diagnostics.
pub const PROGRAM_NAME: &str = "project-files";

const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Runs the command with explicit output streams and returns its exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    init_tracing(parsed.verbosity);
    match execute(&parsed, stdout) {
        Ok(()) => EXIT_OK,
        Err(message) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {message}");
            EXIT_FAILURE
        }
    }
}

/// Converts a status returned by [`run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, i32::from(u8::MAX));
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn execute<Out: Write>(parsed: &ParsedArgs, stdout: &mut Out) -> Result<(), String> {
    let options = parsed.options();
    let mut hooks = SkipDirectories::new(parsed.skip_dirs.iter().cloned());
    let entries =
        project_files_with(&parsed.root, &options, &mut hooks).map_err(|error| error.to_string())?;
    tracing::info!(
        target: logging::WALK_TARGET,
        "{} entries under {}",
        entries.len(),
        parsed.root.display()
    );

    write_entries(stdout, &entries, parsed.format, parsed.absolute)
        .map_err(|error| format!("failed to write output: {error}"))
}

fn report_clap_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    use clap::error::ErrorKind;

    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{rendered}");
            EXIT_OK
        }
        _ => {
            let _ = write!(stderr, "{rendered}");
            EXIT_USAGE
        }
    }
}
