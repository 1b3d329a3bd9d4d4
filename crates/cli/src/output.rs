use std::io::{self, Write};

use project::WalkEntry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    Lines,
    Json,
}

pub(crate) fn write_entries<W: Write>(
    out: &mut W,
    entries: &[WalkEntry],
    format: OutputFormat,
    absolute: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)
        }
        OutputFormat::Lines => {
            for entry in entries {
                let path = if absolute {
                    entry.full_path()
                } else {
                    entry.relative_path()
                };
                writeln!(out, "{}", path.display())?;
            }
            Ok(())
        }
    }
}
