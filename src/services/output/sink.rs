use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::PathBuf;

use crate::services::config::OutputDestination;
use crate::types::errors::{ExtractError, ExtractResult};

/// Output file for one run: the named file, or an anonymous temp file that is
/// copied to standard output once the table is complete.
///
/// The file handle is released on drop, whether or not `finish` is reached.
#[derive(Debug)]
pub struct OutputSink {
    file: File,
    target: SinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SinkTarget {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    pub fn open(destination: &OutputDestination) -> ExtractResult<Self> {
        match destination {
            OutputDestination::File(path) => {
                let file = File::create(path).map_err(|e| {
                    ExtractError::Io(format!("Failed to create {}: {e}", path.display()))
                })?;
                Ok(Self {
                    file,
                    target: SinkTarget::File(path.clone()),
                })
            }
            OutputDestination::Stdout => {
                let file = tempfile::tempfile()
                    .map_err(|e| ExtractError::Io(format!("Failed to create temp file: {e}")))?;
                Ok(Self {
                    file,
                    target: SinkTarget::Stdout,
                })
            }
        }
    }

    pub fn writer(&mut self) -> &mut File {
        &mut self.file
    }

    /// Flush the table; for standard output, replay the buffered bytes to `out`.
    pub fn finish<W: Write>(mut self, out: &mut W) -> ExtractResult<()> {
        self.file.flush()?;
        match &self.target {
            SinkTarget::File(path) => {
                log::info!("Wrote output to {}", path.display());
            }
            SinkTarget::Stdout => {
                self.file.seek(SeekFrom::Start(0))?;
                io::copy(&mut self.file, out)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;
