//! Whole-file line utilities: print, count a character, append a line.

use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt, SeekFrom};
use tracing::debug;

use crate::error::KitError;

/// The character the line utility counts unless told otherwise.
pub const DEFAULT_COUNT_CHAR: char = '*';

pub struct LineFile {
    path: PathBuf,
}

impl LineFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All lines, without their `\n` / `\r\n` terminators.
    pub async fn read_lines(&self) -> Result<Vec<String>, KitError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.not_found_or(e))?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "file read");
        Ok(lines)
    }

    pub async fn print_lines<W: Write>(&self, out: &mut W) -> Result<usize, KitError> {
        let lines = self.read_lines().await?;
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(lines.len())
    }

    pub async fn count_char(&self, ch: char) -> Result<usize, KitError> {
        let lines = self.read_lines().await?;
        Ok(lines
            .iter()
            .map(|line| line.chars().filter(|&c| c == ch).count())
            .sum())
    }

    /// Appends `line` as a new last line, creating the file if needed. A missing
    /// trailing newline is written first so the line count grows by exactly one.
    pub async fn append_line(&self, line: &str) -> Result<(), KitError> {
        if line.contains(['\n', '\r']) {
            return Err(KitError::InvalidLine(line.to_string()));
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        let mut buf = String::with_capacity(line.len() + 2);
        if file.metadata().await?.len() > 0 {
            file.seek(SeekFrom::End(-1)).await?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last).await?;
            if last[0] != b'\n' {
                buf.push('\n');
            }
        }
        buf.push_str(line);
        buf.push('\n');

        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;
        debug!(path = %self.path.display(), "line appended");
        Ok(())
    }

    fn not_found_or(&self, e: std::io::Error) -> KitError {
        if e.kind() == std::io::ErrorKind::NotFound {
            KitError::FileNotFound(self.path.clone())
        } else {
            KitError::IoError(e)
        }
    }
}
