// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Atomic output writes with automatic backups
//!
//! - **Atomic writes**: temp-file-then-rename, so the pad never sees a
//!   half-written `config.py`
//! - **Backups**: an existing output is copied to `backups/<name>.<timestamp>`
//!   before it is replaced
//! - **No-op writes**: output whose body is unchanged is left alone

use atomic_write_file::AtomicWriteFile;
use chrono::Local;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::pad::{error::PadError, render};

/// Result of a write request
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WriteOutcome {
    /// Existing file already had the same content
    Unchanged,
    /// File was written; carries the backup path if one was made
    Written { backup: Option<PathBuf> },
}

/// Writes rendered config to a fixed output path
#[derive(Debug)]
pub struct PadWriter {
    output_path: PathBuf,
    backup_dir: PathBuf,
}

impl PadWriter {
    /// Creates a writer for the given output file
    ///
    /// Backups go to a `backups/` directory next to the output, created on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `PadError::NotFound` if the output's parent directory does
    /// not exist.
    pub fn new(output_path: PathBuf) -> Result<Self, PadError> {
        let parent = match output_path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => return Err(PadError::NotFound(output_path.clone())),
        };

        if !parent.is_dir() {
            return Err(PadError::NotFound(parent.to_path_buf()));
        }

        let backup_dir = parent.join("backups");

        Ok(Self {
            output_path,
            backup_dir,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes content atomically, backing up any previous file first
    ///
    /// The generated-at header is ignored when checking for changes.
    pub fn write(&self, content: &str) -> Result<WriteOutcome, PadError> {
        let backup = if self.output_path.exists() {
            let existing = fs::read_to_string(&self.output_path)?;
            if render::body(&existing) == render::body(content) {
                debug!(path = %self.output_path.display(), "output unchanged, skipping write");
                return Ok(WriteOutcome::Unchanged);
            }
            Some(self.create_timestamped_backup(&existing)?)
        } else {
            None
        };

        let mut file = AtomicWriteFile::options()
            .open(&self.output_path)
            .map_err(|e| PadError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| PadError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| PadError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        info!(path = %self.output_path.display(), "wrote pad config");

        Ok(WriteOutcome::Written { backup })
    }

    fn create_timestamped_backup(&self, content: &str) -> Result<PathBuf, PadError> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            PadError::BackupFailed(format!("{}: {}", self.backup_dir.display(), e))
        })?;

        // YYYY-MM-DD_HHMMSS
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .output_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PadError::BackupFailed("Output path has no file name".to_string()))?;

        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        fs::write(&backup_path, content)
            .map_err(|e| PadError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        debug!(backup = %backup_path.display(), "backed up previous output");

        Ok(backup_path)
    }
}
