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

//! File system watcher for live pad config monitoring
//!
//! Uses OS-level file watching via the notify crate. The watch sits on the
//! config's parent directory rather than the file itself: editors that save
//! by renaming a temp file over the original replace the inode, and a
//! file-level watch would go deaf after the first such save.
//!
//! Editors also save in several steps, so events arriving within a short
//! window are coalesced into a single change.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    ffi::{OsStr, OsString},
    path::Path,
    sync::mpsc::{channel, Receiver, RecvTimeoutError},
    time::{Duration, Instant},
};
use tracing::warn;

use crate::pad::error::PadError;

/// Quiet period after the first event before a change is reported
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Watches the pad config file for modifications
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl ConfigWatcher {
    /// Starts watching `path`
    ///
    /// # Errors
    ///
    /// Returns `PadError::NotFound` if the file doesn't exist and
    /// `PadError::Watch` if the OS watch cannot be set up.
    pub fn new(path: &Path) -> Result<Self, PadError> {
        if !path.is_file() {
            return Err(PadError::NotFound(path.to_path_buf()));
        }

        let file_name = path
            .file_name()
            .ok_or_else(|| PadError::NotFound(path.to_path_buf()))?
            .to_os_string();

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(ConfigWatcher {
            _watcher: watcher,
            rx,
            file_name,
        })
    }

    /// Blocks until the file changes, then waits out the debounce window
    ///
    /// Returns `false` once the watcher has shut down.
    pub fn wait_for_change(&self, debounce: Duration) -> bool {
        next_change(&self.rx, &self.file_name, debounce)
    }
}

/// Waits for the first event touching `file_name`, then drains events
/// until none has arrived for `debounce`
fn next_change(
    rx: &Receiver<notify::Result<Event>>,
    file_name: &OsStr,
    debounce: Duration,
) -> bool {
    loop {
        match rx.recv() {
            Ok(event_result) => {
                if is_change(event_result, file_name) {
                    break;
                }
            }
            Err(_) => return false,
        }
    }

    let mut deadline = Instant::now() + debounce;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(event_result) => {
                if is_change(event_result, file_name) {
                    deadline = Instant::now() + debounce;
                }
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return true,
        }
    }
}

/// A create or modify event (rename included) on the watched file
fn is_change(event_result: notify::Result<Event>, file_name: &OsStr) -> bool {
    match event_result {
        Ok(event) => {
            matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
                && event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name))
        }
        Err(e) => {
            warn!(error = %e, "config watcher error");
            false
        }
    }
}
