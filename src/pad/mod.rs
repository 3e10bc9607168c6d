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

//! Macropad configuration push
//!
//! Takes a YAML description of button gestures, resolves every shortcut
//! with `core`, and writes the CircuitPython `config.py` the pad imports.
//!
//! # Example
//!
//! ```no_run
//! use camel_keymap::pad::{build, render_config_py, PadWriter};
//! use std::path::{Path, PathBuf};
//!
//! let pad = build(Path::new("config.yaml"))?;
//! let content = render_config_py(&pad, None);
//!
//! let writer = PadWriter::new(PathBuf::from("/media/CIRCUITPY/config.py"))?;
//! writer.write(&content)?;
//! # Ok::<(), camel_keymap::pad::PadError>(())
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod watcher;
pub mod writer;

pub use config::{build, ButtonMapping, Gesture, PadConfig, ResolvedPad, Timing};
pub use error::{BindingError, PadError};
pub use render::render_config_py;
pub use watcher::ConfigWatcher;
pub use writer::{PadWriter, WriteOutcome};
