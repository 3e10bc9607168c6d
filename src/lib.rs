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

//! Camel Pad keymap translator
//!
//! Translates human-readable shortcuts such as `"ctrl+shift+c"` into the
//! `Keycode` constant names used by CircuitPython's `adafruit_hid`, and
//! pushes complete button maps to the camel-pad macropad.
//!
//! # Features
//!
//! - **Key Resolution:** Case- and whitespace-insensitive lookup of
//!   modifiers, named keys, letters, digits and punctuation
//! - **Shortcut Parsing:** `+`-joined combos with modifier position checks
//! - **Typed Errors:** Unknown key, misplaced modifier and empty shortcut
//!   are distinct variants
//! - **Config Push:** YAML button map to CircuitPython `config.py`, written
//!   atomically with backups
//!
//! # Architecture
//!
//! - **`core`:** Pure translation logic (tables, resolver, combo parser)
//! - **`pad`:** Config loading, rendering, atomic writes, file watching
//! - **`logging`:** tracing subscriber setup for the CLI
//!
//! # Examples
//!
//! ## Resolving a shortcut
//!
//! ```
//! use camel_keymap::core::parse_key_to_keycodes;
//!
//! let keys = parse_key_to_keycodes("cmd+shift+4")?;
//! assert_eq!(keys, ["GUI", "SHIFT", "FOUR"]);
//! # Ok::<(), camel_keymap::core::ComboError>(())
//! ```
//!
//! ## Handling errors
//!
//! ```
//! use camel_keymap::core::{parse_key_to_keycodes, ComboErrorKind};
//!
//! let err = parse_key_to_keycodes("c+ctrl").unwrap_err();
//! assert_eq!(err.kind(), ComboErrorKind::InvalidModifier);
//! ```

pub mod core;
pub mod logging;
pub mod pad;

// Re-export commonly used items for convenience
pub use self::core::{keycode_name, parse_key_to_keycodes, ComboError, KeyError};
