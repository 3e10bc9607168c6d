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

//! src/core/mod.rs
//!
//! Core translation logic
//!
//! This module turns human-readable shortcuts into keycode names:
//! - Static lookup tables (modifiers, special keys, symbols)
//! - Single key resolution (`keycode_name`)
//! - Shortcut parsing with positional modifier checks (`parse_key_to_keycodes`)
//! - Vocabulary classification
//!
//! Everything here is pure: no I/O, no logging, no shared mutable state.
//! Both operations can be called from any number of threads.

pub mod combo;
pub mod resolver;
pub mod tables;
pub mod types;

pub use combo::{parse_key_to_keycodes, ComboError, ComboErrorKind};
pub use resolver::{is_modifier, keycode_name, KeyError};
pub use types::{classify, vocabulary, KeyClass};

#[cfg(test)]
mod tests;
