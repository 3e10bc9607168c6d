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

//! src/core/resolver.rs
//!
//! Single key resolution
//!
//! Turns one key token ("ctrl", "F5", " c ") into the name of a
//! CircuitPython `Keycode` constant. Resolution order, first match wins:
//! 1. Modifier table
//! 2. Special-key table
//! 3. Single characters: letters, digits, then punctuation
//!
//! Matching is whitelist-only: anything not in a table is rejected.

use thiserror::Error;

use crate::core::tables::{self, LETTERS, NUMBER_NAMES};

/// Key resolution errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KeyError {
    /// Token matched no modifier, special key, letter, digit or symbol.
    /// Carries the normalised (trimmed, lower-cased) token.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Resolves one key token to its keycode name
///
/// The token is trimmed and lower-cased before lookup, so `" Ctrl "`,
/// `"CTRL"` and `"ctrl"` are the same key.
///
/// # Example
/// ```
/// use camel_keymap::core::keycode_name;
///
/// assert_eq!(keycode_name("ctrl")?, "CONTROL");
/// assert_eq!(keycode_name("7")?, "SEVEN");
/// assert_eq!(keycode_name("`")?, "GRAVE_ACCENT");
/// # Ok::<(), camel_keymap::core::KeyError>(())
/// ```
pub fn keycode_name(key: &str) -> Result<&'static str, KeyError> {
    let key = key.trim().to_lowercase();

    if let Some(name) = tables::modifier(&key) {
        return Ok(name);
    }

    if let Some(name) = tables::special_key(&key) {
        return Ok(name);
    }

    let mut chars = key.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii_lowercase() {
            return Ok(LETTERS[(ch as u8 - b'a') as usize]);
        }
        if ch.is_ascii_digit() {
            return Ok(NUMBER_NAMES[(ch as u8 - b'0') as usize]);
        }
        if let Some(name) = tables::symbol(ch) {
            return Ok(name);
        }
    }

    Err(KeyError::UnknownKey(key))
}

/// Checks whether a token names a modifier key
///
/// Case-insensitive and whitespace-tolerant, like `keycode_name`.
pub fn is_modifier(key: &str) -> bool {
    tables::modifier(&key.trim().to_lowercase()).is_some()
}
