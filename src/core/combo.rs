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

//! src/core/combo.rs
//!
//! Shortcut string parser
//!
//! Parses `+`-joined shortcuts such as "ctrl+shift+c" into an ordered list
//! of keycode names. Rules:
//! - The whole string is lower-cased once, then split on `+`
//! - Empty components (from "ctrl+", "+c" or "ctrl++c") are skipped
//! - Every component except the last one by position must be a modifier
//! - A shortcut that yields no keys at all is an error, never an empty list

use std::fmt;
use thiserror::Error;

use crate::core::resolver::{is_modifier, keycode_name, KeyError};

/// Shortcut parse errors
///
/// Components are reported exactly as the caller wrote them.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComboError {
    /// A component did not resolve to any key
    #[error("invalid key component {component:?}: {source}")]
    InvalidComponent {
        component: String,
        #[source]
        source: KeyError,
    },

    /// A non-final component resolved, but is not a modifier
    #[error("{0:?} is not a valid modifier")]
    InvalidModifier(String),

    /// Nothing but separators and whitespace
    #[error("no keys specified")]
    NoKeys,
}

/// The three failure kinds a shortcut can produce
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComboErrorKind {
    UnknownKey,
    InvalidModifier,
    EmptyShortcut,
}

impl fmt::Display for ComboErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboErrorKind::UnknownKey => write!(f, "unknown key"),
            ComboErrorKind::InvalidModifier => write!(f, "invalid modifier"),
            ComboErrorKind::EmptyShortcut => write!(f, "empty shortcut"),
        }
    }
}

impl ComboError {
    pub fn kind(&self) -> ComboErrorKind {
        match self {
            ComboError::InvalidComponent { .. } => ComboErrorKind::UnknownKey,
            ComboError::InvalidModifier(_) => ComboErrorKind::InvalidModifier,
            ComboError::NoKeys => ComboErrorKind::EmptyShortcut,
        }
    }
}

/// Parse a shortcut string into keycode names
///
/// # Arguments
/// * `shortcut` - A `+`-joined key combination, e.g. "ctrl+shift+c"
///
/// # Returns
/// The keycode names in input order, or the first error encountered.
/// There is no partial result.
///
/// # Example
/// ```
/// use camel_keymap::core::parse_key_to_keycodes;
///
/// let keys = parse_key_to_keycodes("Ctrl+Shift+C")?;
/// assert_eq!(keys, vec!["CONTROL", "SHIFT", "C"]);
/// # Ok::<(), camel_keymap::core::ComboError>(())
/// ```
pub fn parse_key_to_keycodes(shortcut: &str) -> Result<Vec<&'static str>, ComboError> {
    // Lower-casing never adds or removes a '+', so both splits line up
    let lowered = shortcut.to_lowercase();
    let parts: Vec<&str> = lowered.split('+').collect();
    let mut originals = shortcut.split('+');
    let last = parts.len().saturating_sub(1);

    let mut keycodes = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        let original = originals.next().unwrap_or(part);

        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let name = keycode_name(part).map_err(|source| ComboError::InvalidComponent {
            component: original.to_string(),
            source,
        })?;

        // Modifiers come first, the actual key last
        if i < last && !is_modifier(part) {
            return Err(ComboError::InvalidModifier(original.to_string()));
        }

        keycodes.push(name);
    }

    if keycodes.is_empty() {
        return Err(ComboError::NoKeys);
    }

    Ok(keycodes)
}
