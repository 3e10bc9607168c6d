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

//! src/core/types.rs
//!
//! Keycode vocabulary and classification
//!
//! The resolver only ever hands out identifiers that live in the static
//! tables. This module describes that vocabulary:
//! - `KeyClass`: which of the five disjoint groups an identifier is in
//! - `classify`: maps an identifier back to its group
//! - `vocabulary`: every identifier the resolver can produce

use std::fmt;

use crate::core::tables::{LETTERS, MODIFIERS, NUMBER_NAMES, SPECIAL_KEYS, SYMBOLS};

/// Group a keycode identifier belongs to
///
/// The groups never overlap, so every identifier has exactly one class.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyClass {
    /// CONTROL, ALT, SHIFT, GUI
    Modifier,
    /// Named keys such as ENTER or F5
    Special,
    /// A through Z
    Letter,
    /// ZERO through NINE
    Number,
    /// Punctuation such as MINUS or GRAVE_ACCENT
    Symbol,
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyClass::Modifier => write!(f, "modifier"),
            KeyClass::Special => write!(f, "special"),
            KeyClass::Letter => write!(f, "letter"),
            KeyClass::Number => write!(f, "number"),
            KeyClass::Symbol => write!(f, "symbol"),
        }
    }
}

/// Classifies a keycode identifier
///
/// Returns `None` for anything outside the vocabulary. Matching is exact:
/// identifiers are uppercase and are never re-normalised.
pub fn classify(identifier: &str) -> Option<KeyClass> {
    if MODIFIERS.iter().any(|(_, name)| *name == identifier) {
        Some(KeyClass::Modifier)
    } else if SPECIAL_KEYS.iter().any(|(_, name)| *name == identifier) {
        Some(KeyClass::Special)
    } else if LETTERS.contains(&identifier) {
        Some(KeyClass::Letter)
    } else if NUMBER_NAMES.contains(&identifier) {
        Some(KeyClass::Number)
    } else if SYMBOLS.iter().any(|(_, name)| *name == identifier) {
        Some(KeyClass::Symbol)
    } else {
        None
    }
}

/// Every identifier the resolver can return, without duplicates
///
/// Order follows resolution order: modifiers, special keys, letters,
/// numbers, symbols.
pub fn vocabulary() -> Vec<&'static str> {
    let all = MODIFIERS
        .iter()
        .chain(SPECIAL_KEYS)
        .map(|(_, name)| *name)
        .chain(LETTERS)
        .chain(NUMBER_NAMES)
        .chain(SYMBOLS.iter().map(|(_, name)| *name));

    let mut names: Vec<&'static str> = Vec::new();
    for name in all {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
