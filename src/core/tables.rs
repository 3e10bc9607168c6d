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

//! src/core/tables.rs
//!
//! Static lookup tables for key resolution
//!
//! Every identifier here is a constant name on CircuitPython's
//! `adafruit_hid.keycode.Keycode` class. Tables are plain const slices:
//! they are small enough that a linear scan beats hashing, and being
//! compile-time data they can be shared by any number of threads.

/// Modifier tokens and their keycode names
///
/// Several tokens share one identifier on purpose (e.g. every
/// platform's "command" key becomes `GUI`).
pub const MODIFIERS: &[(&str, &str)] = &[
    ("ctrl", "CONTROL"),
    ("control", "CONTROL"),
    ("alt", "ALT"),
    ("option", "ALT"),
    ("shift", "SHIFT"),
    ("meta", "GUI"),
    ("cmd", "GUI"),
    ("command", "GUI"),
    ("win", "GUI"),
    ("super", "GUI"),
];

/// Named non-character keys
pub const SPECIAL_KEYS: &[(&str, &str)] = &[
    ("enter", "ENTER"),
    ("return", "ENTER"),
    ("tab", "TAB"),
    ("esc", "ESCAPE"),
    ("escape", "ESCAPE"),
    ("space", "SPACE"),
    ("spacebar", "SPACE"),
    ("backspace", "BACKSPACE"),
    ("delete", "DELETE"),
    ("del", "DELETE"),
    ("insert", "INSERT"),
    ("ins", "INSERT"),
    ("home", "HOME"),
    ("end", "END"),
    ("pageup", "PAGE_UP"),
    ("pgup", "PAGE_UP"),
    ("pagedown", "PAGE_DOWN"),
    ("pgdn", "PAGE_DOWN"),
    ("up", "UP_ARROW"),
    ("down", "DOWN_ARROW"),
    ("left", "LEFT_ARROW"),
    ("right", "RIGHT_ARROW"),
    ("f1", "F1"),
    ("f2", "F2"),
    ("f3", "F3"),
    ("f4", "F4"),
    ("f5", "F5"),
    ("f6", "F6"),
    ("f7", "F7"),
    ("f8", "F8"),
    ("f9", "F9"),
    ("f10", "F10"),
    ("f11", "F11"),
    ("f12", "F12"),
    ("capslock", "CAPS_LOCK"),
    ("printscreen", "PRINT_SCREEN"),
    ("scrolllock", "SCROLL_LOCK"),
    ("pause", "PAUSE"),
];

/// Letter keycodes, indexed by `c - 'a'`
pub const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Digit keycodes, indexed by `d - '0'`
///
/// CircuitPython spells the number row out (`Keycode.ONE`, not `Keycode.1`).
pub const NUMBER_NAMES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR",
    "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Punctuation characters on a US layout
pub const SYMBOLS: &[(char, &str)] = &[
    ('-', "MINUS"),
    ('=', "EQUALS"),
    ('[', "LEFT_BRACKET"),
    (']', "RIGHT_BRACKET"),
    ('\\', "BACKSLASH"),
    (';', "SEMICOLON"),
    ('\'', "QUOTE"),
    ('`', "GRAVE_ACCENT"),
    (',', "COMMA"),
    ('.', "PERIOD"),
    ('/', "FORWARD_SLASH"),
];

/// Looks up a normalised token in the modifier table
pub fn modifier(token: &str) -> Option<&'static str> {
    lookup(MODIFIERS, token)
}

/// Looks up a normalised token in the special-key table
pub fn special_key(token: &str) -> Option<&'static str> {
    lookup(SPECIAL_KEYS, token)
}

/// Looks up a punctuation character
pub fn symbol(ch: char) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, name)| *name)
}

fn lookup(table: &'static [(&'static str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, name)| *name)
}
