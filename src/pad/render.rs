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

//! CircuitPython `config.py` generation
//!
//! The pad firmware imports `TIMING`, `BUTTON_PINS` and `BUTTONS` from
//! `config.py`. Keycode names are emitted as `Keycode.<NAME>` attribute
//! references, so every name must come from the resolver's vocabulary.

use chrono::NaiveDateTime;
use std::fmt::Write;

use crate::pad::config::ResolvedPad;

/// First-line prefix marking a generated file
pub const GENERATED_PREFIX: &str = "# Generated by camel-keymap";

const INDENT: &str = "    ";

/// Renders a resolved config as Python source
///
/// # Arguments
/// * `pad` - Config whose shortcuts have all resolved
/// * `generated_at` - Timestamp for the header line; `None` omits the stamp
pub fn render_config_py(pad: &ResolvedPad, generated_at: Option<NaiveDateTime>) -> String {
    let mut out = String::new();

    match generated_at {
        Some(at) => {
            let _ = writeln!(out, "{} at {}", GENERATED_PREFIX, at.format("%Y-%m-%d %H:%M:%S"));
        }
        None => {
            let _ = writeln!(out, "{}", GENERATED_PREFIX);
        }
    }
    out.push_str("# Edits are overwritten on the next push.\n");
    out.push_str("import board\n");
    out.push_str("from adafruit_hid.keycode import Keycode\n\n");

    out.push_str("TIMING = {\n");
    let _ = writeln!(
        out,
        "{}\"double_press_window_ms\": {},",
        INDENT, pad.timing.double_press_window_ms
    );
    let _ = writeln!(
        out,
        "{}\"long_press_threshold_ms\": {},",
        INDENT, pad.timing.long_press_threshold_ms
    );
    out.push_str("}\n\n");

    let pins = pad
        .pins
        .iter()
        .map(|pin| format!("board.{}", pin))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "BUTTON_PINS = [{}]\n", pins);

    if pad.buttons.is_empty() {
        out.push_str("BUTTONS = {}\n");
        return out;
    }

    out.push_str("BUTTONS = {\n");
    for button in &pad.buttons {
        let _ = writeln!(out, "{}{}: {{", INDENT, button.index);
        for gesture in &button.gestures {
            let keys = gesture
                .keycodes
                .iter()
                .map(|name| format!("Keycode.{}", name))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{0}{0}\"{1}\": [{2}],", INDENT, gesture.gesture, keys);
        }
        let _ = writeln!(out, "{}}},", INDENT);
    }
    out.push_str("}\n");

    out
}

/// Strips the generated-at header line, if present
///
/// Used to compare two renders while ignoring their timestamps.
pub fn body(content: &str) -> &str {
    if content.starts_with(GENERATED_PREFIX) {
        match content.find('\n') {
            Some(end) => &content[end + 1..],
            None => "",
        }
    } else {
        content
    }
}
