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

//! Pad configuration (YAML)
//!
//! Describes which shortcut each button sends for each gesture:
//!
//! ```yaml
//! timing:
//!   double_press_window_ms: 300
//!   long_press_threshold_ms: 500
//! pins: [BOOT0, D5]
//! buttons:
//!   0:
//!     press: "ctrl+`"
//!     long_press: cmd+q
//!   1:
//!     double_press: ctrl+shift+c
//! ```
//!
//! Every section is optional; missing values fall back to the defaults
//! the pad firmware ships with.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, fs, path::Path};
use tracing::debug;

use crate::core::parse_key_to_keycodes;
use crate::pad::error::{BindingError, PadError};

/// Press-gesture timing, forwarded verbatim to the firmware
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Timing {
    pub double_press_window_ms: u64,
    pub long_press_threshold_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            double_press_window_ms: 300,
            long_press_threshold_ms: 500,
        }
    }
}

/// Gestures a button can distinguish
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Gesture {
    Press,
    DoublePress,
    LongPress,
}

impl Gesture {
    /// All gestures, in the order they are rendered
    pub const ALL: [Gesture; 3] = [Gesture::Press, Gesture::DoublePress, Gesture::LongPress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Press => "press",
            Gesture::DoublePress => "double_press",
            Gesture::LongPress => "long_press",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shortcuts bound to one button
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_press: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_press: Option<String>,
}

impl ButtonMapping {
    /// Shortcut bound to a gesture, if any
    pub fn get(&self, gesture: Gesture) -> Option<&str> {
        match gesture {
            Gesture::Press => self.press.as_deref(),
            Gesture::DoublePress => self.double_press.as_deref(),
            Gesture::LongPress => self.long_press.as_deref(),
        }
    }

    /// Bound gestures in render order
    pub fn bindings(&self) -> impl Iterator<Item = (Gesture, &str)> {
        Gesture::ALL
            .into_iter()
            .filter_map(move |gesture| self.get(gesture).map(|shortcut| (gesture, shortcut)))
    }
}

/// Complete pad configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PadConfig {
    pub timing: Timing,
    /// CircuitPython `board` pin names, one per button index
    pub pins: Vec<String>,
    pub buttons: BTreeMap<u32, ButtonMapping>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            pins: vec!["BOOT0".to_string()],
            buttons: BTreeMap::new(),
        }
    }
}

/// One gesture with its resolved keycodes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedGesture {
    pub gesture: Gesture,
    pub keycodes: Vec<&'static str>,
}

/// One button with all of its resolved gestures
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedButton {
    pub index: u32,
    pub gestures: Vec<ResolvedGesture>,
}

/// A config whose every shortcut resolved, ready to render
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedPad {
    pub timing: Timing,
    pub pins: Vec<String>,
    /// Ordered by button index
    pub buttons: Vec<ResolvedButton>,
}

impl PadConfig {
    /// Loads a config file
    ///
    /// # Errors
    ///
    /// Returns `PadError::NotFound` if the file doesn't exist and
    /// `PadError::Parse` if it isn't a valid pad config.
    pub fn load(path: &Path) -> Result<Self, PadError> {
        if !path.exists() {
            return Err(PadError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read pad config");

        Self::from_yaml(&content)
    }

    /// Parses config from a YAML string
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self, PadError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| PadError::Parse(e.to_string()))
    }

    /// Checks structure: timings, pin names and button/pin pairing
    ///
    /// Shortcut strings are checked separately by `resolve`. Returns every
    /// problem found; an empty list means the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.timing.double_press_window_ms == 0 {
            errors.push("timing.double_press_window_ms must be positive".to_string());
        }
        if self.timing.long_press_threshold_ms == 0 {
            errors.push("timing.long_press_threshold_ms must be positive".to_string());
        }

        if self.pins.is_empty() {
            errors.push("pins must list at least one pin".to_string());
        }
        for pin in &self.pins {
            if !is_python_identifier(pin) {
                errors.push(format!("pin '{}' is not a valid board pin name", pin));
            }
        }

        for (index, mapping) in &self.buttons {
            if *index as usize >= self.pins.len() {
                errors.push(format!(
                    "button {} has no pin ({} pin{} configured)",
                    index,
                    self.pins.len(),
                    if self.pins.len() == 1 { "" } else { "s" }
                ));
            }
            if mapping.bindings().next().is_none() {
                errors.push(format!("button {} has no gestures bound", index));
            }
        }

        errors
    }

    /// Resolves every bound shortcut to keycode names
    ///
    /// All failures are collected, so one run reports every bad binding.
    ///
    /// # Errors
    ///
    /// Returns `PadError::InvalidBindings` if any shortcut fails to parse.
    pub fn resolve(&self) -> Result<ResolvedPad, PadError> {
        let mut buttons = Vec::with_capacity(self.buttons.len());
        let mut failures = Vec::new();

        for (index, mapping) in &self.buttons {
            let mut gestures = Vec::new();

            for (gesture, shortcut) in mapping.bindings() {
                match parse_key_to_keycodes(shortcut) {
                    Ok(keycodes) => gestures.push(ResolvedGesture { gesture, keycodes }),
                    Err(error) => failures.push(BindingError {
                        button: *index,
                        gesture,
                        error,
                    }),
                }
            }

            buttons.push(ResolvedButton {
                index: *index,
                gestures,
            });
        }

        if !failures.is_empty() {
            return Err(PadError::InvalidBindings(failures));
        }

        Ok(ResolvedPad {
            timing: self.timing.clone(),
            pins: self.pins.clone(),
            buttons,
        })
    }
}

/// Loads, validates and resolves a config file in one step
pub fn build(path: &Path) -> Result<ResolvedPad, PadError> {
    let config = PadConfig::load(path)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(PadError::Invalid(errors));
    }

    config.resolve()
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ComboError;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
timing:
  double_press_window_ms: 250
pins: [BOOT0, D5]
buttons:
  0:
    press: "ctrl+`"
    long_press: cmd+q
  1:
    double_press: Ctrl+Shift+C
"#;

    #[test]
    fn test_parse_sample() {
        let config = PadConfig::from_yaml(SAMPLE).unwrap();

        assert_eq!(config.timing.double_press_window_ms, 250);
        // Missing field falls back to the default
        assert_eq!(config.timing.long_press_threshold_ms, 500);
        assert_eq!(config.pins, vec!["BOOT0", "D5"]);
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.buttons[&0].press.as_deref(), Some("ctrl+`"));
        assert_eq!(config.buttons[&1].get(Gesture::DoublePress), Some("Ctrl+Shift+C"));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(PadConfig::from_yaml("").unwrap(), PadConfig::default());
        assert_eq!(PadConfig::from_yaml("buttons: {}\n").unwrap(), PadConfig::default());
    }

    #[test]
    fn test_unknown_gesture_is_rejected() {
        let result = PadConfig::from_yaml("buttons:\n  0:\n    tripple_press: a\n");
        assert!(matches!(result, Err(PadError::Parse(_))));
    }

    #[test]
    fn test_bindings_order() {
        let mapping = ButtonMapping {
            press: Some("a".to_string()),
            double_press: None,
            long_press: Some("b".to_string()),
        };

        let bound: Vec<_> = mapping.bindings().collect();
        assert_eq!(bound, vec![(Gesture::Press, "a"), (Gesture::LongPress, "b")]);
    }

    #[test]
    fn test_validate_sample() {
        let config = PadConfig::from_yaml(SAMPLE).unwrap();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_everything() {
        let config = PadConfig::from_yaml(
            r#"
timing:
  long_press_threshold_ms: 0
pins: [BOOT0, "2bad"]
buttons:
  0: {}
  5:
    press: a
"#,
        )
        .unwrap();

        let errors = config.validate();
        assert_eq!(errors.len(), 4, "errors: {:?}", errors);
        assert!(errors.iter().any(|e| e.contains("long_press_threshold_ms")));
        assert!(errors.iter().any(|e| e.contains("'2bad'")));
        assert!(errors.iter().any(|e| e.contains("button 0 has no gestures")));
        assert!(errors.iter().any(|e| e.contains("button 5 has no pin")));
    }

    #[test]
    fn test_resolve_sample() {
        let resolved = PadConfig::from_yaml(SAMPLE).unwrap().resolve().unwrap();

        assert_eq!(resolved.buttons.len(), 2);
        assert_eq!(
            resolved.buttons[0].gestures,
            vec![
                ResolvedGesture {
                    gesture: Gesture::Press,
                    keycodes: vec!["CONTROL", "GRAVE_ACCENT"],
                },
                ResolvedGesture {
                    gesture: Gesture::LongPress,
                    keycodes: vec!["GUI", "Q"],
                },
            ]
        );
        assert_eq!(resolved.buttons[1].index, 1);
        assert_eq!(resolved.buttons[1].gestures[0].keycodes, vec!["CONTROL", "SHIFT", "C"]);
    }

    #[test]
    fn test_resolve_collects_all_failures() {
        let config = PadConfig::from_yaml(
            r#"
pins: [BOOT0, D5]
buttons:
  0:
    press: c+ctrl
    long_press: ctrl+c
  1:
    double_press: "+"
"#,
        )
        .unwrap();

        match config.resolve() {
            Err(PadError::InvalidBindings(failures)) => {
                assert_eq!(
                    failures,
                    vec![
                        BindingError {
                            button: 0,
                            gesture: Gesture::Press,
                            error: ComboError::InvalidModifier("c".to_string()),
                        },
                        BindingError {
                            button: 1,
                            gesture: Gesture::DoublePress,
                            error: ComboError::NoKeys,
                        },
                    ]
                );
                assert_eq!(failures[0].to_string(), "button 0 press: \"c\" is not a valid modifier");
            }
            other => panic!("Expected InvalidBindings, got: {:?}", other),
        }
    }

    #[test]
    fn test_build_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let resolved = build(&path).unwrap();
        assert_eq!(resolved.pins, vec!["BOOT0", "D5"]);
    }

    #[test]
    fn test_build_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        match build(&path) {
            Err(PadError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_invalid_structure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "pins: []\n").unwrap();

        assert!(matches!(build(&path), Err(PadError::Invalid(_))));
    }

    #[test]
    fn test_is_python_identifier() {
        assert!(is_python_identifier("BOOT0"));
        assert!(is_python_identifier("_x"));
        assert!(!is_python_identifier("0D"));
        assert!(!is_python_identifier("D-5"));
        assert!(!is_python_identifier(""));
    }
}
