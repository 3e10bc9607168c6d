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

use std::collections::HashMap;

use crate::core::{
    keycode_name,
    tables::{MODIFIERS, SPECIAL_KEYS, SYMBOLS},
    types::{classify, vocabulary, KeyClass},
};

#[test]
fn test_classify() {
    assert_eq!(classify("GUI"), Some(KeyClass::Modifier));
    assert_eq!(classify("PAGE_DOWN"), Some(KeyClass::Special));
    assert_eq!(classify("Q"), Some(KeyClass::Letter));
    assert_eq!(classify("SEVEN"), Some(KeyClass::Number));
    assert_eq!(classify("GRAVE_ACCENT"), Some(KeyClass::Symbol));
    assert_eq!(classify("q"), None);
    assert_eq!(classify("HYPER"), None);
}

#[test]
fn test_key_class_display() {
    assert_eq!(format!("{}", KeyClass::Modifier), "modifier");
    assert_eq!(format!("{}", KeyClass::Symbol), "symbol");
}

#[test]
fn test_vocabulary_has_no_duplicates() {
    let names = vocabulary();
    let mut seen = std::collections::HashSet::new();
    for name in &names {
        assert!(seen.insert(*name), "'{}' listed twice", name);
    }

    // 4 modifiers, 31 special keys, 26 letters, 10 numbers, 11 symbols
    assert_eq!(names.len(), 4 + 31 + 26 + 10 + 11);
}

#[test]
fn test_groups_are_disjoint() {
    let groups: [Vec<&str>; 3] = [
        MODIFIERS.iter().map(|(_, n)| *n).collect(),
        SPECIAL_KEYS.iter().map(|(_, n)| *n).collect(),
        SYMBOLS.iter().map(|(_, n)| *n).collect(),
    ];

    for (i, a) in groups.iter().enumerate() {
        for b in groups.iter().skip(i + 1) {
            assert!(a.iter().all(|name| !b.contains(name)));
        }
    }
}

#[test]
fn test_every_resolved_name_is_in_vocabulary() {
    let tokens = MODIFIERS
        .iter()
        .chain(SPECIAL_KEYS)
        .map(|(token, _)| token.to_string())
        .chain(('a'..='z').map(|c| c.to_string()))
        .chain(('0'..='9').map(|c| c.to_string()))
        .chain(SYMBOLS.iter().map(|(c, _)| c.to_string()));

    let vocab = vocabulary();
    for token in tokens {
        let name = keycode_name(&token).unwrap();
        assert!(vocab.contains(&name), "'{}' resolved outside vocabulary", token);
        assert!(classify(name).is_some());
    }
}

#[test]
fn test_special_key_aliases_are_spelling_pairs() {
    let mut by_name: HashMap<&str, Vec<&str>> = HashMap::new();
    for (token, name) in SPECIAL_KEYS {
        by_name.entry(*name).or_default().push(*token);
    }

    let aliased: Vec<_> = by_name.iter().filter(|(_, tokens)| tokens.len() > 1).collect();
    for (name, tokens) in aliased {
        assert!(tokens.len() == 2, "{} has {} spellings", name, tokens.len());
    }
}
