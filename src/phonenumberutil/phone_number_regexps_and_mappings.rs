// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::collections::HashMap;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::{phonenumberutil::{enums::DigitScript, helper_constants::{PLUS_CHARS, VALID_DIGITS}}, regexp_cache::RegexCache};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Compiled metadata patterns, shared between regions using the same one.
    pub regexp_cache: RegexCache,

    /// These mappings map a character (key) to a specific digit that should
    /// replace it for normalization purposes. Non-European digits that may be
    /// used in phone numbers are mapped to a European equivalent.
    pub digit_mappings: HashMap<char, char>,

    /// Regular expression of acceptable characters that may start a phone number
    /// for the purposes of parsing. This allows us to strip away meaningless
    /// prefixes to phone numbers that may be mistakenly given to us. This consists
    /// of digits and the plus symbol. It does not include other punctuation, as
    /// this will be stripped later during parsing and is of no information value
    /// when parsing a number.
    /// This corresponds to VALID_START_CHAR in the java version.
    pub valid_start_char_pattern: Regex,

    /// Regular expression of trailing characters that we want to remove: every
    /// character that is not an accepted digit.
    /// This corresponds to UNWANTED_END_CHAR_PATTERN in the java version.
    pub unwanted_end_char_pattern: Regex,

    /// Run of plus signs at the start of a number written in international
    /// format.
    pub leading_plus_chars_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        let mut digit_map = HashMap::with_capacity(40);
        for script in DigitScript::iter() {
            digit_map.extend(script.digits());
        }
        self.digit_mappings = digit_map;
    }

    pub fn new() -> Self {
        let mut instance = Self {
            regexp_cache: RegexCache::with_capacity(128),
            digit_mappings: Default::default(),
            valid_start_char_pattern: Regex::new(&format!("[{}{}]", PLUS_CHARS, VALID_DIGITS)).unwrap(),
            unwanted_end_char_pattern: Regex::new(&format!("[^{}]+$", VALID_DIGITS)).unwrap(),
            leading_plus_chars_pattern: Regex::new(&format!("^[{}]+", PLUS_CHARS)).unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::PhoneNumberRegExpsAndMappings::new();
    }

    #[test]
    fn digit_mappings_cover_all_scripts() {
        let reg_exps = super::PhoneNumberRegExpsAndMappings::new();
        assert_eq!(reg_exps.digit_mappings.len(), 40);
        assert_eq!(reg_exps.digit_mappings.get(&'7'), Some(&'7'));
        assert_eq!(reg_exps.digit_mappings.get(&'\u{FF19}'), Some(&'9'));
        assert_eq!(reg_exps.digit_mappings.get(&'\u{0663}'), Some(&'3'));
        assert_eq!(reg_exps.digit_mappings.get(&'\u{06F0}'), Some(&'0'));
        // Devanagari digits are not accepted
        assert_eq!(reg_exps.digit_mappings.get(&'\u{0966}'), None);
    }

    #[test]
    fn start_and_end_patterns() {
        let reg_exps = super::PhoneNumberRegExpsAndMappings::new();
        assert_eq!(reg_exps.valid_start_char_pattern.find("tel: \u{FF0B}1").map(|m| m.start()), Some(5));
        assert_eq!(reg_exps.unwanted_end_char_pattern.find("12 ext#").map(|m| m.start()), Some(2));
        assert_eq!(reg_exps.leading_plus_chars_pattern.find("++1").map(|m| m.end()), Some(2));
    }
}
