// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
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

use regex::Captures;

use crate::{generated::metadata::METADATA, proto_gen::phonemetadata::PhoneMetadataCollection};

use super::{errors::MetadataError, helper_constants::GROUP_REFERENCE_SIGN};

/// Loads metadata from the text-format collection compiled into the crate.
pub(super) fn load_compiled_metadata() -> Result<PhoneMetadataCollection, MetadataError> {
    load_metadata_from_str(METADATA)
}

/// Parses a `PhoneMetadataCollection` written in protobuf text format.
pub fn load_metadata_from_str(text: &str) -> Result<PhoneMetadataCollection, MetadataError> {
    protobuf::text_format::parse_from_str::<PhoneMetadataCollection>(text)
        .map_err(|err| MetadataError::Malformed(format!("{:?}", err)))
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char) {
            normalized_number.push(*replacement);
        }
        // Otherwise we remove this character.
    }
    normalized_number
}

/// Expands a national prefix transform rule such as `9$1` with the groups
/// captured by the national prefix pattern.
///
/// `$1` to `$9` refer to capture groups; a group that did not participate in
/// the match expands to nothing. `$$` is a literal dollar sign. A `$` that is
/// not followed by a digit or another `$` is copied as is.
pub(super) fn apply_transform_rule(transform_rule: &str, captures: &Captures<'_>) -> String {
    let mut result = String::with_capacity(transform_rule.len() + captures.get(0).map_or(0, |m| m.len()));
    let mut chars = transform_rule.chars().peekable();
    while let Some(c) = chars.next() {
        if c != GROUP_REFERENCE_SIGN {
            result.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(GROUP_REFERENCE_SIGN) => {
                chars.next();
                result.push(GROUP_REFERENCE_SIGN);
            }
            Some(digit @ '1'..='9') => {
                chars.next();
                let group = digit as usize - '0' as usize;
                if let Some(matched) = captures.get(group) {
                    result.push_str(matched.as_str());
                }
            }
            _ => result.push(c),
        }
    }
    result
}

/// `true` if the last capture group of the national prefix pattern captured
/// something. Without such a capture there is nothing for a transform rule to
/// work with and the prefix is simply removed.
pub(super) fn last_group_captured(captures: &Captures<'_>) -> bool {
    let group_count = captures.len();
    if group_count < 2 {
        return false;
    }
    captures
        .get(group_count - 1)
        .is_some_and(|matched| !matched.as_str().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use regex::Regex;

    use super::{apply_transform_rule, last_group_captured, load_metadata_from_str, normalize_helper};

    #[test]
    fn normalize_drops_unknown_chars() {
        let mut mappings = HashMap::new();
        mappings.insert('1', '1');
        mappings.insert('\u{FF12}', '2');
        assert_eq!(normalize_helper(&mappings, "a1-\u{FF12} 3"), "12");
        assert_eq!(normalize_helper(&mappings, ""), "");
    }

    #[test]
    fn transform_rule_substitution() {
        let pattern = Regex::new(r"^(?:0?(?:(11|343)15)?)").unwrap();
        let captures = pattern.captures("03431555").unwrap();
        assert_eq!(apply_transform_rule("9$1", &captures), "9343");
        assert_eq!(apply_transform_rule("$1-$1", &captures), "343-343");
        assert_eq!(apply_transform_rule("$$1", &captures), "$1");
        assert_eq!(apply_transform_rule("$x", &captures), "$x");
        assert_eq!(apply_transform_rule("9$", &captures), "9$");
        // group 2 does not exist
        assert_eq!(apply_transform_rule("9$2", &captures), "9");

        let two_groups = Regex::new(r"^(?:0(1[245])(\d{4}))").unwrap();
        let captures = two_groups.captures("0151234").unwrap();
        assert_eq!(apply_transform_rule("$2", &captures), "1234");
        assert_eq!(apply_transform_rule("$2$1", &captures), "123415");
    }

    #[test]
    fn last_group() {
        let pattern = Regex::new(r"^(?:0?(?:(11)15)?)").unwrap();
        assert!(last_group_captured(&pattern.captures("01115").unwrap()));
        assert!(!last_group_captured(&pattern.captures("0123").unwrap()));

        let no_groups = Regex::new(r"^(?:0)").unwrap();
        assert!(!last_group_captured(&no_groups.captures("0123").unwrap()));

        let empty_group = Regex::new(r"^(?:0(\d*))").unwrap();
        assert!(!last_group_captured(&empty_group.captures("0").unwrap()));
    }

    #[test]
    fn metadata_text_errors() {
        assert!(load_metadata_from_str("metadata { id: ").is_err());
        assert!(load_metadata_from_str("metadata { unknown_field: 1 }").is_err());
        let collection = load_metadata_from_str(r#"metadata { id: "AA" country_code: 1 }"#).unwrap();
        assert_eq!(collection.metadata.len(), 1);
    }
}
