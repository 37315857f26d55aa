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


use log::trace;
use super::regex_util::{RegexFullMatch, RegexConsume};

use crate::{interfaces, phonenumberutil::CountryMetadata};

/// Matches numbers against the patterns compiled when the metadata was
/// loaded.
pub struct RegexBasedMatcher;

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(&self, number: &str, metadata: &CountryMetadata) -> bool {
        // We don't want to consider it a match when matching non-empty input
        // against an empty pattern.
        let Some(national_number_pattern) = metadata.national_number_pattern() else {
            trace!("Region {} has no national number pattern", metadata.id());
            return false;
        };
        national_number_pattern.full_match(number)
    }

    fn match_leading_digits(&self, number: &str, metadata: &CountryMetadata) -> bool {
        metadata
            .leading_digits()
            .is_some_and(|leading_digits| leading_digits.matches_start(number))
    }
}
