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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

use super::helper_constants::MAX_INPUT_STRING_LENGTH;

/// Reasons a text was rejected. `parse` reports all of them as
/// `ParseResult::NotFound`; the variant only shows up in the trace log.
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Input is longer than {} characters", MAX_INPUT_STRING_LENGTH)]
    InputTooLong,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    #[error("Invalid country code")]
    InvalidCountryCode, // INVALID_COUNTRY_CODE in the java version.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
    #[error("Number belongs to {found}, but parsing is restricted to {restricted}")]
    RestrictedCountryMismatch { restricted: String, found: String },
    #[error("No default or restricted country given for a number without calling code")]
    MissingCountry,
    #[error("Too short Nsn")]
    TooShortNsn,
    #[error("No region with calling code {0} accepts the number")]
    CountryNotResolved(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum NotANumberError {
    #[error("No valid start character found")]
    NoValidStartCharacter,
    #[error("No digits after the plus sign")]
    NoDigitsAfterPlus,
    #[error("Calling code can't start with zero")]
    LeadingZeroAfterPlus,
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
}

/// Errors raised while turning a metadata collection into a registry.
#[derive(Debug, PartialEq, Error)]
pub enum MetadataError {
    #[error("Could not parse metadata: {0}")]
    Malformed(String),
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
    #[error("Region {region} has invalid country calling code {country_code}")]
    InvalidCountryCode { region: String, country_code: i32 },
    #[error("Calling code {shorter} is a prefix of calling code {longer}")]
    CallingCodeNotPrefixFree { shorter: String, longer: String },
    #[error("Region {0} is defined more than once")]
    DuplicateRegion(String),
}
