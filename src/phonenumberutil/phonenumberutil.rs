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

use std::borrow::Cow;

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    interfaces::MatcherApi,
    phonenumberutil::{
        enums::ParseResult,
        errors::{MetadataError, NotANumberError, ParseError},
        helper_constants::{
            MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN,
            MIN_LENGTH_FOR_NSN,
        },
        helper_functions::{
            apply_transform_rule, last_group_captured, load_compiled_metadata, normalize_helper,
        },
        helper_types::{ParseOptions, PhoneNumberWithCallingCode},
        metadata_registry::{CountryMetadata, MetadataRegistry},
    },
    proto_gen::phonemetadata::PhoneMetadataCollection,
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexConsume,
};

use log::{error, trace, warn};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// Calling code and region lookups over the loaded metadata.
    registry: MetadataRegistry,
}

impl PhoneNumberUtil {
    /// Builds a parser over the metadata compiled into the crate.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in metadata is malformed, which indicates a
    /// library bug.
    pub fn new() -> Self {
        let metadata_collection = match load_compiled_metadata() {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in metadata: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(metadata) => metadata,
        };
        match Self::new_for_metadata(metadata_collection) {
            Err(err) => {
                let err_message = format!("Compiled-in metadata is invalid: {}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(instance) => instance,
        }
    }

    /// Builds a parser over a caller supplied metadata collection. Every
    /// pattern is compiled here, once.
    pub fn new_for_metadata(
        metadata_collection: PhoneMetadataCollection,
    ) -> std::result::Result<Self, MetadataError> {
        let reg_exps = PhoneNumberRegExpsAndMappings::new();
        let registry = MetadataRegistry::new(metadata_collection, &reg_exps.regexp_cache)?;
        Ok(Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps,
            registry,
        })
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.registry.regions()
    }

    /// Calling codes in ascending string order.
    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = &str> {
        self.registry.calling_codes()
    }

    /// Regions sharing the calling code, the one holding the main metadata
    /// first.
    pub fn get_region_codes_for_country_calling_code(&self, calling_code: &str) -> Option<&[String]> {
        self.registry.get_region_codes_for_country_calling_code(calling_code)
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&CountryMetadata> {
        self.registry.get_metadata_for_region(region_code)
    }

    pub fn get_country_calling_code_for_region(&self, region_code: &str) -> Option<&str> {
        self.registry
            .get_metadata_for_region(region_code)
            .map(|metadata| metadata.calling_code())
            .or_else(|| {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                None
            })
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii, arabic-indic and eastern-arabic numerals to
    /// European numerals, and strips everything else.
    pub fn normalize(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.digit_mappings, phone_number)
    }

    /// Attempts to extract a possible number from the string passed in. Drops
    /// everything before the first plus sign or digit and every trailing
    /// character that is not a digit. Returns an empty string when no number
    /// start is found.
    pub fn extract_possible_number<'a>(&self, phone_number: &'a str) -> &'a str {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            trace!("Number '{}' has no valid start character", phone_number);
            return "";
        };
        let number = &phone_number[start.start()..];
        match self.reg_exps.unwanted_end_char_pattern.find(number) {
            Some(trailing) => &number[..trailing.start()],
            None => number,
        }
    }

    /// Tries to extract a country calling code from a number.
    ///
    /// Numbers without a leading plus sign are returned unchanged, without a
    /// calling code. For international numbers the digits after the plus
    /// signs are normalized and the calling code is looked up 1 to 3 digits
    /// at a time. Calling codes are prefix free, so the first hit is the
    /// only possible one.
    pub fn extract_country_phone_code<'a>(
        &self,
        phone_number: &'a str,
    ) -> Result<PhoneNumberWithCallingCode<'a>> {
        if phone_number.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let Some(plus_signs) = self.reg_exps.leading_plus_chars_pattern.find(phone_number) else {
            return Ok(PhoneNumberWithCallingCode::new(None, Cow::Borrowed(phone_number)));
        };

        let digits = self.normalize(&phone_number[plus_signs.end()..]);
        if digits.is_empty() {
            return Err(NotANumberError::NoDigitsAfterPlus.into());
        }
        // Country codes do not begin with a '0'.
        if digits.starts_with('0') {
            return Err(NotANumberError::LeadingZeroAfterPlus.into());
        }

        let max_length = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        let Some(length) = (1..=max_length).find(|&length| self.registry.has_calling_code(&digits[..length]))
        else {
            trace!("No calling code found at the start of '{}'", digits);
            return Err(ParseError::InvalidCountryCode);
        };

        let mut calling_code = digits;
        let national_number = calling_code.split_off(length);
        Ok(PhoneNumberWithCallingCode::new(Some(calling_code), Cow::Owned(national_number)))
    }

    /// Formatting and parsing information for regions which share a country
    /// calling code is contained by only one region. For NANPA it is `US`,
    /// for the calling code 7 it is `RU`.
    pub fn get_metadata_by_country_phone_code(&self, calling_code: &str) -> Option<&CountryMetadata> {
        self.registry
            .get_region_codes_for_country_calling_code(calling_code)
            .and_then(|region_codes| region_codes.first())
            .and_then(|region_code| self.registry.get_metadata_for_region(region_code))
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided. When the prefix pattern captured groups and the region has a
    /// transform rule, the prefix is replaced by the expanded rule instead.
    ///
    /// A number that matched the national number pattern before stripping is
    /// never turned into one that doesn't: in that case it is returned as is.
    pub fn strip_national_prefix<'a>(
        &self,
        phone_number: &'a str,
        metadata: &CountryMetadata,
    ) -> Cow<'a, str> {
        if phone_number.is_empty() {
            return Cow::Borrowed(phone_number);
        }
        let Some(national_prefix_pattern) = metadata.national_prefix_for_parsing() else {
            return Cow::Borrowed(phone_number);
        };
        let Some(captures) = national_prefix_pattern.captures_start(phone_number) else {
            return Cow::Borrowed(phone_number);
        };
        let prefix_end = captures.get(0).map_or(0, |prefix| prefix.end());
        let rest = &phone_number[prefix_end..];

        let national_significant_number = match metadata.national_prefix_transform_rule() {
            Some(transform_rule) if last_group_captured(&captures) => {
                let mut transformed = apply_transform_rule(transform_rule, &captures);
                transformed.push_str(rest);
                Cow::Owned(transformed)
            }
            _ => Cow::Borrowed(rest),
        };

        if self.matcher_api.match_national_number(phone_number, metadata)
            && !self.matcher_api.match_national_number(&national_significant_number, metadata)
        {
            trace!(
                "Keeping '{}': stripping the national prefix of {} would leave invalid '{}'",
                phone_number,
                metadata.id(),
                national_significant_number
            );
            return Cow::Borrowed(phone_number);
        }
        national_significant_number
    }

    /// Picks the region a national number belongs to among the regions using
    /// the calling code. Regions are tried in registry order; a region with
    /// leading digits accepts numbers starting with them, any other region
    /// accepts numbers matching its national number pattern.
    pub fn find_country_code(&self, calling_code: Option<&str>, national_number: &str) -> Option<&str> {
        let region_codes = self.registry.get_region_codes_for_country_calling_code(calling_code?)?;

        for region_code in region_codes {
            // Metadata cannot be missing because the region codes come from the
            // country calling code map.
            let Some(metadata) = self.registry.get_metadata_for_region(region_code) else {
                continue;
            };
            let accepted = if metadata.leading_digits().is_some() {
                !national_number.is_empty()
                    && self.matcher_api.match_leading_digits(national_number, metadata)
            } else {
                self.is_national_phone_number(national_number, metadata)
            };
            if accepted {
                trace!("Number '{}' belongs to {}", national_number, region_code);
                return Some(region_code);
            }
        }
        None
    }

    pub fn is_national_phone_number(&self, national_number: &str, metadata: &CountryMetadata) -> bool {
        if national_number.is_empty() {
            return false;
        }
        self.matcher_api.match_national_number(national_number, metadata)
    }

    /// Parses free-form text into a country and a national significant
    /// number.
    ///
    /// `options` is either `ParseOptions` or a bare region id, which
    /// restricts parsing to that region.
    ///
    /// ```
    /// use phoneparse::{PHONE_NUMBER_UTIL, ParseOptions, ParseResult};
    ///
    /// let result = PHONE_NUMBER_UTIL.parse("call me at +1 415 555 2671", ParseOptions::default());
    /// assert_eq!(
    ///     result,
    ///     ParseResult::Resolved { country: "US".to_owned(), nsn: "4155552671".to_owned() }
    /// );
    /// assert_eq!(PHONE_NUMBER_UTIL.parse("+1 415 555 2671", "GB"), ParseResult::NotFound);
    /// ```
    pub fn parse(&self, text: &str, options: impl Into<ParseOptions>) -> ParseResult {
        let options = options.into();
        match self.parse_helper(text, &options) {
            Ok(result) => result,
            Err(err) => {
                trace!("Could not parse '{}': {}", text, err);
                ParseResult::NotFound
            }
        }
    }

    fn parse_helper(&self, text: &str, options: &ParseOptions) -> Result<ParseResult> {
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        // Length in UTF-16 code units, so characters outside the BMP count twice.
        if text.encode_utf16().count() > MAX_INPUT_STRING_LENGTH {
            return Err(ParseError::InputTooLong);
        }

        let text = self.extract_possible_number(text);
        if text.is_empty() {
            return Err(NotANumberError::NoValidStartCharacter.into());
        }

        let PhoneNumberWithCallingCode { calling_code, phone_number } =
            self.extract_country_phone_code(text)?;
        let restrict = options.country.restrict.as_deref();

        let (country, metadata, number) = if let Some(calling_code) = calling_code.as_deref() {
            if let Some(restrict) = restrict {
                let restricted_calling_code = self
                    .get_country_calling_code_for_region(restrict)
                    .ok_or_else(|| ParseError::UnknownRegion(restrict.to_owned()))?;
                if restricted_calling_code != calling_code {
                    return Err(ParseError::RestrictedCountryMismatch {
                        restricted: restrict.to_owned(),
                        found: fast_cat::concat_str!("+", calling_code),
                    });
                }
            }
            let metadata = self
                .get_metadata_by_country_phone_code(calling_code)
                .ok_or(ParseError::InvalidCountryCode)?;
            (None, metadata, phone_number)
        } else {
            // The default country wins over the restriction and is adopted
            // as is.
            let Some(region_code) = options.country.default.as_deref().or(restrict) else {
                return Err(ParseError::MissingCountry);
            };
            let metadata = self
                .get_metadata_for_region(region_code)
                .ok_or_else(|| {
                    warn!("Invalid or unknown region code ({}) provided.", region_code);
                    ParseError::UnknownRegion(region_code.to_owned())
                })?;
            // No calling code was stripped, so take the digits of the whole
            // extracted text.
            (Some(metadata.id()), metadata, Cow::Owned(self.normalize(text)))
        };

        // Sanity check
        if number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn);
        }

        let national_number = self.strip_national_prefix(&number, metadata);

        let country = match country {
            Some(country) => Some(country),
            None => {
                let resolved = self.find_country_code(calling_code.as_deref(), &national_number);
                if let Some(restrict) = restrict {
                    if resolved != Some(restrict) {
                        return Err(ParseError::RestrictedCountryMismatch {
                            restricted: restrict.to_owned(),
                            found: resolved.unwrap_or("no region").to_owned(),
                        });
                    }
                }
                resolved
            }
        };

        // National significant numbers can be longer than the ITU maximum
        // (e.g. in Germany). Anything outside of the bounds is reported as a
        // partial match carrying the digits before prefix stripping.
        if !(MIN_LENGTH_FOR_NSN..=MAX_LENGTH_FOR_NSN).contains(&national_number.len()) {
            trace!(
                "National number '{}' has implausible length {}",
                national_number,
                national_number.len()
            );
            return Ok(ParseResult::PartialMatch { raw: number.to_string() });
        }

        let Some(country) = country else {
            return Err(ParseError::CountryNotResolved(calling_code.unwrap_or_default()));
        };
        let country_metadata = self
            .get_metadata_for_region(country)
            .ok_or_else(|| ParseError::UnknownRegion(country.to_owned()))?;
        if !self.is_national_phone_number(&national_number, country_metadata) {
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        Ok(ParseResult::Resolved {
            country: country.to_owned(),
            nsn: national_number.into_owned(),
        })
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
