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

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use log::trace;
use regex::Regex;

use crate::{
    phonenumberutil::{errors::MetadataError, helper_constants::MAX_COUNTRY_CODE},
    proto_gen::phonemetadata::{PhoneMetadata, PhoneMetadataCollection},
    regexp_cache::RegexCache,
};

/// Metadata of one region together with its patterns compiled for parsing.
#[derive(Debug)]
pub struct CountryMetadata {
    metadata: PhoneMetadata,
    calling_code: String,
    /// `None` when the region has no national number pattern; such a region
    /// never accepts a number.
    national_number_pattern: Option<Arc<Regex>>,
    national_prefix_for_parsing: Option<Arc<Regex>>,
    leading_digits: Option<Arc<Regex>>,
}

impl CountryMetadata {
    fn compile(metadata: PhoneMetadata, cache: &RegexCache) -> Result<Self, MetadataError> {
        let country_code = metadata.country_code();
        if !(1..=MAX_COUNTRY_CODE).contains(&country_code) {
            return Err(MetadataError::InvalidCountryCode {
                region: metadata.id().to_owned(),
                country_code,
            });
        }
        let mut buf = itoa::Buffer::new();
        let calling_code = buf.format(country_code).to_owned();

        let national_number_pattern = non_empty(metadata.general_desc.national_number_pattern())
            .map(|pattern| cache.get_full_regex(pattern))
            .transpose()?;
        let national_prefix_for_parsing = non_empty(metadata.national_prefix_for_parsing())
            .map(|pattern| cache.get_prefix_regex(pattern))
            .transpose()?;
        let leading_digits = non_empty(metadata.leading_digits())
            .map(|pattern| cache.get_prefix_regex(pattern))
            .transpose()?;

        Ok(Self {
            metadata,
            calling_code,
            national_number_pattern,
            national_prefix_for_parsing,
            leading_digits,
        })
    }

    pub fn id(&self) -> &str {
        self.metadata.id()
    }

    /// Country calling code as decimal digits, e.g. `"44"`.
    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    /// Raw metadata record, including the formatting data the parser ignores.
    pub fn metadata(&self) -> &PhoneMetadata {
        &self.metadata
    }

    pub fn national_number_pattern(&self) -> Option<&Regex> {
        self.national_number_pattern.as_deref()
    }

    pub fn national_prefix_for_parsing(&self) -> Option<&Regex> {
        self.national_prefix_for_parsing.as_deref()
    }

    pub fn national_prefix_transform_rule(&self) -> Option<&str> {
        non_empty(self.metadata.national_prefix_transform_rule())
    }

    pub fn leading_digits(&self) -> Option<&Regex> {
        self.leading_digits.as_deref()
    }

    pub fn example_number(&self) -> Option<&str> {
        non_empty(self.metadata.general_desc.example_number())
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Lookup tables built from a metadata collection: calling code to the
/// regions using it, and region to its compiled metadata.
pub(super) struct MetadataRegistry {
    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. The region with
    /// the main metadata for the code goes first (1 is mapped to "US" first, 7
    /// to "RU"), the rest keep their order from the collection. This is
    /// implemented as a vector sorted by calling code to achieve better
    /// performance.
    country_calling_code_to_region_code_map: Vec<(String, Vec<String>)>,

    /// A mapping from a region code to the PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, CountryMetadata>,
}

impl MetadataRegistry {
    pub fn new(collection: PhoneMetadataCollection, cache: &RegexCache) -> Result<Self, MetadataError> {
        let mut region_to_metadata_map = HashMap::with_capacity(collection.metadata.len());
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<String, VecDeque<String>>::new();

        for metadata in collection.metadata {
            let main_country_for_code = metadata.main_country_for_code();
            let country_metadata = CountryMetadata::compile(metadata, cache)?;
            let region_code = country_metadata.id().to_owned();
            if region_to_metadata_map.contains_key(&region_code) {
                return Err(MetadataError::DuplicateRegion(region_code));
            }

            let regions = country_calling_code_to_region_map
                .entry(country_metadata.calling_code().to_owned())
                .or_default();
            if main_country_for_code {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            region_to_metadata_map.insert(region_code, country_metadata);
        }

        let mut country_calling_code_to_region_code_map: Vec<(String, Vec<String>)> =
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions)))
                .collect();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by(|(a, _), (b, _)| a.cmp(b));
        check_prefix_free(&country_calling_code_to_region_code_map)?;

        trace!(
            "Loaded metadata for {} regions and {} calling codes ({} distinct patterns)",
            region_to_metadata_map.len(),
            country_calling_code_to_region_code_map.len(),
            cache.len()
        );

        Ok(Self {
            country_calling_code_to_region_code_map,
            region_to_metadata_map,
        })
    }

    /// Regions using the calling code, representative region first.
    pub fn get_region_codes_for_country_calling_code(&self, calling_code: &str) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by(|(code, _)| code.as_str().cmp(calling_code))
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    pub fn has_calling_code(&self, calling_code: &str) -> bool {
        self.get_region_codes_for_country_calling_code(calling_code).is_some()
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&CountryMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    pub fn calling_codes(&self) -> impl Iterator<Item = &str> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| code.as_str())
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(|k| k.as_str())
    }
}

/// In a sorted list a code is followed by every code it is a prefix of, so
/// checking neighbours is enough.
fn check_prefix_free(sorted_codes: &[(String, Vec<String>)]) -> Result<(), MetadataError> {
    for pair in sorted_codes.windows(2) {
        let (shorter, longer) = (&pair[0].0, &pair[1].0);
        if longer.starts_with(shorter.as_str()) {
            return Err(MetadataError::CallingCodeNotPrefixFree {
                shorter: shorter.clone(),
                longer: longer.clone(),
            });
        }
    }
    Ok(())
}
