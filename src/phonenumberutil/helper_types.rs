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

/// Number text split into an optional calling code and the rest.
///
/// Without a leading plus sign the text is kept as given (`calling_code` is
/// `None`). With one, `phone_number` holds the normalized digits following
/// the calling code.
#[derive(Debug, PartialEq)]
pub struct PhoneNumberWithCallingCode<'a> {
    pub calling_code: Option<String>,
    pub phone_number: Cow<'a, str>,
}

impl<'a> PhoneNumberWithCallingCode<'a> {
    pub fn new(calling_code: Option<String>, phone_number: Cow<'a, str>) -> Self {
        Self { calling_code, phone_number }
    }
}

/// Country related parsing options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryOptions {
    /// Only numbers of this region are accepted.
    pub restrict: Option<String>,
    /// Region assumed for numbers written without an international prefix.
    pub default: Option<String>,
}

/// Options for `PhoneNumberUtil::parse`.
///
/// A bare region id converts into options restricting parsing to that
/// region:
///
/// ```
/// use phoneparse::ParseOptions;
///
/// assert_eq!(ParseOptions::from("US"), ParseOptions::restrict("US"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub country: CountryOptions,
}

impl ParseOptions {
    pub fn restrict(region_code: impl Into<String>) -> Self {
        Self {
            country: CountryOptions { restrict: Some(region_code.into()), default: None },
        }
    }

    pub fn default_country(region_code: impl Into<String>) -> Self {
        Self {
            country: CountryOptions { restrict: None, default: Some(region_code.into()) },
        }
    }

    pub fn with_restrict(mut self, region_code: impl Into<String>) -> Self {
        self.country.restrict = Some(region_code.into());
        self
    }

    pub fn with_default_country(mut self, region_code: impl Into<String>) -> Self {
        self.country.default = Some(region_code.into());
        self
    }
}

impl From<&str> for ParseOptions {
    fn from(region_code: &str) -> Self {
        Self::restrict(region_code)
    }
}

impl From<String> for ParseOptions {
    fn from(region_code: String) -> Self {
        Self::restrict(region_code)
    }
}

impl From<Option<&str>> for ParseOptions {
    fn from(region_code: Option<&str>) -> Self {
        region_code.map(Self::restrict).unwrap_or_default()
    }
}
