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

use strum::EnumIter;

/// Outcome of parsing a piece of text as a phone number.
///
/// Parsing either fails, resolves both the country and the national
/// significant number, or stops in between: the calling code and national
/// prefix were handled, but the resulting national number has an implausible
/// length. Callers get the reason for a failure only through the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseResult {
    /// **Nothing usable was found.**
    /// The text is empty or too long, holds no number, carries an unknown
    /// calling code, violates the country restriction, or does not match the
    /// grammar of the country it resolved to.
    NotFound,
    /// **Partial match.**
    /// The national significant number left after stripping the national
    /// prefix is shorter than 2 or longer than 17 digits. `raw` holds the
    /// digits as they were *before* the national prefix was stripped.
    PartialMatch { raw: String },
    /// **Fully resolved number.**
    /// `country` is the region id from the metadata, `nsn` the national
    /// significant number, e.g. `US` and `4155552671` for `+1 415 555 2671`.
    Resolved { country: String, nsn: String },
}

impl ParseResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ParseResult::Resolved { .. })
    }

    /// Region id of a resolved number.
    pub fn country(&self) -> Option<&str> {
        match self {
            ParseResult::Resolved { country, .. } => Some(country),
            _ => None,
        }
    }

    /// Digits of the number, if any were kept. For a partial match these are
    /// the digits before national prefix stripping.
    pub fn phone(&self) -> Option<&str> {
        match self {
            ParseResult::NotFound => None,
            ParseResult::PartialMatch { raw } => Some(raw),
            ParseResult::Resolved { nsn, .. } => Some(nsn),
        }
    }
}

/// Digit scripts accepted in phone numbers. Each script stores its ten digits
/// as consecutive code points.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitScript {
    /// `0`-`9`
    Ascii,
    /// U+FF10 - U+FF19
    Fullwidth,
    /// U+0660 - U+0669
    ArabicIndic,
    /// U+06F0 - U+06F9
    EasternArabic,
}

impl DigitScript {
    pub fn zero(&self) -> char {
        match self {
            DigitScript::Ascii => '0',
            DigitScript::Fullwidth => '\u{FF10}',
            DigitScript::ArabicIndic => '\u{0660}',
            DigitScript::EasternArabic => '\u{06F0}',
        }
    }

    /// Iterates over `(digit in this script, ASCII digit)` pairs.
    pub fn digits(&self) -> impl Iterator<Item = (char, char)> {
        let zero = self.zero() as u32;
        ('0'..='9').filter_map(move |ascii| {
            char::from_u32(zero + (ascii as u32 - '0' as u32)).map(|digit| (digit, ascii))
        })
    }
}
