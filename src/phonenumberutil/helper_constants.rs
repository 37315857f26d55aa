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

// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Calling codes are 1 to 3 digits long, so anything above this can't be one.
pub const MAX_COUNTRY_CODE: i32 = 999;
// We don't allow input strings for parsing to be longer than 250 chars. This
// prevents malicious input from consuming CPU.
pub const MAX_INPUT_STRING_LENGTH: usize = 250;

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

// Digits accepted in phone numbers: ASCII, fullwidth, Arabic-Indic and
// Eastern-Arabic. Written as a character class body.
pub const VALID_DIGITS: &'static str = "0-9\u{FF10}-\u{FF19}\u{0660}-\u{0669}\u{06F0}-\u{06F9}";

/// Marker for capture group references inside a national prefix transform rule.
pub const GROUP_REFERENCE_SIGN: char = '$';
