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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Shares compiled patterns between metadata records. Many regions use the
/// same national prefix or leading digits pattern, so each distinct pattern
/// is compiled once while the metadata is loaded.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    #[cfg(test)]
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                regex::Regex::new(pattern).map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    /// Compiled form of `pattern` that only matches at the start of the input.
    pub fn get_prefix_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")"))
    }

    /// Compiled form of `pattern` that only matches the whole input.
    pub fn get_full_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")$"))
    }
}
