mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod generated;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use phonenumberutil::{
    errors::{MetadataError, NotANumberError, ParseError},
    load_metadata_from_str, parse, CountryMetadata, CountryOptions, DigitScript, ParseOptions,
    ParseResult, PhoneNumberUtil, PhoneNumberWithCallingCode, MAX_INPUT_STRING_LENGTH,
    MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PHONE_NUMBER_UTIL,
};
pub use proto_gen::phonemetadata::{
    NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc,
};
pub use regexp_cache::InvalidRegexError;
