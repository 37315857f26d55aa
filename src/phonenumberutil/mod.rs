mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
mod metadata_registry;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use enums::{DigitScript, ParseResult};
pub use helper_constants::{MAX_INPUT_STRING_LENGTH, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN};
pub use helper_functions::load_metadata_from_str;
pub use helper_types::{CountryOptions, ParseOptions, PhoneNumberWithCallingCode};
pub use metadata_registry::CountryMetadata;
pub use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Parser over the metadata compiled into the crate, built on first use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});

/// Parses `text` with the compiled-in metadata. See [`PhoneNumberUtil::parse`].
pub fn parse(text: &str, options: impl Into<ParseOptions>) -> ParseResult {
    PHONE_NUMBER_UTIL.parse(text, options)
}
