use crate::phonenumberutil::CountryMetadata;

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
  /// Returns whether the given national number (a string containing only decimal
  /// digits) matches the national number pattern of the region in full.
  fn match_national_number(&self, number: &str, metadata: &CountryMetadata) -> bool;

  /// Returns whether the given national number starts with the leading digits
  /// of the region. Regions without leading digits never match.
  fn match_leading_digits(&self, number: &str, metadata: &CountryMetadata) -> bool;
}
