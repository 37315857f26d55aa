use std::{collections::HashSet, thread};

use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::{parse, DigitScript, ParseOptions, ParseResult, PHONE_NUMBER_UTIL};

use super::region_code::RegionCode;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resolved(country: &str, nsn: &str) -> ParseResult {
    ParseResult::Resolved { country: country.to_owned(), nsn: nsn.to_owned() }
}

fn to_script(digits: &str, script: DigitScript) -> String {
    digits
        .chars()
        .map(|c| char::from_u32(script.zero() as u32 + (c as u32 - '0' as u32)).unwrap())
        .collect()
}

#[test]
fn documented_scenarios() {
    init_logger();
    assert_eq!(parse("+14155552671", ParseOptions::default()), resolved("US", "4155552671"));
    assert_eq!(parse("4155552671", "US"), resolved("US", "4155552671"));
    assert_eq!(parse("+12", ParseOptions::restrict("GB")), ParseResult::NotFound);
    assert_eq!(parse("", ParseOptions::default()), ParseResult::NotFound);
    assert_eq!(parse("+0123456789", ParseOptions::default()), ParseResult::NotFound);
    assert_eq!(
        parse("call me at +1 415 555 2671 thanks", ParseOptions::default()),
        resolved("US", "4155552671")
    );
}

#[test]
fn national_numbers_with_prefixes() {
    init_logger();
    let default = ParseOptions::default_country;

    assert_eq!(parse("01 23 45 67 89", default("FR")), resolved("FR", "123456789"));
    assert_eq!(parse("8 (301) 123-45-67", default("RU")), resolved("RU", "3011234567"));
    assert_eq!(parse("1 (201) 555-0123", default("US")), resolved("US", "2015550123"));
    assert_eq!(parse("011 15 2345 6789", default("AR")), resolved("AR", "91123456789"));
    assert_eq!(parse("0 15 11 98765 4321", default("BR")), resolved("BR", "11987654321"));
    assert_eq!(parse("02 1234 5678", default("IT")), resolved("IT", "0212345678"));
}

#[test]
fn international_numbers() {
    init_logger();
    let none = ParseOptions::default;

    assert_eq!(parse("+33 1 23 45 67 89", none()), resolved("FR", "123456789"));
    assert_eq!(parse("+54 9 11 2345 6789", none()), resolved("AR", "91123456789"));
    assert_eq!(parse("+81 3-1234-5678", none()), resolved("JP", "312345678"));
    assert_eq!(parse("+380 31 123 4567", none()), resolved("UA", "311234567"));
    assert_eq!(parse("+971 2 234 5678", none()), resolved("AE", "22345678"));
    // regions sharing a calling code
    assert_eq!(parse("+7 712 345 6789", none()), resolved("KZ", "7123456789"));
    assert_eq!(parse("+262 269 60 12 34", none()), resolved("YT", "269601234"));
    assert_eq!(parse("+262 262 16 12 34", none()), resolved("RE", "262161234"));
    // CA shares the grammar of US, which is tried first
    assert_eq!(parse("+1 506 234 5678", none()), resolved("US", "5062345678"));
    assert_eq!(parse("506 234 5678", RegionCode::ca()), resolved("CA", "5062345678"));
}

#[test]
fn example_numbers_round_trip() {
    init_logger();
    for region in PHONE_NUMBER_UTIL.get_supported_regions() {
        let metadata = PHONE_NUMBER_UTIL.get_metadata_for_region(region).unwrap();
        let example = metadata.example_number().expect("every region has an example number");

        assert_eq!(
            parse(example, ParseOptions::default_country(region)),
            resolved(region, example),
            "national example of {}",
            region
        );

        let international = format!("+{}{}", metadata.calling_code(), example);
        match parse(&international, ParseOptions::default()) {
            ParseResult::Resolved { country, nsn } => {
                assert_eq!(nsn, example);
                assert_eq!(
                    PHONE_NUMBER_UTIL.get_country_calling_code_for_region(&country),
                    Some(metadata.calling_code())
                );
            }
            other => panic!("{} did not resolve: {:?}", international, other),
        }
    }
}

#[test]
fn representative_region_resolves_its_example() {
    init_logger();
    for calling_code in PHONE_NUMBER_UTIL.get_supported_calling_codes() {
        let metadata = PHONE_NUMBER_UTIL
            .get_metadata_by_country_phone_code(calling_code)
            .unwrap();
        let example = metadata.example_number().unwrap();
        assert_eq!(
            parse(&format!("+{}{}", calling_code, example), ParseOptions::default()),
            resolved(metadata.id(), example)
        );
    }
}

#[test]
fn calling_codes_are_prefix_free() {
    let calling_codes = PHONE_NUMBER_UTIL.get_supported_calling_codes().collect::<Vec<_>>();
    for code in &calling_codes {
        assert!((1..=3).contains(&code.len()));
        for other in &calling_codes {
            if code != other {
                assert!(!other.starts_with(code), "{} is a prefix of {}", code, other);
            }
        }
    }
}

#[test]
fn regions_map_back_to_their_calling_code() {
    let regions = PHONE_NUMBER_UTIL.get_supported_regions().collect::<HashSet<_>>();
    let mut listed = HashSet::new();
    for calling_code in PHONE_NUMBER_UTIL.get_supported_calling_codes() {
        for region in PHONE_NUMBER_UTIL
            .get_region_codes_for_country_calling_code(calling_code)
            .unwrap()
        {
            assert_eq!(
                PHONE_NUMBER_UTIL.get_country_calling_code_for_region(region),
                Some(calling_code)
            );
            assert!(listed.insert(region.as_str()), "{} is listed twice", region);
        }
    }
    assert_eq!(listed, regions);
}

#[test]
fn same_results_from_many_threads() {
    init_logger();
    let inputs = [
        ("+7 712 345 6789", None),
        ("020 1234 5678", Some("GB")),
        ("+262 269 60 12 34", None),
        ("0343 15 555 1212", Some("AR")),
        ("+44 12", Some("US")),
    ];
    let expected = inputs
        .iter()
        .map(|(text, region)| parse(text, *region))
        .collect::<Vec<_>>();

    let handles = (0..8)
        .map(|_| {
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    for ((text, region), expected) in inputs.iter().zip(&expected) {
                        assert_eq!(&parse(text, *region), expected);
                    }
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("parser thread panicked");
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = PHONE_NUMBER_UTIL.normalize(&text);
        prop_assert!(once.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(PHONE_NUMBER_UTIL.normalize(&once), once);
    }

    #[test]
    fn digit_scripts_normalize_alike(digits in "[0-9]{0,20}") {
        for script in DigitScript::iter() {
            let written = to_script(&digits, script);
            prop_assert_eq!(PHONE_NUMBER_UTIL.normalize(&written), digits.clone());
        }
    }

    #[test]
    fn scripts_parse_alike(digits in "[0-9]{8,12}", plus in any::<bool>()) {
        let ascii = if plus { format!("+{}", digits) } else { digits.clone() };
        let expected = parse(&ascii, ParseOptions::default_country("GB"));
        for script in DigitScript::iter() {
            let written = if plus {
                format!("\u{FF0B}{}", to_script(&digits, script))
            } else {
                to_script(&digits, script)
            };
            prop_assert_eq!(parse(&written, ParseOptions::default_country("GB")), expected.clone());
        }
    }

    #[test]
    fn stripping_keeps_valid_numbers_valid(number in "[0-9]{1,17}") {
        for region in PHONE_NUMBER_UTIL.get_supported_regions() {
            let metadata = PHONE_NUMBER_UTIL.get_metadata_for_region(region).unwrap();
            if PHONE_NUMBER_UTIL.is_national_phone_number(&number, metadata) {
                let stripped = PHONE_NUMBER_UTIL.strip_national_prefix(&number, metadata);
                prop_assert!(
                    PHONE_NUMBER_UTIL.is_national_phone_number(&stripped, metadata),
                    "{} became {} in {}", number, stripped, region
                );
            }
        }
    }

    #[test]
    fn restricted_parse_stays_in_region(number in "\\+?[0-9]{2,15}") {
        for region in PHONE_NUMBER_UTIL.get_supported_regions() {
            if let ParseResult::Resolved { country, .. } = parse(&number, region) {
                prop_assert_eq!(country, region);
            }
        }
    }

    #[test]
    fn parse_results_are_well_formed(text in "\\PC{0,40}") {
        match parse(&text, ParseOptions::default_country("DE")) {
            ParseResult::NotFound => {}
            ParseResult::PartialMatch { raw } => {
                prop_assert!(!raw.is_empty());
                prop_assert!(raw.chars().all(|c| c.is_ascii_digit()));
            }
            ParseResult::Resolved { country, nsn } => {
                prop_assert!((2..=17).contains(&nsn.len()));
                let metadata = PHONE_NUMBER_UTIL.get_metadata_for_region(&country);
                prop_assert!(metadata.is_some());
                prop_assert!(PHONE_NUMBER_UTIL.is_national_phone_number(&nsn, metadata.unwrap()));
            }
        }
    }
}
