use super::common::*;

use crate::inventory::location::{classify, known_locations, normalize_code};
use crate::inventory::rules::{driving_side_for, mileage_unit_for, DrivingSide, MileageUnit};
use crate::inventory::Region;

const CLASSIFICATION_TABLE: &[(&[&str], Region)] = &[
    (&["BSB", "GRU", "GIG", "CGH"], Region::Brazil),
    (&["JFK", "LAX", "ORD", "DFW"], Region::Usa),
    (&["YYZ", "YVR", "YUL"], Region::Canada),
    (&["LHR", "CDG", "FRA"], Region::Europe),
    (&["NRT", "ICN", "SIN"], Region::Asia),
    (&["DXB", "AUH", "DOH"], Region::MiddleEast),
    (&["SYD", "MEL", "AKL"], Region::Oceania),
    (&["JNB", "CPT", "NBO"], Region::Africa),
    (&["EZE", "SCL", "BOG"], Region::Latam),
];

#[test]
fn well_known_airports_map_to_their_market() {
    for (codes, expected) in CLASSIFICATION_TABLE {
        for code in codes.iter() {
            assert_eq!(classify(code).region, *expected, "{code}");
        }
    }
}

#[test]
fn classification_ignores_case_and_whitespace() {
    for (codes, expected) in CLASSIFICATION_TABLE {
        for code in codes.iter() {
            let messy = format!("  {}\t", code.to_ascii_lowercase());
            let info = classify(&messy);
            assert_eq!(info.region, *expected);
            assert_eq!(info.code, *code);
        }
    }
}

#[test]
fn classification_is_idempotent_over_normalized_codes() {
    for (code, _) in known_locations() {
        let once = classify(code);
        let twice = classify(&normalize_code(&once.code));
        assert_eq!(once, twice);
    }
}

#[test]
fn every_listed_location_lands_in_a_concrete_market() {
    for (code, country) in known_locations() {
        assert_ne!(
            classify(code).region,
            Region::Global,
            "{code} ({country}) fell through to global"
        );
    }
}

#[test]
fn unknown_codes_fall_back_to_global() {
    for code in ["XYZ", "ZZZZ", "", "12!", "Gru Airport"] {
        let info = classify(code);
        assert_eq!(info.region, Region::Global, "{code:?}");
        assert_eq!(info.display_name, normalize_code(code));
    }
}

#[test]
fn sample_markets_carry_local_conventions() {
    for (code, region) in REGION_SAMPLES {
        let info = classify(code);
        assert_eq!(info.region, *region);
        let expected_unit = if *region == Region::Usa {
            MileageUnit::Miles
        } else {
            MileageUnit::Km
        };
        assert_eq!(mileage_unit_for(info.region), expected_unit);
    }
    assert_eq!(driving_side_for(classify("SYD").region), DrivingSide::Left);
    assert_eq!(driving_side_for(classify("GRU").region), DrivingSide::Right);
}
