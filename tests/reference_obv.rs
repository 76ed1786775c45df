mod fixtures;

use fixtures::{assert_near, load_obv_ref, load_reference_series};
use kumo_ta::Obv;

const REF_PATH: &str = "tests/fixtures/data/obv.csv";

/// Tolerance: OBV is a plain running sum of fixture volumes; only addition
/// ordering noise remains.
const TOLERANCE: f64 = 1e-6;

#[test]
fn obv_matches_reference() {
    let series = load_reference_series();
    let reference = load_obv_ref(REF_PATH);
    assert_eq!(reference.len(), series.len(), "fixture files disagree");

    let out = Obv::new()
        .compute(&series)
        .expect("obv over the fixture series");

    for (i, r) in reference.iter().enumerate() {
        let actual = out
            .get(i)
            .unwrap_or_else(|| panic!("OBV undefined at bar {i}"));
        assert_near(actual, r.obv, TOLERANCE, &format!("obv at bar {i}"));
    }
}

#[test]
fn obv_is_defined_everywhere() {
    let series = load_reference_series();
    let out = Obv::new()
        .compute(&series)
        .expect("obv over the fixture series");

    assert_eq!(out.len(), series.len());
    assert_eq!(out.defined_count(), series.len());
}
