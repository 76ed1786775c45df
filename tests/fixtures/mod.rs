#![allow(dead_code)]

use kumo_ta::{Ohlcv, Price, PriceSeries};
use serde::{Deserialize, de::DeserializeOwned};

/// OHLCV bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub idx: u64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Expected Ichimoku lines; empty cells are undefined positions.
#[derive(Debug, Deserialize)]
pub struct RefIchimoku {
    pub idx: u64,
    pub tenkan: Option<f64>,
    pub kijun: Option<f64>,
    pub chikou: Option<f64>,
    pub senkou_a: Option<f64>,
    pub senkou_b: Option<f64>,
}

/// Expected MACD lines; empty cells are undefined positions.
#[derive(Debug, Deserialize)]
pub struct RefMacd {
    pub idx: u64,
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
}

/// Expected Bollinger values; empty cells are undefined positions.
#[derive(Debug, Deserialize)]
pub struct RefBollinger {
    pub idx: u64,
    pub middle: Option<f64>,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
    pub percent_b: Option<f64>,
}

/// Expected OBV totals (always defined).
#[derive(Debug, Deserialize)]
pub struct RefObv {
    pub idx: u64,
    pub obv: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/ohlcv-daily.csv";

/// Load the fixture OHLCV bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load the fixture bars as a ready-made series.
pub fn load_reference_series() -> PriceSeries {
    PriceSeries::from_bars(&load_reference_ohlcvs())
}

pub fn load_ichimoku_ref(path: &str) -> Vec<RefIchimoku> {
    load_records(path, "invalid Ichimoku reference record")
}

pub fn load_macd_ref(path: &str) -> Vec<RefMacd> {
    load_records(path, "invalid MACD reference record")
}

pub fn load_bollinger_ref(path: &str) -> Vec<RefBollinger> {
    load_records(path, "invalid Bollinger reference record")
}

pub fn load_obv_ref(path: &str) -> Vec<RefObv> {
    load_records(path, "invalid OBV reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Assert a derived position matches an optional reference cell, including
/// definedness.
pub fn assert_cell(actual: Option<f64>, expected: Option<f64>, tolerance: f64, context: &str) {
    match (actual, expected) {
        (None, None) => {}
        (Some(a), Some(e)) => assert_near(a, e, tolerance, context),
        (a, e) => panic!("{context}: definedness mismatch: actual={a:?}, expected={e:?}"),
    }
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
