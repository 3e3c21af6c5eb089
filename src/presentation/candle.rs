/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Status reported by the candle endpoint when data is available
pub const STATUS_OK: &str = "ok";
/// Status reported by the candle endpoint when the range holds no data
pub const STATUS_NO_DATA: &str = "no_data";

/// OHLCV series for a symbol, one entry per bar in each array
///
/// The arrays are absent when the status is `no_data`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    /// Close prices
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub close: Option<Vec<f64>>,
    /// High prices
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub high: Option<Vec<f64>>,
    /// Low prices
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub low: Option<Vec<f64>>,
    /// Open prices
    #[serde(rename = "o", skip_serializing_if = "Option::is_none")]
    pub open: Option<Vec<f64>>,
    /// Response status, `ok` or `no_data`
    #[serde(rename = "s")]
    pub status: String,
    /// Bar timestamps in Unix seconds
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<i64>>,
    /// Volumes
    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    pub volume: Option<Vec<f64>>,
}

/// A single bar extracted from a [`Candle`]
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleBar {
    /// Bar open time
    pub time: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

impl Candle {
    /// True when the endpoint reported `ok`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Number of complete bars, i.e. the length of the shortest array
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.timestamps.as_ref().map(Vec::len),
            self.open.as_ref().map(Vec::len),
            self.high.as_ref().map(Vec::len),
            self.low.as_ref().map(Vec::len),
            self.close.as_ref().map(Vec::len),
            self.volume.as_ref().map(Vec::len),
        ]
        .into_iter()
        .map(|len| len.unwrap_or(0))
        .min()
        .unwrap_or(0)
    }

    /// True when there are no complete bars
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zips the parallel arrays into bars
    ///
    /// Bars whose timestamp is out of range for `chrono` are skipped.
    #[must_use]
    pub fn bars(&self) -> Vec<CandleBar> {
        let (Some(t), Some(o), Some(h), Some(l), Some(c), Some(v)) = (
            &self.timestamps,
            &self.open,
            &self.high,
            &self.low,
            &self.close,
            &self.volume,
        ) else {
            return Vec::new();
        };

        (0..self.len())
            .filter_map(|i| {
                Some(CandleBar {
                    time: DateTime::from_timestamp(t[i], 0)?,
                    open: o[i],
                    high: h[i],
                    low: l[i],
                    close: c[i],
                    volume: v[i],
                })
            })
            .collect()
    }
}
