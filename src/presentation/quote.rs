/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Real-time quote for a symbol
///
/// Fields are passed through from the API as-is.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Quote {
    /// Current price
    #[serde(rename = "c", skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    /// Change since previous close
    #[serde(rename = "d", skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    /// Percent change since previous close
    #[serde(rename = "dp", skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
    /// High price of the day
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Low price of the day
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Open price of the day
    #[serde(rename = "o", skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    /// Previous close price
    #[serde(rename = "pc", skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    /// Volume, when reported
    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Quote timestamp in Unix seconds
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Quote {
    /// Quote timestamp as a UTC datetime
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
