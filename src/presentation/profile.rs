/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Company profile (`stock/profile2`)
///
/// Every field is optional and only serialized when present. Unknown
/// symbols come back as an empty object, which decodes to all `None`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompanyProfile {
    /// Country of the company's headquarters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency used in company filings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Listing exchange
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company symbol/ticker as used on the listed exchange
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// IPO date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipo: Option<String>,
    /// Market capitalization, in millions
    #[serde(
        rename = "marketCapitalization",
        skip_serializing_if = "Option::is_none"
    )]
    pub market_capitalization: Option<f64>,
    /// Number of shares outstanding, in millions
    #[serde(rename = "shareOutstanding", skip_serializing_if = "Option::is_none")]
    pub share_outstanding: Option<f64>,
    /// Logo image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Company phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company website
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weburl: Option<String>,
    /// Industry classification
    #[serde(rename = "finnhubIndustry", skip_serializing_if = "Option::is_none")]
    pub finnhub_industry: Option<String>,
}

impl CompanyProfile {
    /// True when the API returned no data for the symbol
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == CompanyProfile::default()
    }
}
