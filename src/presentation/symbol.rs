/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Base identifying fields of a tradable instrument
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Symbol {
    /// Instrument description, usually the company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Symbol shown to users
    #[serde(rename = "displaySymbol", skip_serializing_if = "Option::is_none")]
    pub display_symbol: Option<String>,
    /// Unique symbol used to query other endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Security type, e.g. `Common Stock`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
}

/// Symbol listing entry as returned by `stock/symbol`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EnrichedSymbol {
    /// Base symbol fields
    #[serde(flatten)]
    pub base: Symbol,
    /// Trading currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// FIGI identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    /// Primary exchange MIC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<String>,
    /// ISIN, only on some plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Global share class FIGI
    #[serde(rename = "shareClassFIGI", skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,
    /// Alternative ticker for exchanges with multiple tickers per stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol2: Option<String>,
}

impl EnrichedSymbol {
    /// The instrument symbol
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.base.symbol.as_deref()
    }

    /// True when a non-blank FIGI is present
    #[must_use]
    pub fn has_figi(&self) -> bool {
        self.figi.as_deref().is_some_and(|figi| !figi.trim().is_empty())
    }
}

/// Result of a free-text symbol search (`search`)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SymbolLookup {
    /// Number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Matching symbols
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Symbol>>,
}

impl SymbolLookup {
    /// Matching symbols, empty when the field was absent
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        self.result.as_deref().unwrap_or_default()
    }
}
