/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side filters applied to a full exchange listing

use crate::presentation::symbol::EnrichedSymbol;

/// Returns the first entry whose symbol equals `symbol` exactly
///
/// The result holds zero or one element: it is empty when nothing matches
/// or when the matching entry has no FIGI (absent or blank).
#[must_use]
pub fn find_exact_symbol(stocks: Vec<EnrichedSymbol>, symbol: &str) -> Vec<EnrichedSymbol> {
    stocks
        .into_iter()
        .find(|stock| stock.symbol() == Some(symbol))
        .filter(EnrichedSymbol::has_figi)
        .into_iter()
        .collect()
}

/// Keeps entries whose MIC is in `mics` and whose symbol is in `symbols`
///
/// The two lists are matched independently: an entry passes when its MIC
/// appears anywhere in `mics` and its symbol appears anywhere in `symbols`.
/// Entries missing either field never match.
#[must_use]
pub fn filter_by_mics_and_symbols(
    stocks: Vec<EnrichedSymbol>,
    mics: &[String],
    symbols: &[String],
) -> Vec<EnrichedSymbol> {
    stocks
        .into_iter()
        .filter(|stock| {
            let mic_matches = stock
                .mic
                .as_deref()
                .is_some_and(|mic| mics.iter().any(|m| m == mic));
            let symbol_matches = stock
                .symbol()
                .is_some_and(|symbol| symbols.iter().any(|s| s == symbol));
            mic_matches && symbol_matches
        })
        .collect()
}
