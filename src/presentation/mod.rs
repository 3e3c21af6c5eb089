/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// OHLCV candle models
pub mod candle;
/// Company profile models
pub mod profile;
/// Real-time quote models
pub mod quote;
/// Symbol and symbol search models
pub mod symbol;

pub use candle::{Candle, CandleBar};
pub use profile::CompanyProfile;
pub use quote::Quote;
pub use symbol::{EnrichedSymbol, Symbol, SymbolLookup};
