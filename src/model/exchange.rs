/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Exchange table
//!
//! Maps the human exchange keys accepted by
//! [`MarketService::get_symbols`](crate::application::interfaces::market::MarketService::get_symbols)
//! to the exchange codes expected by the `stock/symbol` endpoint.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

macro_rules! exchanges {
    ($($(#[$doc:meta])* $variant:ident => ($key:literal, $code:literal),)+) => {
        /// Exchanges supported by the symbol listing endpoint
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Exchange {
            $($(#[$doc])* $variant,)+
        }

        impl Exchange {
            const ALL: &'static [Exchange] = &[$(Exchange::$variant,)+];

            /// Every known exchange, in table order
            #[must_use]
            pub fn all() -> &'static [Exchange] {
                Self::ALL
            }

            /// Human key of the exchange, e.g. `LONDON`
            #[must_use]
            pub fn key(&self) -> &'static str {
                match self {
                    $(Exchange::$variant => $key,)+
                }
            }

            /// Provider exchange code, e.g. `L`
            #[must_use]
            pub fn code(&self) -> &'static str {
                match self {
                    $(Exchange::$variant => $code,)+
                }
            }
        }
    };
}

exchanges! {
    /// US exchanges (NYSE, NASDAQ, OTC)
    Us => ("US", "US"),
    /// Euronext Amsterdam
    Amsterdam => ("AMSTERDAM", "AS"),
    /// Athens Exchange
    Athens => ("ATHENS", "AT"),
    /// Australian Securities Exchange
    Australia => ("AUSTRALIA", "AX"),
    /// Buenos Aires Stock Exchange
    BuenosAires => ("BUENOS_AIRES", "BA"),
    /// Colombia Stock Exchange
    Colombia => ("COLOMBIA", "BC"),
    /// Budapest Stock Exchange
    Budapest => ("BUDAPEST", "BD"),
    /// Borse Berlin
    Berlin => ("BERLIN", "BE"),
    /// Stock Exchange of Thailand
    Thailand => ("THAILAND", "BK"),
    /// BSE Ltd
    Bombay => ("BOMBAY", "BO"),
    /// Euronext Brussels
    Brussels => ("BRUSSELS", "BR"),
    /// Canadian Securities Exchange
    CanadianSecurities => ("CANADIAN_SECURITIES", "CN"),
    /// OMX Nordic Exchange Copenhagen
    Copenhagen => ("COPENHAGEN", "CO"),
    /// Dubai Financial Market
    Dubai => ("DUBAI", "DB"),
    /// Xetra
    Xetra => ("XETRA", "DE"),
    /// Borse Dusseldorf
    Dusseldorf => ("DUSSELDORF", "DU"),
    /// Deutsche Boerse AG
    Frankfurt => ("FRANKFURT", "F"),
    /// Nasdaq Omx Helsinki
    Helsinki => ("HELSINKI", "HE"),
    /// Hong Kong Exchanges and Clearing
    HongKong => ("HONG_KONG", "HK"),
    /// Hamburg Stock Exchange
    Hamburg => ("HAMBURG", "HM"),
    /// Nasdaq Omx Iceland
    Iceland => ("ICELAND", "IC"),
    /// Irish Stock Exchange
    Ireland => ("IRELAND", "IR"),
    /// Borsa Istanbul
    Istanbul => ("ISTANBUL", "IS"),
    /// Indonesia Stock Exchange
    Jakarta => ("JAKARTA", "JK"),
    /// Johannesburg Stock Exchange
    Johannesburg => ("JOHANNESBURG", "JO"),
    /// Bursa Malaysia
    KualaLumpur => ("KUALA_LUMPUR", "KL"),
    /// KOSDAQ
    Kosdaq => ("KOSDAQ", "KQ"),
    /// Korea Exchange
    Korea => ("KOREA", "KS"),
    /// London Stock Exchange
    London => ("LONDON", "L"),
    /// Euronext Lisbon
    Lisbon => ("LISBON", "LS"),
    /// Bolsa de Madrid
    Madrid => ("MADRID", "MC"),
    /// Italian Stock Exchange
    Milan => ("MILAN", "MI"),
    /// Borse Muenchen
    Munich => ("MUNICH", "MU"),
    /// Bolsa Mexicana de Valores
    Mexico => ("MEXICO", "MX"),
    /// National Stock Exchange of India
    India => ("INDIA", "NS"),
    /// New Zealand Exchange
    NewZealand => ("NEW_ZEALAND", "NZ"),
    /// Oslo Bors
    Oslo => ("OSLO", "OL"),
    /// Euronext Paris
    Paris => ("PARIS", "PA"),
    /// Prague Stock Exchange
    Prague => ("PRAGUE", "PR"),
    /// Qatar Exchange
    Qatar => ("QATAR", "QA"),
    /// B3 Sao Paulo
    SaoPaulo => ("SAO_PAULO", "SA"),
    /// Boerse Stuttgart
    Stuttgart => ("STUTTGART", "SG"),
    /// Singapore Exchange
    Singapore => ("SINGAPORE", "SI"),
    /// Santiago Stock Exchange
    Santiago => ("SANTIAGO", "SN"),
    /// Saudi Stock Exchange
    Saudi => ("SAUDI", "SR"),
    /// Shanghai Stock Exchange
    Shanghai => ("SHANGHAI", "SS"),
    /// Nasdaq Omx Stockholm
    Stockholm => ("STOCKHOLM", "ST"),
    /// Swiss Exchange
    Swiss => ("SWISS", "SW"),
    /// Shenzhen Stock Exchange
    Shenzhen => ("SHENZHEN", "SZ"),
    /// Tokyo Stock Exchange
    Tokyo => ("TOKYO", "T"),
    /// Tel Aviv Stock Exchange
    TelAviv => ("TEL_AVIV", "TA"),
    /// Toronto Stock Exchange
    Toronto => ("TORONTO", "TO"),
    /// Taiwan Stock Exchange
    Taiwan => ("TAIWAN", "TW"),
    /// TSX Venture Exchange
    TsxVenture => ("TSX_VENTURE", "V"),
    /// Vienna Stock Exchange
    Vienna => ("VIENNA", "VI"),
    /// Warsaw Stock Exchange
    Warsaw => ("WARSAW", "WA"),
}

impl FromStr for Exchange {
    type Err = AppError;

    /// Looks an exchange up by its exact key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exchange::all()
            .iter()
            .copied()
            .find(|exchange| exchange.key() == s)
            .ok_or_else(|| AppError::UnknownExchange(s.to_string()))
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
