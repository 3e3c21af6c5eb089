use finnhub_client::error::AppError;
use finnhub_client::model::exchange::Exchange;

#[test]
fn test_known_exchange_codes() {
    assert_eq!("US".parse::<Exchange>().unwrap().code(), "US");
    assert_eq!("LONDON".parse::<Exchange>().unwrap().code(), "L");
    assert_eq!("TORONTO".parse::<Exchange>().unwrap().code(), "TO");
    assert_eq!("TOKYO".parse::<Exchange>().unwrap().code(), "T");
    assert_eq!("XETRA".parse::<Exchange>().unwrap().code(), "DE");
    assert_eq!("TSX_VENTURE".parse::<Exchange>().unwrap(), Exchange::TsxVenture);
}

#[test]
fn test_exchange_key_must_match_exactly() {
    for key in ["london", "London", "LONDON ", "tsx_venture"] {
        let err = key.parse::<Exchange>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, AppError::UnknownExchange(ref name) if name == key));
    }
}

#[test]
fn test_unknown_exchange_is_invalid_argument() {
    let err = "NYSE".parse::<Exchange>().unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "unknown exchange: NYSE");
    assert!(matches!(err, AppError::UnknownExchange(_)));
}

#[test]
fn test_lookup_is_deterministic() {
    for _ in 0..3 {
        assert!("MARS".parse::<Exchange>().is_err());
        assert_eq!("PARIS".parse::<Exchange>().unwrap(), Exchange::Paris);
    }
}
