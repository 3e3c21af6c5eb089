use assert_json_diff::assert_json_eq;
use finnhub_client::presentation::{EnrichedSymbol, Symbol, SymbolLookup};
use serde_json::json;

#[test]
fn test_enriched_symbol_deserialize() {
    let json = r#"{"currency":"USD","description":"UAN POWER CORP","displaySymbol":"UPOW","figi":"BBG000BGHYF2","mic":"OTCM","symbol":"UPOW","type":"Common Stock","shareClassFIGI":"BBG001S7X5X6","isin":"US90352P1093","symbol2":""}"#;
    let symbol: EnrichedSymbol = serde_json::from_str(json).unwrap();

    assert_eq!(symbol.symbol(), Some("UPOW"));
    assert_eq!(symbol.base.display_symbol.as_deref(), Some("UPOW"));
    assert_eq!(symbol.base.description.as_deref(), Some("UAN POWER CORP"));
    assert_eq!(symbol.base.security_type.as_deref(), Some("Common Stock"));
    assert_eq!(symbol.currency.as_deref(), Some("USD"));
    assert_eq!(symbol.mic.as_deref(), Some("OTCM"));
    assert_eq!(symbol.isin.as_deref(), Some("US90352P1093"));
    assert_eq!(symbol.share_class_figi.as_deref(), Some("BBG001S7X5X6"));
    assert_eq!(symbol.symbol2.as_deref(), Some(""));
    assert!(symbol.has_figi());
}

#[test]
fn test_enriched_symbol_serializes_flat_without_nulls() {
    let symbol = EnrichedSymbol {
        base: Symbol {
            symbol: Some("AAPL".to_string()),
            ..Default::default()
        },
        figi: Some("BBG000B9XRY4".to_string()),
        mic: Some("XNGS".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&symbol).unwrap();
    assert_json_eq!(
        value,
        json!({"symbol": "AAPL", "figi": "BBG000B9XRY4", "mic": "XNGS"})
    );

    let decoded: EnrichedSymbol = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, symbol);
}

#[test]
fn test_has_figi() {
    let mut symbol = EnrichedSymbol::default();
    assert!(!symbol.has_figi());
    symbol.figi = Some(String::new());
    assert!(!symbol.has_figi());
    symbol.figi = Some("BBG000B9XRY4".to_string());
    assert!(symbol.has_figi());
}

#[test]
fn test_symbol_lookup() {
    let lookup: SymbolLookup = serde_json::from_str(
        r#"{"count":1,"result":[{"description":"APPLE INC","displaySymbol":"AAPL","symbol":"AAPL","type":"Common Stock"}]}"#,
    )
    .unwrap();
    assert_eq!(lookup.count, Some(1));
    assert_eq!(lookup.symbols()[0].symbol.as_deref(), Some("AAPL"));

    let empty: SymbolLookup = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.count, None);
    assert_eq!(empty.result, None);
    assert!(empty.symbols().is_empty());
}

#[test]
fn test_symbol_lookup_missing_result_is_not_empty_result() {
    let absent: SymbolLookup = serde_json::from_str(r#"{"count":0}"#).unwrap();
    let empty: SymbolLookup = serde_json::from_str(r#"{"count":0,"result":[]}"#).unwrap();

    assert_eq!(absent.result, None);
    assert_eq!(empty.result, Some(vec![]));
    assert_ne!(absent, empty);

    assert_json_eq!(serde_json::to_value(&absent).unwrap(), json!({"count": 0}));
    assert_json_eq!(
        serde_json::to_value(&empty).unwrap(),
        json!({"count": 0, "result": []})
    );
}
