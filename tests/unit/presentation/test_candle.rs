use chrono::{TimeZone, Utc};
use finnhub_client::presentation::Candle;
use finnhub_client::presentation::candle::{STATUS_NO_DATA, STATUS_OK};

fn sample() -> Candle {
    serde_json::from_str(
        r#"{"c":[217.68,221.03,219.89],"h":[222.49,221.5,220.94],"l":[217.19,217.1402,218.83],"o":[221.03,218.55,220],"s":"ok","t":[1569297600,1569384000,1569470400],"v":[33463820,24018876,20730608]}"#,
    )
    .unwrap()
}

#[test]
fn test_candle_deserialize() {
    let candle = sample();
    assert_eq!(candle.status, STATUS_OK);
    assert!(candle.is_ok());
    assert_eq!(candle.len(), 3);
    assert!(!candle.is_empty());
    assert_eq!(candle.open.as_ref().unwrap()[2], 220.0);
}

#[test]
fn test_candle_bars() {
    let bars = sample().bars();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].time, Utc.with_ymd_and_hms(2019, 9, 24, 4, 0, 0).unwrap());
    assert_eq!(bars[0].open, 221.03);
    assert_eq!(bars[0].high, 222.49);
    assert_eq!(bars[0].low, 217.19);
    assert_eq!(bars[0].close, 217.68);
    assert_eq!(bars[0].volume, 33_463_820.0);
    assert_eq!(bars[2].close, 219.89);
}

#[test]
fn test_candle_uneven_arrays_use_shortest() {
    let mut candle = sample();
    candle.volume.as_mut().unwrap().pop();
    assert_eq!(candle.len(), 2);
    assert_eq!(candle.bars().len(), 2);
}

#[test]
fn test_candle_no_data() {
    let candle: Candle = serde_json::from_str(r#"{"s":"no_data"}"#).unwrap();
    assert_eq!(candle.status, STATUS_NO_DATA);
    assert!(!candle.is_ok());
    assert!(candle.timestamps.is_none());
    assert!(candle.is_empty());
    assert!(candle.bars().is_empty());
    assert_eq!(serde_json::to_string(&candle).unwrap(), r#"{"s":"no_data"}"#);
}

#[test]
fn test_candle_without_status_fails() {
    assert!(serde_json::from_str::<Candle>(r#"{"error":"You don't have access"}"#).is_err());
}
