//! Payload loading from disk

use std::path::PathBuf;

use forecast_card::daily::{self, DayBoundary};
use forecast_card::source::{self, LoadError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[tokio::test]
async fn test_load_fixture() {
    let data = source::load_forecast(fixture("two_days.json")).await.unwrap();

    assert_eq!(data.list.len(), 12);

    let days = daily::forecast_days(&data.list, DayBoundary::Utc);
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].temp_min, 0.0);
    assert_eq!(days[0].temp_max, 16.5);
    assert_eq!(days[0].humidity, 47.0);
    assert_eq!(days[0].wind, 5.0);

    assert_eq!(days[1].temp_min, 8.0);
    assert_eq!(days[1].temp_max, 20.5);
    assert_eq!(days[1].humidity, 51.0);
    assert_eq!(days[1].wind, 7.0);
}

#[tokio::test]
async fn test_missing_file() {
    let err = source::load_forecast(fixture("does_not_exist.json"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[tokio::test]
async fn test_malformed_file() {
    let path = std::env::temp_dir().join(format!("forecast-card-{}.json", std::process::id()));
    tokio::fs::write(&path, "{ \"list\": [").await.unwrap();

    let err = source::load_forecast(&path).await.unwrap_err();
    let _ = tokio::fs::remove_file(&path).await;

    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn test_parse_empty_object() {
    let data = source::parse_forecast("{}").unwrap();
    assert!(data.list.is_empty());
}
