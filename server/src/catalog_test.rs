use super::*;

fn record(id: u64, rating: f64) -> String {
    format!(r#"{{"toyId":{id},"toyName":"Toy {id}","rating":{rating},"subCategory":"Blocks"}}"#)
}

#[test]
fn clean_catalog_reports_count() {
    let body = format!("[{},{}]", record(1, 4.5), record(2, 3.0));
    let report = inspect(&body).unwrap();
    assert_eq!(report.records, 2);
    assert!(report.is_clean());
}

#[test]
fn duplicates_are_reported_once() {
    let body = format!("[{},{},{},{}]", record(1, 4.0), record(1, 4.0), record(2, 4.0), record(1, 4.0));
    let report = inspect(&body).unwrap();
    assert_eq!(report.records, 4);
    assert_eq!(report.duplicate_ids, vec![1]);
}

#[test]
fn out_of_range_ratings_are_reported() {
    let body = format!("[{},{},{}]", record(1, 5.0), record(2, 5.5), record(3, -1.0));
    let report = inspect(&body).unwrap();
    assert_eq!(report.out_of_range_ratings, vec![2, 3]);
    assert!(!report.is_clean());
}

#[test]
fn malformed_body_is_a_parse_error() {
    assert!(matches!(inspect(r#"{"toys":[]}"#), Err(CatalogCheckError::Parse(_))));
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join(format!("toytopia-missing-{}.json", std::process::id()));
    let err = check_file(&path).await.unwrap_err();
    assert!(matches!(err, CatalogCheckError::Read { .. }));
}

#[tokio::test]
async fn file_on_disk_is_inspected() {
    let path = std::env::temp_dir().join(format!("toytopia-catalog-{}.json", std::process::id()));
    tokio::fs::write(&path, format!("[{}]", record(7, 4.2))).await.unwrap();
    let report = check_file(&path).await.unwrap();
    let _ = tokio::fs::remove_file(&path).await;
    assert_eq!(report.records, 1);
}
