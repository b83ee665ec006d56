use super::*;

#[test]
fn parse_catalog_reads_record_array() {
    let items = parse_catalog(r#"[{"toyId": 1, "toyName": "Kite"}, {"toyId": 2, "toyName": "Yo-yo"}]"#).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].toy_name, "Yo-yo");
}

#[test]
fn parse_catalog_accepts_empty_array() {
    assert_eq!(parse_catalog("[]").unwrap(), Vec::new());
}

#[test]
fn parse_catalog_rejects_non_array_document() {
    let err = parse_catalog(r#"{"toyId": 1}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().starts_with("catalog document is malformed"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_catalog_is_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_catalog());
    assert_eq!(result, Err(CatalogError::Unavailable));
}
