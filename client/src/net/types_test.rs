use super::*;

fn sample_json() -> &'static str {
    r#"{
        "toyId": 7,
        "toyName": "Wooden Train Set",
        "sellerName": "Maple Toys",
        "sellerEmail": "hello@mapletoys.example",
        "price": 34.5,
        "rating": 4.7,
        "availableQuantity": 12,
        "description": "Twenty-piece track with magnetic couplers.",
        "pictureURL": "https://img.example/train.jpg",
        "subCategory": "Building Toys"
    }"#
}

// =============================================================
// CatalogItem
// =============================================================

#[test]
fn catalog_item_reads_document_field_names() {
    let item: CatalogItem = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(item.toy_id, 7);
    assert_eq!(item.toy_name, "Wooden Train Set");
    assert_eq!(item.seller_email, "hello@mapletoys.example");
    assert_eq!(item.available_quantity, 12);
    assert_eq!(item.picture_url, "https://img.example/train.jpg");
    assert_eq!(item.sub_category, "Building Toys");
    assert!((item.rating - 4.7).abs() < f64::EPSILON);
}

#[test]
fn catalog_item_accepts_string_and_float_ids() {
    let item: CatalogItem = serde_json::from_str(r#"{"toyId": "12"}"#).unwrap();
    assert_eq!(item.toy_id, 12);
    let item: CatalogItem = serde_json::from_str(r#"{"toyId": 5.0}"#).unwrap();
    assert_eq!(item.toy_id, 5);
}

#[test]
fn catalog_item_rejects_fractional_or_missing_id() {
    assert!(serde_json::from_str::<CatalogItem>(r#"{"toyId": 1.5}"#).is_err());
    assert!(serde_json::from_str::<CatalogItem>(r#"{"toyName": "x"}"#).is_err());
    assert!(serde_json::from_str::<CatalogItem>(r#"{"toyId": "abc"}"#).is_err());
}

#[test]
fn catalog_item_defaults_optional_fields() {
    let item: CatalogItem = serde_json::from_str(r#"{"toyId": 1}"#).unwrap();
    assert_eq!(item.toy_name, "");
    assert_eq!(item.available_quantity, 0);
    assert!(item.rating.abs() < f64::EPSILON);
}

// =============================================================
// User
// =============================================================

fn user(display_name: Option<&str>) -> User {
    User {
        uid: "uid-1".to_owned(),
        display_name: display_name.map(str::to_owned),
        email: Some("a@b.com".to_owned()),
        created_at_ms: None,
    }
}

#[test]
fn user_name_falls_back_when_missing_or_blank() {
    assert_eq!(user(Some("Ada Lovelace")).name_or_default(), "Ada Lovelace");
    assert_eq!(user(None).name_or_default(), "User");
    assert_eq!(user(Some("   ")).name_or_default(), "User");
}

#[test]
fn user_initial_is_uppercased_first_letter() {
    assert_eq!(user(Some("ada")).initial(), 'A');
    assert_eq!(user(None).initial(), 'U');
    assert_eq!(user(Some("")).initial(), 'U');
}

#[test]
fn user_member_since_formats_epoch_millis() {
    let mut u = user(None);
    assert_eq!(u.member_since(), None);
    u.created_at_ms = Some(1_709_510_400_000);
    assert_eq!(u.member_since().as_deref(), Some("March 4, 2024"));
}
