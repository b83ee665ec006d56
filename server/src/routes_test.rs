use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn options_for(site_root: &Path) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("toytopia")
        .site_root(site_root.to_string_lossy().into_owned())
        .build()
}

fn scratch_site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("toytopia-site-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_is_ok() {
    let root = scratch_site("healthz");
    let resp = app(options_for(&root))
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_document_is_served_from_site_root() {
    let root = scratch_site("catalog");
    std::fs::write(root.join("kidsdata.json"), r#"[{"toyId":1,"toyName":"Blocks"}]"#).unwrap();
    let resp = app(options_for(&root))
        .oneshot(Request::builder().uri("/kidsdata.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("\"toyName\":\"Blocks\""));
}

#[tokio::test]
async fn build_assets_are_served_from_pkg() {
    let root = scratch_site("pkg");
    std::fs::write(root.join("pkg").join("toytopia.css"), "body{}").unwrap();
    let resp = app(options_for(&root))
        .oneshot(Request::builder().uri("/pkg/toytopia.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
