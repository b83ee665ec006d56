use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.catalog_file, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("BIND_ADDR", "127.0.0.1"),
        ("CATALOG_FILE", "/srv/toytopia/kidsdata.json"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.catalog_file, Some(PathBuf::from("/srv/toytopia/kidsdata.json")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("BIND_ADDR", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn malformed_port_is_rejected() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn malformed_bind_addr_is_rejected() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn catalog_path_defaults_into_site_root() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.catalog_path(Path::new("target/site")), PathBuf::from("target/site/kidsdata.json"));
}
