use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ServerConfig { port: 3000, assets_dir: PathBuf::from("public") });
}

#[test]
fn reads_port_and_assets_dir() {
    let cfg = ServerConfig::from_lookup(|key| match key {
        "PORT" => Some("8080".into()),
        "SITE_ASSETS_DIR" => Some("/srv/site".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_owned())).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn blank_assets_dir_uses_default() {
    let cfg = ServerConfig::from_lookup(|key| (key == "SITE_ASSETS_DIR").then(|| "  ".to_owned())).unwrap();
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn blank_port_uses_default() {
    let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(String::new)).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(|| " ".to_owned())).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}
