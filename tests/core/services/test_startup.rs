// Integration tests for service startup

use docsite::core::config::Config;
use docsite::Services;

use crate::common::TestContent;

#[test]
fn test_start_with_builtin_documentation() {
    let services = Services::start(Config::default()).expect("Failed to start");

    assert_eq!(
        services.search.document_count().unwrap(),
        services.registry.len()
    );
    assert!(services.registry.get("section_controls").is_ok());
}

#[test]
fn test_start_with_content_dir() {
    let content = TestContent::sample();
    let mut config = Config::default();
    config.site.content_dir = Some(content.path().to_path_buf());

    let services = Services::start(config).expect("Failed to start");

    assert_eq!(services.registry.len(), 4);
    assert!(services.registry.get("button").is_ok());
    assert!(services.registry.get("section_controls").is_err());
}

#[test]
fn test_start_fails_on_bad_content() {
    let content = TestContent::with_entries(&[("button.toml", "slug = \"button\"\ntitle = \"Button\"")]);
    let mut config = Config::default();
    config.site.content_dir = Some(content.path().to_path_buf());

    assert!(Services::start(config).is_err());
}
