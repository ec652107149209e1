use std::sync::Arc;

use crate::cli_context::CliContextBuilder;
use crate::config::Config;

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_base_url("http://backend.test:8000/")
        .build();

    // Trailing slash is trimmed
    assert_eq!(context.base_url(), "http://backend.test:8000");
    assert_eq!(context.config(), &Config::default());
}

#[test]
fn test_cli_context_builder_keeps_config() {
    let config = Config {
        base_url: None,
        default_format: Some("json".to_string()),
    };
    let context = CliContextBuilder::new()
        .with_base_url("http://localhost:9000")
        .with_config(config)
        .build();

    assert_eq!(context.config().output_format(), Some("json"));
}

#[test]
fn test_client_is_shared() {
    let mut context = CliContextBuilder::new()
        .with_base_url("http://localhost:8000")
        .build();

    let client = context.client().unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");

    // Getting client again should return same instance
    let client2 = context.client().unwrap();
    assert!(Arc::ptr_eq(&client, &client2));
}
