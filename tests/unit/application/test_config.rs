use std::collections::HashMap;
use std::env;
use timesolv_client::application::config::{Config, normalize_keys};
use timesolv_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, REQUIRED_CREDENTIAL_KEYS};
use timesolv_client::error::AppError;

fn full_map() -> HashMap<String, String> {
    HashMap::from([
        ("client_id".to_string(), "id-1".to_string()),
        ("client_secret".to_string(), "secret-1".to_string()),
        ("authorization_code".to_string(), "code-1".to_string()),
        ("redirect_uri".to_string(), "https://example.com/cb".to_string()),
    ])
}

#[test]
fn test_from_map_complete() {
    let config = Config::from_map(full_map()).expect("complete credentials");
    assert_eq!(config.credentials.client_id, "id-1");
    assert_eq!(config.credentials.client_secret, "secret-1");
    assert_eq!(config.credentials.authorization_code, "code-1");
    assert_eq!(config.credentials.redirect_uri, "https://example.com/cb");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_from_map_every_incomplete_combination() {
    // Each bit of `mask` keeps one of the four required keys; 0b1111 is the only complete set
    for mask in 0u8..0b1111 {
        let entries: Vec<(&str, &str)> = REQUIRED_CREDENTIAL_KEYS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, key)| (*key, "value"))
            .collect();

        match Config::from_map(entries) {
            Err(AppError::Configuration(msg)) => {
                for (i, key) in REQUIRED_CREDENTIAL_KEYS.iter().enumerate() {
                    if mask & (1 << i) == 0 {
                        assert!(msg.contains(*key), "mask {mask:04b}: '{msg}' should name {key}");
                    }
                }
            }
            other => panic!("mask {mask:04b}: expected configuration error, got {other:?}"),
        }
    }
}

#[test]
fn test_from_map_keys_are_case_insensitive() {
    let config = Config::from_map([
        ("Client_Id", "id-2"),
        ("CLIENT_SECRET", "secret-2"),
        ("Authorization_Code", "code-2"),
        (" redirect_URI ", "https://example.com/cb"),
        ("BASE_URL", "https://sandbox.example.com/api/"),
    ])
    .expect("mixed-case keys");
    assert_eq!(config.credentials.client_id, "id-2");
    assert_eq!(config.credentials.client_secret, "secret-2");
    assert_eq!(config.rest_api.base_url, "https://sandbox.example.com/api/");
}

#[test]
fn test_from_map_blank_value_counts_as_missing() {
    let mut map = full_map();
    map.insert("client_secret".to_string(), "   ".to_string());
    let err = Config::from_map(map).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("client_secret"));
}

#[test]
fn test_from_map_timeout() {
    let mut map = full_map();
    map.insert("Timeout".to_string(), "5".to_string());
    let config = Config::from_map(map.clone()).unwrap();
    assert_eq!(config.rest_api.timeout, 5);

    map.insert("Timeout".to_string(), "soon".to_string());
    assert!(matches!(
        Config::from_map(map.clone()),
        Err(AppError::Configuration(_))
    ));

    map.insert("Timeout".to_string(), "0".to_string());
    assert!(Config::from_map(map).unwrap_err().is_configuration());
}

#[test]
fn test_normalize_keys_last_spelling_wins() {
    let map = normalize_keys(vec![("CLIENT_ID", "first"), ("client_id", "second")]);
    assert_eq!(map.len(), 1);
    assert_eq!(map["client_id"], "second");
}

#[test]
fn test_builders() {
    let config = Config::from_map(full_map())
        .unwrap()
        .with_base_url("http://localhost:9999")
        .with_timeout(3);
    assert_eq!(config.rest_api.url_for("Token"), "http://localhost:9999/Token");
    assert_eq!(config.rest_api.timeout().as_secs(), 3);
}

#[test]
fn test_from_env() {
    unsafe {
        env::set_var("TIMESOLV_CLIENT_ID", "env-id");
        env::set_var("TIMESOLV_CLIENT_SECRET", "env-secret");
        env::set_var("TIMESOLV_AUTHORIZATION_CODE", "env-code");
        env::set_var("TIMESOLV_REDIRECT_URI", "https://example.com/env");
        env::set_var("TIMESOLV_BASE_URL", "https://env.example.com/");
        env::remove_var("TIMESOLV_TIMEOUT");
    }

    let config = Config::from_env().expect("credentials from environment");
    assert_eq!(config.credentials.client_id, "env-id");
    assert_eq!(config.credentials.authorization_code, "env-code");
    assert_eq!(config.rest_api.base_url, "https://env.example.com/");

    unsafe {
        env::remove_var("TIMESOLV_CLIENT_SECRET");
    }
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("client_secret"));

    unsafe {
        env::remove_var("TIMESOLV_CLIENT_ID");
        env::remove_var("TIMESOLV_AUTHORIZATION_CODE");
        env::remove_var("TIMESOLV_REDIRECT_URI");
        env::remove_var("TIMESOLV_BASE_URL");
    }
}

#[test]
fn test_config_debug_hides_secrets() {
    let config = Config::from_map(full_map()).unwrap();
    let out = format!("{config:?}");
    assert!(out.contains("id-1"));
    assert!(!out.contains("secret-1"));
    assert!(!out.contains("code-1"));
}
