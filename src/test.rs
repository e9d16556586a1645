use crate::{catalog::seed_books, error::ErrorVerbosity, server::ServerConfig};

#[tokio::test]
async fn example_config_is_valid() {
    let config = ServerConfig::from_config_file("config.example.yaml")
        .await
        .expect("Example config is not parsable");

    assert_eq!(config.socket_address().port(), 8000);
    assert_eq!(config.error_verbosity(), ErrorVerbosity::Message);
    assert_eq!(config.seed(), seed_books().as_slice());
}

#[tokio::test]
async fn missing_config_file_is_an_error() {
    assert!(ServerConfig::from_config_file("does-not-exist.yaml")
        .await
        .is_err());
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let config: ServerConfig =
        serde_yaml::from_str("error_verbosity: Full\n").expect("Config is not parsable");

    assert_eq!(config.error_verbosity(), ErrorVerbosity::Full);
    assert_eq!(config.socket_address(), ServerConfig::default().socket_address());
    assert_eq!(config.seed().len(), 4);
}
