//! Startup wiring from an empty environment to the HTTP state.

use std::ffi::OsString;

use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::rstest;

use create_user_service::domain::SecretMap;
use create_user_service::domain::ports::SecretSourceError;
use create_user_service::outbound::aws::load_sdk_config;
use create_user_service::server::{ServerConfig, StartupError, bootstrap_with_source};
use create_user_service::settings::ServiceSettings;
use create_user_service::test_support::StaticSecretSource;

const KEYS: [&str; 11] = [
    "USER_SERVICE_HOST",
    "USER_SERVICE_PORT",
    "USER_SERVICE_REGION",
    "USER_SERVICE_TABLE_NAME",
    "USER_SERVICE_AMQP_ADDR",
    "USER_SERVICE_QUEUE_NAME",
    "USER_SERVICE_SECRET_SOURCE",
    "USER_SERVICE_LAMBDA_FUNCTION",
    "USER_SERVICE_SECRET_NAME",
    "USER_SERVICE_WRITE_ORDER",
    "USER_SERVICE_BCRYPT_COST",
];

fn cleared_env() -> Vec<(&'static str, Option<String>)> {
    KEYS.iter().map(|key| (*key, None)).collect()
}

fn load_defaults() -> ServiceSettings {
    ServiceSettings::load_from_iter([OsString::from("create-user-service")])
        .expect("settings load without any configuration")
}

#[rstest]
#[tokio::test]
async fn empty_environment_listens_on_the_default_address() {
    let _guard = lock_env(cleared_env());

    let settings = load_defaults();
    let config = ServerConfig::from_settings(&settings);
    assert_eq!(config.bind_addr(), ("0.0.0.0", 8082));
}

#[rstest]
#[tokio::test]
async fn secret_failure_stops_startup_with_default_settings() {
    let _guard = lock_env(cleared_env());

    let settings = load_defaults();
    let sdk_config = load_sdk_config(settings.region()).await;
    let source = StaticSecretSource::failing(SecretSourceError::unavailable("dispatch failure"));

    let err = bootstrap_with_source(&settings, &sdk_config, &source)
        .await
        .err()
        .expect("startup must stop");
    assert!(matches!(err, StartupError::Secrets(_)));
    let io: std::io::Error = err.into();
    assert!(io.to_string().contains("dispatch failure"));
}

#[rstest]
#[tokio::test]
async fn valid_secrets_complete_startup_with_default_settings() {
    let _guard = lock_env(cleared_env());

    let settings = load_defaults();
    let sdk_config = load_sdk_config(settings.region()).await;
    let secrets: SecretMap = [
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI"),
    ]
    .into_iter()
    .collect();

    // With no broker on the default address the publisher degrades instead
    // of failing startup.
    let result =
        bootstrap_with_source(&settings, &sdk_config, &StaticSecretSource::new(secrets)).await;
    assert!(result.is_ok());
}
