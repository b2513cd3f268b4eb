mod common;

use std::env;
use std::fs;

use dbapi::{ConnectionInfo, ConnectionInfoError, ConnectionSettings, SqlConnectionInfo, SqlDriver};
use serde::Deserialize;

#[derive(Deserialize)]
struct Fixture {
    database: ConnectionSettings,
}

fn load_fixture() -> ConnectionSettings {
    let contents = fs::read_to_string("tests/fixtures/dbapi.toml").unwrap();
    toml::from_str::<Fixture>(&contents).unwrap().database
}

#[test]
fn test_settings_loading() {
    let settings = load_fixture();

    assert_eq!(settings.driver, SqlDriver::MySql);
    assert_eq!(settings.host, "db.example.com");
    assert_eq!(settings.port, Some(3307));
    assert_eq!(settings.user, "app");
    assert_eq!(settings.password, None);
    assert_eq!(
        settings.password_env.as_deref(),
        Some("DBAPI_FIXTURE_PASSWORD")
    );
    assert_eq!(settings.database, "orders");
}

#[test]
fn test_settings_defaults() {
    let settings: ConnectionSettings = toml::from_str(
        r#"
        host = "localhost"
        user = "root"
        database = "app"
        "#,
    )
    .unwrap();

    assert_eq!(settings.driver, SqlDriver::MariaDb);
    assert_eq!(settings.effective_port(), 3306);

    let info = ConnectionInfo::from_settings(&settings).unwrap();
    assert_eq!(
        info.connection_string(),
        "jdbc:mariadb://localhost:3306/app?user=root&password="
    );
}

#[test]
fn test_unknown_driver_is_rejected() {
    let result = toml::from_str::<ConnectionSettings>(
        r#"
        driver = "oracle"
        host = "localhost"
        user = "root"
        database = "app"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_settings_resolve_password_from_environment() {
    common::init_tracing();

    let mut settings = load_fixture();
    let var = common::unique_var("settings_password");
    settings.password_env = Some(var.clone());
    env::set_var(&var, "from-env");

    let info = ConnectionInfo::from_settings(&settings).unwrap();
    env::remove_var(&var);

    assert_eq!(
        info.connection_string(),
        "jdbc:mysql://db.example.com:3307/orders?user=app&password=from-env"
    );
    assert_eq!(info.driver(), SqlDriver::MySql);
    assert_eq!(info.host(), "db.example.com");
    assert_eq!(info.port(), 3307);
    assert_eq!(info.user(), "app");
    assert_eq!(info.database(), "orders");
}

#[test]
fn test_settings_fail_fast_without_password_variable() {
    let mut settings = load_fixture();
    settings.password_env = Some(common::unique_var("settings_missing"));

    let err = ConnectionInfo::from_settings(&settings).unwrap_err();
    assert!(matches!(err, ConnectionInfoError::MissingVariable { .. }));
}

#[test]
fn test_settings_round_trip_through_toml() {
    let mut settings = ConnectionSettings::new(SqlDriver::MySql, "db", "u", "d");
    settings.password = Some("p".to_string());

    let encoded = toml::to_string(&settings).unwrap();
    assert!(encoded.contains("driver = \"mysql\""));

    let decoded: ConnectionSettings = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded, settings);
}
