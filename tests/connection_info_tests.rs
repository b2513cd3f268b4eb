//! Behaviour shared by every connection info provider

mod common;

use std::sync::Arc;
use std::thread;

use dbapi::{
    ConnectionInfo, EnvConnectionInfo, MemorySecretSource, SecretStoreConnectionInfo,
    SharedConnectionInfo, SqlConnectionInfo, SqlDriver, StaticConnectionInfo,
};

fn assert_stable(info: &dyn SqlConnectionInfo) {
    let first = info.connection_string().to_string();
    for _ in 0..5 {
        assert_eq!(info.connection_string(), first);
    }
}

#[test]
fn test_static_end_to_end() {
    common::init_tracing();

    let info = StaticConnectionInfo::new("jdbc:mysql://db.example.com:3306/app");
    assert_eq!(info.connection_string(), "jdbc:mysql://db.example.com:3306/app");
    assert_eq!(info.connection_string(), "jdbc:mysql://db.example.com:3306/app");
}

#[test]
fn test_literal_is_returned_unmodified() {
    let info = StaticConnectionInfo::new("jdbc:postgresql://localhost:5432/mydb");
    assert_eq!(info.connection_string(), "jdbc:postgresql://localhost:5432/mydb");
}

#[test]
fn test_empty_descriptor_is_accepted() {
    let info = StaticConnectionInfo::new("");
    assert_eq!(info.connection_string(), "");
}

#[test]
fn test_instances_are_independent() {
    let a = StaticConnectionInfo::new("jdbc:mysql://a:3306/one");
    let b = StaticConnectionInfo::new("jdbc:mysql://b:3306/two");

    assert_eq!(a.connection_string(), "jdbc:mysql://a:3306/one");
    assert_eq!(b.connection_string(), "jdbc:mysql://b:3306/two");
    assert_eq!(a.connection_string(), "jdbc:mysql://a:3306/one");
}

#[test]
fn test_every_provider_is_stable() {
    common::init_tracing();

    let secrets = MemorySecretSource::new().with_secret("db/app", "jdbc:mariadb://vault:3306/app");
    let providers: Vec<Box<dyn SqlConnectionInfo>> = vec![
        Box::new(StaticConnectionInfo::new("jdbc:mysql://db.example.com:3306/app")),
        Box::new(ConnectionInfo::new(
            SqlDriver::MariaDb,
            "127.0.0.1",
            "root",
            "secret",
            "app",
        )),
        Box::new(
            EnvConnectionInfo::from_lookup("DATABASE_URL", |_| {
                Some("jdbc:mysql://env:3306/app".to_string())
            })
            .unwrap(),
        ),
        Box::new(SecretStoreConnectionInfo::fetch(&secrets, "db/app").unwrap()),
    ];

    for provider in &providers {
        assert_stable(provider.as_ref());
    }
}

#[test]
fn test_generic_and_dynamic_dispatch_agree() {
    fn through_generic<T: SqlConnectionInfo>(info: &T) -> String {
        info.connection_string().to_string()
    }

    let info = ConnectionInfo::new(SqlDriver::MySql, "db", "u", "p", "d");
    let dynamic: &dyn SqlConnectionInfo = &info;

    assert_eq!(through_generic(&info), dynamic.connection_string());
}

#[test]
fn test_shared_across_threads() {
    let shared: SharedConnectionInfo = Arc::new(
        ConnectionInfo::new(SqlDriver::MariaDb, "db", "u", "p", "d").with_port(3307),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let info = Arc::clone(&shared);
            thread::spawn(move || info.connection_string().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "jdbc:mariadb://db:3307/d?user=u&password=p"
        );
    }
}
