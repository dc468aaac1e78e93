use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use harvest_config::{FieldSpec, Loader};
use harvest_sync::{Int64, Secret, Text};

#[derive(Default)]
struct Config {
    index_name: Text,
    cache_retention: Int64,
    password: Secret,
}

#[test]
fn listener_sees_load_then_watcher_updates() {
    let cfg = Arc::new(Config::default());
    let rx = cfg.cache_retention.subscribe(1);

    let consumer = thread::spawn(move || rx.iter().take(4).collect::<Vec<_>>());

    let env = HashMap::from([
        ("ENV_CACHE_RETENTION_SECONDS".to_owned(), "86400".to_owned()),
        ("DB_PASSWORD".to_owned(), "hunter2".to_owned()),
    ]);
    let mut loader = Loader::new().with_environment(env);
    loader
        .register(FieldSpec::new("IndexName", &cfg.index_name).seed("customers-v1"))
        .unwrap();
    loader
        .register(
            FieldSpec::new("CacheRetention", &cfg.cache_retention)
                .seed("43200")
                .env("ENV_CACHE_RETENTION_SECONDS"),
        )
        .unwrap();
    loader
        .register(FieldSpec::new("Password", &cfg.password).env("DB_PASSWORD"))
        .unwrap();
    loader.load().unwrap();

    let watcher = {
        let cfg = Arc::clone(&cfg);
        thread::spawn(move || {
            cfg.cache_retention.set(3_600);
            cfg.cache_retention.set_string("60").unwrap();
        })
    };
    watcher.join().unwrap();

    assert_eq!(consumer.join().unwrap(), vec![43_200, 86_400, 3_600, 60]);
    assert_eq!(cfg.cache_retention.get(), 60);
    assert_eq!(cfg.index_name.get(), "customers-v1");
    assert_eq!(cfg.password.get(), "hunter2");
    assert_eq!(cfg.password.to_string(), "***");
}
