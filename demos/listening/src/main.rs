//! Live configuration example: listeners react to every value the loader and a
//! background watcher apply.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use harvester::config::{Environment, FieldSpec, Loader, ProcessEnv};
use harvester::sync::{Int64, Secret, Text};
use tokio::sync::mpsc;
use tracing::info;

/// Process environment with fallbacks for variables that are not set.
struct WithDefaults(HashMap<String, String>);

impl Environment for WithDefaults {
    fn var(&self, key: &str) -> Option<String> {
        ProcessEnv.var(key).or_else(|| self.0.get(key).cloned())
    }
}

#[derive(Debug, Default)]
struct Config {
    index_name: Text,
    cache_retention: Int64,
    log_level: Text,
    api_token: Secret,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,harvest_config=debug".into()),
        )
        .with_target(false)
        .init();

    let cfg = Arc::new(Config::default());

    let (retention_tx, mut retention_rx) = mpsc::unbounded_channel();
    let (level_tx, mut level_rx) = mpsc::unbounded_channel();
    cfg.cache_retention.listen(retention_tx);
    cfg.log_level.listen(level_tx);

    let listener = tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(retention) = retention_rx.recv() => {
                    info!(retention, "config changed: CacheRetention");
                }
                Some(level) = level_rx.recv() => {
                    info!(%level, "config changed: LogLevel");
                }
                else => break,
            }
        }
    });

    let env = WithDefaults(HashMap::from([(
        "ENV_CACHE_RETENTION_SECONDS".to_owned(),
        "86400".to_owned(),
    )]));

    {
        let mut loader = Loader::new()
            .with_environment(env)
            .with_args(std::env::args_os().skip(1));
        loader.register(FieldSpec::new("IndexName", &cfg.index_name).seed("customers-v1"))?;
        loader.register(
            FieldSpec::new("CacheRetention", &cfg.cache_retention)
                .seed("43200")
                .env("ENV_CACHE_RETENTION_SECONDS"),
        )?;
        loader.register(FieldSpec::new("LogLevel", &cfg.log_level).seed("DEBUG").flag("loglevel"))?;
        loader.register(FieldSpec::new("ApiToken", &cfg.api_token).env("API_TOKEN"))?;
        loader.load()?;
    }

    info!(
        index_name = %cfg.index_name,
        cache_retention = %cfg.cache_retention,
        log_level = %cfg.log_level,
        api_token = %cfg.api_token,
        "config loaded"
    );

    // Stand-in for a remote watcher pushing a new value from another thread.
    let watcher = {
        let cfg = Arc::clone(&cfg);
        tokio::task::spawn_blocking(move || cfg.log_level.set_string("WARN"))
    };
    watcher.await??;

    // Let the listener catch up before shutting down.
    tokio::time::sleep(Duration::from_millis(100)).await;
    listener.abort();

    info!(log_level = %cfg.log_level, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_unset_variables() {
        let env = WithDefaults(HashMap::from([(
            "LISTENING_DEMO_SURELY_UNSET".to_owned(),
            "86400".to_owned(),
        )]));
        assert_eq!(env.var("LISTENING_DEMO_SURELY_UNSET").as_deref(), Some("86400"));
        assert_eq!(env.var("LISTENING_DEMO_ALSO_UNSET"), None);
    }
}
