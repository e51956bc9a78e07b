// Environment configuration for the shell.
//
// Every knob has a default that boots the in-memory backend, so a bare
// `cargo run` serves requests without any environment set up.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl StoreBackend {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => bail!("unknown store backend: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub request_timeout: Duration,
    /// Artificial latency of the in-memory backend, for exercising timeouts.
    pub memory_store_latency: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;
        let backend =
            StoreBackend::parse(&env::var("STORE_BACKEND").unwrap_or_else(|_| "memory".into()))?;
        let database_url = env::var("DATABASE_URL").ok();
        let request_timeout = Duration::from_millis(env_millis("REQUEST_TIMEOUT_MS", 2_000)?);
        let memory_store_latency = Duration::from_millis(env_millis("MEMORY_STORE_LATENCY_MS", 0)?);

        Ok(Self {
            bind_addr,
            backend,
            database_url,
            request_timeout,
            memory_store_latency,
        })
    }
}

fn env_millis(key: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} is not a number of milliseconds")),
        Err(_) => Ok(default),
    }
}
