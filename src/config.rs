//! Runtime configuration.
//!
//! Values come from environment variables first and are then overridden by
//! command-line flags:
//!
//! | Flag             | Variable          | Default          |
//! |------------------|-------------------|------------------|
//! | `--bind <addr>`  | `JOBS_BIND`       | `127.0.0.1:8080` |
//! | `--data <path>`  | `JOBS_DATA_FILE`  | bundled CSV      |
//! | `--eager`        | `JOBS_EAGER_LOAD` | off              |

use crate::loader::{EmbeddedSource, FileSource, JobSource};
use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// CSV file to load; `None` uses the bundled data.
    pub data_file: Option<PathBuf>,
    /// Load the data at startup instead of on the first request.
    pub eager_load: bool,
}

impl AppConfig {
    /// Build from the process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(|key| std::env::var(key).ok(), &args)
    }

    pub fn from_sources<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = env("JOBS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let mut config = Self {
            bind_addr: parse_addr(&bind)?,
            data_file: env("JOBS_DATA_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            eager_load: env("JOBS_EAGER_LOAD").is_some_and(|v| is_truthy(&v)),
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    config.bind_addr = parse_addr(flag_value(args, i)?)?;
                    i += 2;
                }
                "--data" => {
                    config.data_file = Some(PathBuf::from(flag_value(args, i)?));
                    i += 2;
                }
                "--eager" => {
                    config.eager_load = true;
                    i += 1;
                }
                other => {
                    tracing::debug!("Ignoring unknown argument '{}'", other);
                    i += 1;
                }
            }
        }

        Ok(config)
    }

    pub fn job_source(&self) -> Arc<dyn JobSource> {
        match &self.data_file {
            Some(path) => Arc::new(FileSource::new(path)),
            None => Arc::new(EmbeddedSource),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_file: None,
            eager_load: false,
        }
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{} requires a value", args[i]),
    }
}

fn parse_addr(value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", value))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_sources(env_of(&[]), &[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_values() {
        let env = env_of(&[
            ("JOBS_BIND", "0.0.0.0:9000"),
            ("JOBS_DATA_FILE", "/tmp/jobs.csv"),
            ("JOBS_EAGER_LOAD", "true"),
        ]);
        let config = AppConfig::from_sources(env, &[]).unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/jobs.csv")));
        assert!(config.eager_load);
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_of(&[("JOBS_BIND", "0.0.0.0:9000")]);
        let config = AppConfig::from_sources(
            env,
            &args(&["--bind", "127.0.0.1:7000", "--data", "jobs.csv", "--eager"]),
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.data_file, Some(PathBuf::from("jobs.csv")));
        assert!(config.eager_load);
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let config = AppConfig::from_sources(env_of(&[]), &args(&["--verbose"])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_bind_is_error() {
        assert!(AppConfig::from_sources(env_of(&[]), &args(&["--bind", "nowhere"])).is_err());
    }

    #[test]
    fn test_missing_flag_value_is_error() {
        assert!(AppConfig::from_sources(env_of(&[]), &args(&["--data"])).is_err());
    }

    #[test]
    fn test_bundled_source_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.job_source().name(), "bundled:job_data.csv");
    }
}
