// src/config/mod.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Sharing URLs for the three dashboard sheets. Each must be publicly
/// link-viewable; an access failure surfaces as a fetch diagnostic at
/// render time, never a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sources {
    pub pending: String,
    pub court_cases: String,
    pub performance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sources: Sources,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sources: Sources {
                pending: "https://docs.google.com/spreadsheets/d/1jspebqSTXgEtYyxYAE47_uRn6RQKFlHQhneuQoGiCok/gviz/tq?tqx=out:csv&gid=535674994".to_string(),
                court_cases: "https://docs.google.com/spreadsheets/d/1VUnD7ySFzIkeZlaq8E5XG8r2xXcos6lhIt62QZEeHKs/gviz/tq?tqx=out:csv&gid=0".to_string(),
                performance: "https://docs.google.com/spreadsheets/d/14-idXJHzHKCUQxxaqGZi-6S0G20gvPUhK4G16ci2FwI/gviz/tq?tqx=out:csv&gid=213021534".to_string(),
            },
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading config {:?}", path.as_ref()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {:?}", path.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_yaml_with_default_timeout() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            "sources:\n  pending: \"urlA\"\n  court_cases: \"urlB\"\n  performance: \"urlC\""
        )
        .unwrap();
        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.sources.court_cases, "urlB");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn round_trips_through_yaml() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.sources.pending, cfg.sources.pending);
        assert_eq!(back.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn missing_file_errors_with_context() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("reading config"));
    }
}
