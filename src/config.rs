//! Runtime settings, read from the environment.
//!
//! | Variable          | Default   |
//! |-------------------|-----------|
//! | `HOST`            | `0.0.0.0` |
//! | `PORT`            | `8080`    |
//! | `STATS_SLOTS`     | `5`       |
//! | `RECORD_USER`     | `admin`   |
//! | `RECORD_PASSWORD` | unset: writes need no login |

use crate::logic::BatchConfig;

/// Login required for creating and editing records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub batch: BatchConfig,
    /// None: anyone may write.
    pub credentials: Option<Credentials>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_user() -> String {
    "admin".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            batch: BatchConfig::default(),
            credentials: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let batch = lookup("STATS_SLOTS")
            .and_then(|s| s.parse().ok())
            .map(|extra_slots| BatchConfig { extra_slots })
            .unwrap_or_default();
        let credentials = lookup("RECORD_PASSWORD")
            .filter(|p| !p.is_empty())
            .map(|password| Credentials {
                username: lookup("RECORD_USER").unwrap_or_else(default_user),
                password,
            });
        Self {
            host,
            port,
            batch,
            credentials,
        }
    }
}
