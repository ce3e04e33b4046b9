use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::StatusCode;
use serde::Deserialize;

/// Status code used for "file not found" responses.
///
/// `NotFound` answers 404. `Ok` keeps the older behavior of answering 200
/// with the same error body, for clients that depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundStatus {
    #[default]
    NotFound,
    Ok,
}

impl NotFoundStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            NotFoundStatus::NotFound => StatusCode::NOT_FOUND,
            NotFoundStatus::Ok => StatusCode::OK,
        }
    }
}

impl FromStr for NotFoundStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_found" | "404" => Ok(NotFoundStatus::NotFound),
            "ok" | "200" => Ok(NotFoundStatus::Ok),
            other => anyhow::bail!(
                "invalid not_found_status {other:?}, expected \"not_found\" or \"ok\""
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Frontend build output: holds `index.html` and `assets/`.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    #[serde(default)]
    pub not_found_status: NotFoundStatus,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("frontend").join("dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            dist_dir: default_dist_dir(),
            not_found_status: NotFoundStatus::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the config file named by `DISTSERVE_CONFIG` (if any), then
    /// applies `DISTSERVE_*` environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os("DISTSERVE_CONFIG").map(PathBuf::from) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)?;
                tracing::debug!("Loaded config from {}", path.display());
                Self::from_toml(&contents)?
            }
            None => ServerConfig::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DISTSERVE_DIST_DIR") {
            self.dist_dir = PathBuf::from(dir);
        }

        if let Some(addr) = lookup("DISTSERVE_BIND_ADDR") {
            self.bind_addr = addr.parse()?;
        }

        if let Some(status) = lookup("DISTSERVE_NOT_FOUND_STATUS") {
            self.not_found_status = status.parse()?;
        }

        if self.not_found_status == NotFoundStatus::Ok {
            tracing::warn!(
                "Missing files are answered with 200 OK. \
                 Set not_found_status = \"not_found\" to return 404."
            );
        }

        Ok(())
    }
}
