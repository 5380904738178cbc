use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use url::Url;

use crate::labels::LabelConfig;

/// Scheme and domain every generated listing address lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

/// The scheme/domain pair does not form a usable base URL.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid endpoint {input:?}: {source}")]
    Parse {
        input: String,
        source: url::ParseError,
    },
    #[error("endpoint {0:?} cannot carry a path")]
    NotHierarchical(String),
}

impl Endpoint {
    pub fn new(scheme: &str, domain: &str) -> Result<Self, EndpointError> {
        let input = format!("{}://{}/", scheme, domain);
        let base = Url::parse(&input).map_err(|source| EndpointError::Parse {
            input: input.clone(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(EndpointError::NotHierarchical(input));
        }
        Ok(Self { base })
    }

    /// Root URL, e.g. `https://reddit.com/`.
    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    pub fn domain(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME, DEFAULT_DOMAIN).expect("default endpoint is a valid URL")
    }
}

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_DOMAIN: &str = "reddit.com";

static ENDPOINT: OnceLock<Endpoint> = OnceLock::new();

/// Installs the process-wide endpoint. Only the first call takes effect;
/// returns false if an endpoint was already installed.
pub fn set_endpoint(endpoint: Endpoint) -> bool {
    let installed = ENDPOINT.set(endpoint).is_ok();
    if !installed {
        tracing::debug!("endpoint already installed; ignoring new value");
    }
    installed
}

/// The process-wide endpoint, or `https://reddit.com` if none was installed.
pub fn endpoint() -> &'static Endpoint {
    ENDPOINT.get_or_init(Endpoint::default)
}

/// Global configuration loaded from `~/.config/redlist/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedlistConfig {
    /// URL scheme for generated addresses ("https" or "http").
    pub scheme: String,
    /// Host generated addresses point at, e.g. "reddit.com" or "old.reddit.com".
    pub domain: String,
    /// Optional label overrides; if missing, built-in English labels are used.
    #[serde(default)]
    pub labels: Option<LabelConfig>,
}

impl Default for RedlistConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            labels: None,
        }
    }
}

impl RedlistConfig {
    pub fn endpoint(&self) -> Result<Endpoint, EndpointError> {
        Endpoint::new(&self.scheme, &self.domain)
    }

    /// Effective labels (overrides or defaults).
    pub fn labels(&self) -> LabelConfig {
        self.labels.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedlistConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RedlistConfig> {
    if !path.exists() {
        let default_cfg = RedlistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: RedlistConfig = toml::from_str(&data)?;
    cfg.endpoint()?;
    Ok(cfg)
}
