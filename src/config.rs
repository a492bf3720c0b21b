use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReleaseConfig {
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,

    #[serde(default = "default_body")]
    pub body: String,

    #[serde(default)]
    pub draft: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
            body: default_body(),
            draft: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RepositoryConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
}

fn default_packages() -> Vec<String> {
    vec![".".to_string(), "scripts/babel-relay-plugin".to_string()]
}

fn default_body() -> String {
    "Automated npm package release".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configuration file path: explicit flag, then the
    /// project-local file, then the user config directory.
    pub fn resolve_path(cli_path: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_path {
            return path.to_path_buf();
        }

        let local = PathBuf::from(".config/ghrelease.toml");
        if local.exists() {
            local
        } else {
            Self::default_path()
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ghrelease.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/ghrelease.toml"))
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&self, args: &mut crate::cli::Args) {
        if args.packages.is_none() && !self.release.packages.is_empty() {
            args.packages = Some(self.release.packages.clone());
        }

        if !args.draft && self.release.draft {
            args.draft = true;
        }

        if args.repository.is_none() {
            if let (Some(owner), Some(repo)) = (&self.repository.owner, &self.repository.repo) {
                args.repository = Some(format!("{}/{}", owner, repo));
            }
        }
    }
}
