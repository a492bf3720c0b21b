use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::GhReleaseError;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "npm-ghrelease",
    version,
    about = "Pack npm modules and publish them as GitHub release assets",
    long_about = None
)]
pub struct Args {
    /// GitHub access token (can also be set via GITHUB_TOKEN env var)
    #[clap(value_name = "GITHUB-TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub repository (owner/repo)
    /// If not specified, uses the repository field of package.json
    #[clap(long)]
    pub repository: Option<String>,

    /// Module directories to pack (comma-separated)
    #[clap(short, long, value_delimiter = ',')]
    pub packages: Option<Vec<String>>,

    /// Create as draft release
    #[clap(long)]
    pub draft: bool,

    /// Don't generate a checksum file (SHA256SUMS)
    #[clap(long)]
    pub no_checksum: bool,

    /// Configuration file path
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,
}

impl Args {
    /// Get the list of module directories, using defaults if not specified
    pub fn packages(&self) -> Vec<String> {
        self.packages.clone().unwrap_or_else(|| {
            vec![".".to_string(), "scripts/babel-relay-plugin".to_string()]
        })
    }

    /// Parse repository from argument or the root package.json
    pub fn parse_repository(&self, root: &Path) -> anyhow::Result<(String, String)> {
        if let Some(repo) = &self.repository {
            let parts: Vec<&str> = repo.split('/').collect();
            if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
                return Err(GhReleaseError::InvalidRepo(repo.clone()).into());
            }
            Ok((parts[0].to_string(), parts[1].to_string()))
        } else {
            let manifest = crate::packager::read_manifest(root)?;
            let repo_url = manifest
                .repository
                .as_ref()
                .map(|r| r.url().to_string())
                .ok_or_else(|| GhReleaseError::MissingManifestField {
                    path: root.join("package.json").display().to_string(),
                    field: "repository".to_string(),
                })?;

            parse_github_url(&repo_url)
        }
    }
}

/// Extract owner and repo from a GitHub URL, accepting the `git+` prefix
/// and `.git` suffix npm manifests commonly carry.
pub fn parse_github_url(url: &str) -> anyhow::Result<(String, String)> {
    let url = url
        .trim_start_matches("git+")
        .trim_end_matches(".git")
        .trim_end_matches('/');

    if let Some(repo) = url.strip_prefix("https://github.com/") {
        let parts: Vec<&str> = repo.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok((parts[0].to_string(), parts[1].to_string()));
        }
    }

    anyhow::bail!("Could not parse GitHub repository from '{url}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let (owner, repo) = parse_github_url("https://github.com/alloy/relay").unwrap();
        assert_eq!(owner, "alloy");
        assert_eq!(repo, "relay");
    }

    #[test]
    fn test_parse_github_url_git_suffix() {
        let (owner, repo) =
            parse_github_url("git+https://github.com/alloy/relay.git").unwrap();
        assert_eq!(owner, "alloy");
        assert_eq!(repo, "relay");
    }

    #[test]
    fn test_parse_github_url_rejects_non_github() {
        assert!(parse_github_url("https://gitlab.com/owner/repo").is_err());
        assert!(parse_github_url("not a url").is_err());
    }
}
