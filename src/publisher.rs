use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;

use crate::cli::Args;
use crate::config::Config;
use crate::error::Result as GhResult;
use crate::github::{GitHubClient, ReleaseRequest};
use crate::packager;

pub struct ReleasePublisher {
    args: Args,
    config: Config,
    github_client: GitHubClient,
}

impl ReleasePublisher {
    pub fn new(mut args: Args, token: String) -> Result<Self> {
        let config_path = Config::resolve_path(args.config.as_deref());
        let config = Config::load(&config_path).context("Failed to load configuration")?;

        config.merge_with_args(&mut args);

        let github_client = GitHubClient::new(token)?;

        Ok(Self {
            args,
            config,
            github_client,
        })
    }

    pub async fn run(&self) -> Result<()> {
        let (owner, repo) = self.args.parse_repository(Path::new("."))?;
        tracing::info!("Repository: {}/{}", owner, repo);

        // Pack every module before touching the network
        let mut assets: Vec<PathBuf> = Vec::new();
        for dir in self.args.packages() {
            let tarball = packager::pack(Path::new(&dir))
                .with_context(|| format!("Failed to pack {dir}"))?;
            assets.push(tarball);
        }

        if !self.args.no_checksum {
            let checksum_file = packager::generate_checksums(&assets, Path::new("."))?;
            assets.push(checksum_file);
        }

        // The root version names the tag; read it once
        let version = packager::read_manifest(Path::new("."))
            .context("Failed to read root package.json")?
            .version;
        let commit = resolve_head_commit(Path::new(".")).context(
            "Failed to resolve HEAD. Please run this command from the project root",
        )?;

        let tag = format!("v{version}");
        let request = ReleaseRequest {
            tag_name: tag.clone(),
            name: tag,
            target_commitish: commit,
            body: self.config.release.body.clone(),
            draft: self.args.draft,
        };

        let release = self
            .github_client
            .create_release(&owner, &repo, &request)
            .await?;

        for asset_path in &assets {
            let uploaded = self
                .github_client
                .upload_asset(&release.upload_url, asset_path)
                .await?;
            tracing::info!("Asset uploaded: {}", uploaded.browser_download_url);
        }

        tracing::info!("Release completed successfully!");
        tracing::info!("Release URL: {}", release.html_url);

        Ok(())
    }
}

/// Resolve the commit hash HEAD points at in the repository at `path`.
pub fn resolve_head_commit(path: &Path) -> GhResult<String> {
    let repo = Repository::open(path)?;
    let head = repo.head()?;
    let oid = head
        .target()
        .ok_or_else(|| git2::Error::from_str("HEAD has no target"))?;

    Ok(oid.to_string())
}
