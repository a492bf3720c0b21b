use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{GhReleaseError, Result};

const API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Request body for the release-creation endpoint.
#[derive(Debug, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub target_commitish: String,
    pub body: String,
    pub draft: bool,
}

/// Release as returned by the GitHub API. `upload_url` is a URI template
/// with a `{?name,label}` placeholder.
#[derive(Debug, Deserialize)]
pub struct Release {
    pub upload_url: String,
    pub html_url: String,
}

/// Asset as returned by the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadedAsset {
    pub browser_download_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    field: Option<String>,
}

pub struct GitHubClient {
    http_client: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("npm-ghrelease/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self { http_client, token })
    }

    /// Create a new release for the given tag.
    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &ReleaseRequest,
    ) -> Result<Release> {
        tracing::info!(
            "Creating GitHub release {} at {}",
            request.tag_name,
            request.target_commitish
        );

        let url = format!("{API_BASE}/repos/{owner}/{repo}/releases");
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_release_response(status, &body, &request.target_commitish)
    }

    /// Upload an asset to a release via its upload URL template.
    pub async fn upload_asset(
        &self,
        upload_url_template: &str,
        asset_path: &Path,
    ) -> Result<UploadedAsset> {
        let asset_name = asset_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GhReleaseError::AssetUpload {
                name: asset_path.display().to_string(),
                message: "invalid asset path".to_string(),
            })?;

        let url = resolve_upload_url(upload_url_template, asset_name);
        tracing::info!("Uploading asset: {}", asset_name);

        let content = tokio::fs::read(asset_path).await?;

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
            .header("Content-Type", get_content_type(asset_path))
            .body(content)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GhReleaseError::AssetUpload {
                name: asset_name.to_string(),
                message: format!("HTTP {status} - {body}"),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Map a release-creation response to a `Release` or a typed error.
///
/// A 422 whose first error entry names `target_commitish` means the commit
/// was never pushed; any other non-201 carries the raw response body.
pub fn parse_release_response(
    status: StatusCode,
    body: &str,
    target_commitish: &str,
) -> Result<Release> {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
            let first_field = api_error.errors.first().and_then(|e| e.field.as_deref());
            if first_field == Some("target_commitish") {
                return Err(GhReleaseError::UnpushedCommit {
                    commit: target_commitish.to_string(),
                });
            }
        }
    }

    if status != StatusCode::CREATED {
        return Err(GhReleaseError::ReleaseCreation(body.to_string()));
    }

    Ok(serde_json::from_str(body)?)
}

/// Fill the `{?name,label}` placeholder of an upload URL template.
pub fn resolve_upload_url(template: &str, asset_name: &str) -> String {
    let base = match template.find('{') {
        Some(idx) => &template[..idx],
        None => template,
    };
    format!("{base}?name={asset_name}")
}

/// Determine content type for an asset
pub fn get_content_type(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "gz" | "tgz" => "application/gzip",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
