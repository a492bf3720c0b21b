use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhReleaseError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("npm pack failed for {path}")]
    PackFailed { path: String },

    #[error("Failed to create GitHub release: {0}")]
    ReleaseCreation(String),

    #[error(
        "Failed to create GitHub release: commit {commit} does not exist on the remote, \
         did you forget to push?"
    )]
    UnpushedCommit { commit: String },

    #[error("Failed to upload asset {name}: {message}")]
    AssetUpload { name: String, message: String },

    #[error("Invalid repository format: {0}")]
    InvalidRepo(String),

    #[error("Missing field '{field}' in {path}")]
    MissingManifestField { path: String, field: String },
}

pub type Result<T> = std::result::Result<T, GhReleaseError>;
