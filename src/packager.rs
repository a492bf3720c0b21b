use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::error::{GhReleaseError, Result};

/// The subset of `package.json` this tool needs.
#[derive(Debug, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub repository: Option<RepositoryField>,
}

/// npm allows `repository` as either a plain URL string or an object
/// with a `url` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Detailed { url: String },
}

impl RepositoryField {
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Detailed { url } => url,
        }
    }
}

/// Read the `package.json` of a module directory.
pub fn read_manifest(dir: &Path) -> Result<PackageManifest> {
    let manifest_path = dir.join("package.json");
    let content = std::fs::read_to_string(&manifest_path)?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}

/// Tarball name npm pack is expected to produce for a manifest.
pub fn tarball_name(manifest: &PackageManifest) -> String {
    format!("{}-{}.tgz", manifest.name, manifest.version)
}

/// Pack a module directory with `npm pack`.
///
/// The tarball lands in the current working directory; a repeated run with
/// the same manifest overwrites it. Returns the tarball path.
pub fn pack(dir: &Path) -> Result<PathBuf> {
    let manifest = read_manifest(dir)?;
    let tarball = tarball_name(&manifest);
    tracing::info!("Creating {}", tarball);

    let status = Command::new("npm")
        .arg("pack")
        .arg(dir)
        .status()
        .map_err(|_| GhReleaseError::PackFailed {
            path: dir.display().to_string(),
        })?;

    if !status.success() {
        return Err(GhReleaseError::PackFailed {
            path: dir.display().to_string(),
        });
    }

    Ok(PathBuf::from(tarball))
}

/// Generate SHA256 checksums for files
pub fn generate_checksums(files: &[PathBuf], output_dir: &Path) -> Result<PathBuf> {
    use sha2::{Digest, Sha256};

    let checksum_path = output_dir.join("SHA256SUMS");
    let mut checksum_file = File::create(&checksum_path)?;

    for file_path in files {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GhReleaseError::AssetUpload {
                name: file_path.display().to_string(),
                message: "invalid file path".to_string(),
            })?;

        let mut file = File::open(file_path)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)?;
        let hash_hex = hex::encode(hasher.finalize());

        writeln!(checksum_file, "{}  {}", hash_hex, file_name)?;
    }

    tracing::info!("Generated checksums: {}", checksum_path.display());
    Ok(checksum_path)
}
