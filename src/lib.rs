//! # npm-ghrelease
//!
//! A small release tool for npm projects hosted on GitHub.
//!
//! ## Overview
//!
//! `npm-ghrelease` automates the tail end of an npm release: it packs one or
//! more module directories into tarballs with `npm pack`, creates a GitHub
//! release tagged `v<version>` at the current commit, and uploads every
//! tarball as a release asset.
//!
//! ## Features
//!
//! - Packs multiple module directories in one run
//! - Creates the release from the version in the root `package.json`
//! - Targets the exact commit HEAD points at, and reports when that commit
//!   was never pushed
//! - SHA256 checksum generation for the uploaded tarballs
//! - Resolves the repository from `package.json` when not given explicitly
//! - Configuration file support
//!
//! ## Usage
//!
//! ```bash
//! # Publish using a token argument
//! npm-ghrelease <GITHUB-TOKEN>
//!
//! # Or via the environment
//! GITHUB_TOKEN=... npm-ghrelease
//!
//! # Pack specific module directories
//! npm-ghrelease --packages .,packages/plugin <GITHUB-TOKEN>
//!
//! # Create a draft release
//! npm-ghrelease --draft <GITHUB-TOKEN>
//! ```
//!
//! ## Configuration
//!
//! Configuration can be specified in `.config/ghrelease.toml` in your project
//! directory or `~/.config/ghrelease.toml` for user-wide settings.
//!
//! Re-running after a successful release fails with a duplicate-tag error
//! from GitHub; bump the version in `package.json` first.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// GitHub API client for creating releases and uploading assets
pub mod github;

/// npm pack invocation and checksum generation utilities
pub mod packager;

/// Release publisher that orchestrates the pack, release and upload steps
pub mod publisher;
