//! Package context: install-relative paths and version metadata.
//!
//! Built once at startup and passed by reference; nothing here is mutated
//! afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::consts::{
    BIDS_VERSION_FILE, DEFAULT_TEMPLATE, HEURISTICS_DIR, HOME_ENV, PLUGIN_DIR, SCHEMA_DIR,
};
use crate::error::AppError;

pub(crate) const LICENSE: &str = "GNU General Public License v3 or later (GPLv3+)";
pub(crate) const COPYRIGHT: &str = "2018-2026, the bidskit contributors";
pub(crate) const DISCLAIMER: &str = "\
bidskit is free software: you can redistribute it and/or modify it under the terms of the
GNU General Public License as published by the Free Software Foundation, either version 3
of the License, or (at your option) any later version.

bidskit is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
See the GNU General Public License for more details.
";

/// Read-only install locations and the local version string.
///
/// All derived folders are subpaths of `root`.
#[derive(Debug, Clone)]
pub(crate) struct PackageContext {
    pub(crate) root: PathBuf,
    pub(crate) schema_folder: PathBuf,
    pub(crate) heuristics_folder: PathBuf,
    pub(crate) plugin_folder: PathBuf,
    pub(crate) bidsmap_template: PathBuf,
    pub(crate) version: String,
}

impl PackageContext {
    pub(crate) fn new(root: PathBuf) -> Result<Self, AppError> {
        let version = local_version(&root)?;
        let schema_folder = root.join(SCHEMA_DIR);
        let heuristics_folder = root.join(HEURISTICS_DIR);
        let plugin_folder = root.join(PLUGIN_DIR);
        let bidsmap_template = heuristics_folder.join(DEFAULT_TEMPLATE);
        Ok(Self {
            root,
            schema_folder,
            heuristics_folder,
            plugin_folder,
            bidsmap_template,
            version,
        })
    }

    /// Build the context from `BIDSKIT_HOME`, falling back to the platform
    /// data directory.
    pub(crate) fn discover() -> Result<Self, AppError> {
        Self::new(default_root())
    }

    /// Swap in a study-specific template bidsmap (user config override).
    pub(crate) fn with_template(mut self, template: Option<PathBuf>) -> Self {
        if let Some(template) = template {
            self.bidsmap_template = template;
        }
        self
    }

    /// The BIDS specification version supported by the packaged schema.
    pub(crate) fn bids_version(&self) -> Result<String, AppError> {
        let path = self.schema_folder.join(BIDS_VERSION_FILE);
        let text =
            fs::read_to_string(&path).map_err(|source| AppError::BidsVersion { path, source })?;
        Ok(text.trim().to_string())
    }
}

fn default_root() -> PathBuf {
    if let Ok(home) = env::var(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bidskit")
}

/// Resolve the local version: compiled-in package metadata first, then the
/// `[package].version` of a manifest under the install root. A miss on both
/// means the installation is broken and startup should fail.
fn local_version(root: &Path) -> Result<String, AppError> {
    if let Some(version) = option_env!("CARGO_PKG_VERSION") {
        return Ok(version.to_string());
    }
    manifest_version(&root.join("Cargo.toml"))
}

#[derive(Deserialize)]
struct Manifest {
    package: ManifestPackage,
}

#[derive(Deserialize)]
struct ManifestPackage {
    version: String,
}

fn manifest_version(path: &Path) -> Result<String, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::MissingVersion {
        reason: format!("{}: {e}", path.display()),
    })?;
    let manifest: Manifest = toml::from_str(&content).map_err(|e| AppError::MissingVersion {
        reason: format!("{}: {e}", path.display()),
    })?;
    Ok(manifest.package.version)
}
