pub mod loader;

use crate::error::AssetError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use loader::{load_asset, load_assets};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssetRole {
    REQUIRED,
    RECOMMENDED,
}

/// A logical asset name bound to a path relative to the site root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetSpec {
    pub name: String,
    pub path: String,
    pub role: AssetRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    /// Path as declared (relative), used in descriptions and error details.
    pub path: String,
    pub resolved_path: PathBuf,
    pub role: AssetRole,
    /// Required assets: read as text. Recommended assets: present on disk.
    pub exists: bool,
    pub content: Option<String>,
    pub sha256: Option<String>,
    pub error: Option<AssetError>,
}

impl Asset {
    pub fn text(&self) -> Result<&str, AssetError> {
        match (&self.content, &self.error) {
            (Some(c), _) if self.exists => Ok(c.as_str()),
            (_, Some(e)) => Err(e.clone()),
            (None, None) if self.exists => Err(AssetError::Unreadable {
                path: self.path.clone(),
                reason: "recommended assets are not read".to_string(),
            }),
            _ => Err(AssetError::Missing {
                path: self.path.clone(),
            }),
        }
    }
}

/// Loaded assets in declaration order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSet {
    assets: Vec<Asset>,
}

impl AssetSet {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    pub fn text(&self, name: &str) -> Result<&str, AssetError> {
        match self.get(name) {
            Some(asset) => asset.text(),
            None => Err(AssetError::Undeclared {
                name: name.to_string(),
            }),
        }
    }

    /// First load error among `names`, in the order given.
    pub fn first_unavailable(&self, names: &[String]) -> Option<AssetError> {
        names.iter().find_map(|n| self.text(n).err())
    }
}
