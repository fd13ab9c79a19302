use super::{Asset, AssetRole, AssetSet, AssetSpec};
use crate::error::AssetError;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::Path;

pub fn load_assets(root: &Path, specs: &[AssetSpec]) -> AssetSet {
    AssetSet::new(specs.iter().map(|s| load_asset(root, s)).collect())
}

/// Reads one asset in a single pass. Failures are captured on the asset, never returned.
///
/// Recommended assets are only looked up on disk; their content is never read.
pub fn load_asset(root: &Path, spec: &AssetSpec) -> Asset {
    let resolved_path = root.join(&spec.path);

    let mut asset = Asset {
        name: spec.name.clone(),
        path: spec.path.clone(),
        resolved_path,
        role: spec.role,
        exists: false,
        content: None,
        sha256: None,
        error: None,
    };

    let outcome = match spec.role {
        AssetRole::REQUIRED => std::fs::read(&asset.resolved_path)
            .and_then(decode_text)
            .map(|(content, digest)| {
                tracing::debug!(
                    asset = %spec.name,
                    path = %spec.path,
                    bytes = content.len(),
                    sha256 = %digest,
                    "asset loaded"
                );
                asset.content = Some(content);
                asset.sha256 = Some(digest);
            }),
        AssetRole::RECOMMENDED => std::fs::metadata(&asset.resolved_path).map(|_| {
            tracing::debug!(asset = %spec.name, path = %spec.path, "recommended asset present");
        }),
    };

    match outcome {
        Ok(()) => asset.exists = true,
        Err(e) => {
            let err = if e.kind() == ErrorKind::NotFound {
                AssetError::Missing {
                    path: spec.path.clone(),
                }
            } else {
                AssetError::Unreadable {
                    path: spec.path.clone(),
                    reason: e.to_string(),
                }
            };
            match spec.role {
                AssetRole::REQUIRED => {
                    tracing::warn!(asset = %spec.name, error = %err, "required asset unavailable")
                }
                AssetRole::RECOMMENDED => {
                    tracing::debug!(asset = %spec.name, error = %err, "recommended asset unavailable")
                }
            }
            asset.error = Some(err);
        }
    }
    asset
}

/// UTF-8 text with a leading byte-order mark removed, plus the digest of the raw bytes.
fn decode_text(bytes: Vec<u8>) -> std::io::Result<(String, String)> {
    let digest = sha256_hex(&bytes);
    let text = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
    let text = match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    };
    Ok((text, digest))
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}
