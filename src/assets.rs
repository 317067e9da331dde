//! Visual asset resolution.
//!
//! Catalog entries refer to icons, the logo and the hero wave by a path
//! relative to the assets directory (`img/anywhere.svg`). Resolution turns
//! that reference into an [`Asset`] the renderer can use, and is where a bad
//! reference gets caught: catalog construction resolves every reference up
//! front and refuses to build if any of them fails.
//!
//! SVG files are read and kept as markup so they can be inlined into the page
//! and painted with the theme color through `currentColor`. Raster images are
//! referenced by URL only.
//!
//! ## Reference Rules
//!
//! - must be non-empty
//! - must be relative, with no `..` components
//! - must name an existing regular file under the assets directory
//! - extension must be one of [`ASSET_EXTENSIONS`]

use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("empty asset reference")]
    EmptyReference,
    #[error("asset reference must be relative to the assets directory: {0}")]
    OutsideRoot(String),
    #[error("asset not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported asset type: {0}")]
    UnsupportedKind(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const ASSET_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "webp", "gif", "avif"];

/// A resolved visual asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// Reference as written in the catalog.
    pub reference: String,
    /// URL of the asset relative to the generated `index.html`.
    pub href: String,
    pub kind: AssetKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetKind {
    /// Inlinable SVG markup.
    Svg { markup: String },
    /// Raster image, referenced by URL.
    Image,
}

impl Asset {
    pub fn is_svg(&self) -> bool {
        matches!(self.kind, AssetKind::Svg { .. })
    }
}

/// Turns catalog asset references into renderable assets.
pub trait AssetResolver {
    fn resolve(&self, reference: &str) -> Result<Asset, AssetError>;
}

/// Resolves references against a directory on disk.
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for DirResolver {
    fn resolve(&self, reference: &str) -> Result<Asset, AssetError> {
        let relative = normalize_reference(reference)?;
        let ext = relative
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !ASSET_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AssetError::UnsupportedKind(reference.to_string()));
        }

        let path = self.root.join(&relative);
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }

        let kind = if ext == "svg" {
            AssetKind::Svg {
                markup: strip_xml_prolog(&fs::read_to_string(&path)?).to_string(),
            }
        } else {
            AssetKind::Image
        };

        Ok(Asset {
            reference: reference.to_string(),
            href: asset_href(&relative),
            kind,
        })
    }
}

/// Validate a reference and turn it into a clean relative path.
fn normalize_reference(reference: &str) -> Result<PathBuf, AssetError> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(AssetError::EmptyReference);
    }
    let mut relative = PathBuf::new();
    for component in Path::new(trimmed.trim_start_matches("./")).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return Err(AssetError::OutsideRoot(reference.to_string())),
        }
    }
    if relative.as_os_str().is_empty() {
        return Err(AssetError::EmptyReference);
    }
    Ok(relative)
}

/// Document-relative URL; assets are copied next to `index.html`.
fn asset_href(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

/// Drop an `<?xml ...?>` declaration so the markup can sit inside HTML.
fn strip_xml_prolog(svg: &str) -> &str {
    let trimmed = svg.trim_start();
    if trimmed.starts_with("<?xml")
        && let Some(end) = trimmed.find("?>")
    {
        return trimmed[end + 2..].trim();
    }
    trimmed.trim_end()
}
