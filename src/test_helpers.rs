//! Shared test utilities for the simple-landing test suite.
//!
//! Provides stub asset resolvers, small catalogs built in code, a content
//! directory on disk, and extractors for asserting on catalog order.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = catalog_with_showcases(&["A", "B", "C"]);
//! assert_eq!(showcase_titles(&catalog), vec!["A", "B", "C"]);
//!
//! let tmp = setup_content();
//! let site = load_site(tmp.path()).unwrap();
//! ```

use std::fs;
use tempfile::TempDir;

use crate::assets::{Asset, AssetError, AssetKind, AssetResolver};
use crate::catalog::{Catalog, CatalogSource, FeatureSource, ShowcaseSource};

// =========================================================================
// Resolvers
// =========================================================================

/// Resolves any non-empty reference to an SVG whose markup names it.
pub struct AcceptAll;

impl AssetResolver for AcceptAll {
    fn resolve(&self, reference: &str) -> Result<Asset, AssetError> {
        if reference.trim().is_empty() {
            return Err(AssetError::EmptyReference);
        }
        Ok(stub_svg(reference))
    }
}

/// Resolves only the listed references.
pub struct OnlyKnown(pub &'static [&'static str]);

impl AssetResolver for OnlyKnown {
    fn resolve(&self, reference: &str) -> Result<Asset, AssetError> {
        if self.0.iter().any(|known| *known == reference) {
            Ok(stub_svg(reference))
        } else {
            Err(AssetError::NotFound(reference.into()))
        }
    }
}

fn stub_svg(reference: &str) -> Asset {
    Asset {
        reference: reference.to_string(),
        href: reference.to_string(),
        kind: AssetKind::Svg {
            markup: format!(r#"<svg data-ref="{reference}"></svg>"#),
        },
    }
}

// =========================================================================
// Catalogs
// =========================================================================

/// Smallest complete catalog: one showcase, one feature, no banner code.
pub fn minimal_catalog_toml() -> String {
    r#"
[hero]
title = "Tiny"
tagline = "A *tiny* language."
logo = "img/logo.svg"
wave = "img/waves.svg"

[hero.primary]
label = "Download"
href = "https://example.org/download"

[hero.secondary]
label = "Source code"
href = "https://example.org/src"

[[showcase]]
title = "Hello"
body = "Prints a greeting."
language = "js"
sample = '''
io.print("Hello world!")
'''

[[feature]]
title = "Run anywhere"
icon = "img/anywhere.svg"
description = "No dependencies."

[contribute]
title = "Contribute"
text = "Report bugs."

[contribute.link]
label = "Open an issue"
href = "https://example.org/issues"
"#
    .to_string()
}

pub fn minimal_source() -> CatalogSource {
    toml::from_str(&minimal_catalog_toml()).unwrap()
}

/// Minimal catalog with its showcases replaced by one per title.
pub fn catalog_with_showcases(titles: &[&str]) -> Catalog {
    let mut source = minimal_source();
    source.showcases = titles
        .iter()
        .map(|title| ShowcaseSource {
            title: title.to_string(),
            body: format!("About {title}."),
            language: "js".to_string(),
            sample: format!("io.print(\"{title}\")\n"),
        })
        .collect();
    Catalog::from_source(source, &AcceptAll).unwrap()
}

/// Minimal catalog with its features replaced by one per title.
pub fn catalog_with_features(titles: &[&str]) -> Catalog {
    let mut source = minimal_source();
    source.features = titles
        .iter()
        .map(|title| FeatureSource {
            title: title.to_string(),
            icon: format!("img/{title}.svg"),
            description: format!("All about {title}."),
        })
        .collect();
    Catalog::from_source(source, &AcceptAll).unwrap()
}

// =========================================================================
// Content directory on disk
// =========================================================================

/// Temp content directory holding the minimal catalog and its assets.
///
/// ```text
/// site.toml
/// assets/img/{logo,waves,anywhere}.svg
/// ```
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), minimal_catalog_toml()).unwrap();
    let img = tmp.path().join("assets/img");
    fs::create_dir_all(&img).unwrap();
    for name in ["logo", "waves", "anywhere"] {
        fs::write(
            img.join(format!("{name}.svg")),
            format!(r#"<svg xmlns="http://www.w3.org/2000/svg" id="{name}"><path fill="currentColor"/></svg>"#),
        )
        .unwrap();
    }
    tmp
}

// =========================================================================
// Extractors
// =========================================================================

pub fn showcase_titles(catalog: &Catalog) -> Vec<&str> {
    catalog.showcases().iter().map(|s| s.title.as_str()).collect()
}

pub fn feature_titles(catalog: &Catalog) -> Vec<&str> {
    catalog.features().iter().map(|f| f.title.as_str()).collect()
}
