//! The content catalog: everything the landing page says.
//!
//! Content is declared in `site.toml` in the content root and validated once,
//! before anything is rendered. A catalog that builds is complete: every
//! required field is non-empty and every asset reference resolved. A catalog
//! that doesn't build stops the run with an error naming the entry and field.
//!
//! ## `site.toml`
//!
//! ```toml
//! [hero]
//! title = "The Argon Language"
//! tagline = "An interpreted, **multi-paradigm** language."   # markdown
//! logo = "img/logo.svg"                # relative to the assets directory
//! wave = "img/waves.svg"
//! banner_code = "import io"            # optional
//!
//! [hero.primary]
//! label = "Latest release »"
//! href = "https://github.com/ArgonLang/Argon/releases/latest"
//!
//! [hero.secondary]
//! label = "Source code"
//! href = "https://github.com/ArgonLang/Argon"
//!
//! [[showcase]]                         # repeat; order is display order
//! title = "Easy to use"
//! body = "Familiar syntax..."          # markdown
//! language = "js"                      # syntax-highlighting grammar
//! sample = '''
//! import "io"
//! io.print("Hello world!")
//! '''
//!
//! [[feature]]                          # repeat; order is display order
//! title = "Run anywhere"
//! icon = "img/anywhere.svg"
//! description = "No dependencies..."   # markdown
//!
//! [contribute]
//! title = "Contribute"
//! text = "Found a bug? Have an idea?"  # markdown
//!
//! [contribute.link]
//! label = "Open an issue"
//! href = "https://github.com/ArgonLang/Argon/issues"
//! ```
//!
//! Unknown keys are rejected. Missing keys are reported the same way as empty
//! ones, so a forgotten `title` and `title = ""` produce the same error.

use crate::assets::{Asset, AssetError, AssetResolver};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CATALOG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog not found: {0}")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{entry}: required field `{field}` is empty")]
    EmptyField { entry: String, field: &'static str },
    #[error("{entry}: cannot resolve `{field}`: {source}")]
    Asset {
        entry: String,
        field: &'static str,
        source: AssetError,
    },
}

// ============================================================================
// Raw source, as written in site.toml
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSource {
    pub hero: HeroSource,
    #[serde(rename = "showcase")]
    pub showcases: Vec<ShowcaseSource>,
    #[serde(rename = "feature")]
    pub features: Vec<FeatureSource>,
    pub contribute: ContributeSource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroSource {
    pub title: String,
    pub tagline: String,
    pub logo: String,
    pub wave: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_code: Option<String>,
    pub primary: LinkSource,
    pub secondary: LinkSource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkSource {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseSource {
    pub title: String,
    pub body: String,
    pub language: String,
    pub sample: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureSource {
    pub title: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContributeSource {
    pub title: String,
    pub text: String,
    pub link: LinkSource,
}

// ============================================================================
// Validated catalog
// ============================================================================

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: String,
    /// Markdown.
    pub tagline: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
    pub logo: Asset,
    pub wave: Asset,
    pub banner_code: Option<String>,
}

/// A code sample paired with descriptive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseItem {
    pub title: String,
    /// Markdown.
    pub body: String,
    /// Literal source text, rendered verbatim.
    pub sample: String,
    pub language_tag: String,
}

/// A short callout in the feature grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: String,
    pub icon: Asset,
    /// Markdown.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribute {
    pub title: String,
    /// Markdown.
    pub text: String,
    /// Issue tracker link, embedded verbatim.
    pub link: CallToAction,
}

/// Validated, immutable page content.
///
/// Only obtainable through construction, which checks every entry. There are
/// no mutating operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    hero: Hero,
    showcases: Vec<ShowcaseItem>,
    features: Vec<FeatureItem>,
    contribute: Contribute,
}

impl Catalog {
    /// Validate a raw source and resolve its asset references.
    pub fn from_source(
        source: CatalogSource,
        resolver: &dyn AssetResolver,
    ) -> Result<Self, CatalogError> {
        let hero = build_hero(source.hero, resolver)?;

        let showcases = source
            .showcases
            .into_iter()
            .enumerate()
            .map(|(idx, item)| build_showcase(idx, item))
            .collect::<Result<Vec<_>, _>>()?;

        let features = source
            .features
            .into_iter()
            .enumerate()
            .map(|(idx, item)| build_feature(idx, item, resolver))
            .collect::<Result<Vec<_>, _>>()?;

        let contribute = build_contribute(source.contribute)?;

        Ok(Self {
            hero,
            showcases,
            features,
            contribute,
        })
    }

    pub fn from_toml_str(text: &str, resolver: &dyn AssetResolver) -> Result<Self, CatalogError> {
        let source: CatalogSource = toml::from_str(text)?;
        Self::from_source(source, resolver)
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn showcases(&self) -> &[ShowcaseItem] {
        &self.showcases
    }

    pub fn features(&self) -> &[FeatureItem] {
        &self.features
    }

    pub fn contribute(&self) -> &Contribute {
        &self.contribute
    }
}

/// Load and validate `site.toml` from the content root.
pub fn load_catalog(root: &Path, resolver: &dyn AssetResolver) -> Result<Catalog, CatalogError> {
    let path = root.join(CATALOG_FILE);
    if !path.is_file() {
        return Err(CatalogError::Missing(path));
    }
    let content = fs::read_to_string(&path)?;
    Catalog::from_toml_str(&content, resolver)
}

fn build_hero(source: HeroSource, resolver: &dyn AssetResolver) -> Result<Hero, CatalogError> {
    let entry = "hero";
    let title = required(entry, "title", source.title)?;
    let tagline = required(entry, "tagline", source.tagline)?;
    let primary = build_link("hero.primary", source.primary)?;
    let secondary = build_link("hero.secondary", source.secondary)?;
    let logo = resolve(entry, "logo", &source.logo, resolver)?;
    let wave = resolve(entry, "wave", &source.wave, resolver)?;
    let banner_code = source.banner_code.filter(|code| !code.trim().is_empty());

    Ok(Hero {
        title,
        tagline,
        primary,
        secondary,
        logo,
        wave,
        banner_code,
    })
}

fn build_showcase(idx: usize, source: ShowcaseSource) -> Result<ShowcaseItem, CatalogError> {
    let entry = format!("showcase[{idx}]");
    let title = required(&entry, "title", source.title)?;
    let body = required(&entry, "body", source.body)?;
    let language_tag = required(&entry, "language", source.language)?;
    if source.sample.trim().is_empty() {
        return Err(empty(&entry, "sample"));
    }

    Ok(ShowcaseItem {
        title,
        body,
        sample: source.sample,
        language_tag,
    })
}

fn build_feature(
    idx: usize,
    source: FeatureSource,
    resolver: &dyn AssetResolver,
) -> Result<FeatureItem, CatalogError> {
    let entry = format!("feature[{idx}]");
    let title = required(&entry, "title", source.title)?;
    let icon = resolve(&entry, "icon", &source.icon, resolver)?;
    let description = required(&entry, "description", source.description)?;

    Ok(FeatureItem {
        title,
        icon,
        description,
    })
}

fn build_contribute(source: ContributeSource) -> Result<Contribute, CatalogError> {
    let entry = "contribute";
    let title = required(entry, "title", source.title)?;
    let text = required(entry, "text", source.text)?;
    let link = build_link("contribute.link", source.link)?;
    Ok(Contribute { title, text, link })
}

fn build_link(entry: &str, source: LinkSource) -> Result<CallToAction, CatalogError> {
    Ok(CallToAction {
        label: required(entry, "label", source.label)?,
        href: required(entry, "href", source.href)?,
    })
}

/// Trimmed value, or an `EmptyField` error if nothing is left.
fn required(entry: &str, field: &'static str, value: String) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty(entry, field));
    }
    Ok(trimmed.to_string())
}

fn empty(entry: &str, field: &'static str) -> CatalogError {
    CatalogError::EmptyField {
        entry: entry.to_string(),
        field,
    }
}

fn resolve(
    entry: &str,
    field: &'static str,
    reference: &str,
    resolver: &dyn AssetResolver,
) -> Result<Asset, CatalogError> {
    resolver
        .resolve(reference)
        .map_err(|source| CatalogError::Asset {
            entry: entry.to_string(),
            field,
            source,
        })
}

/// Returns a complete sample `site.toml`.
///
/// Used by the `gen-catalog` CLI command. The assets it references
/// (`img/logo.svg`, `img/waves.svg` and the three feature icons) must exist in
/// the assets directory for the catalog to build.
pub fn stock_catalog_toml() -> &'static str {
    r##"# Simple Landing Catalog
# ======================
# The content of the landing page. Order of [[showcase]] and [[feature]]
# entries is display order. Text fields marked (markdown) accept inline
# markdown. Asset references are relative to the assets directory.

[hero]
title = "The Argon Language"
# (markdown)
tagline = """
The Argon language is a work-in-progress interpreted multi-paradigm programming language.
Its syntax is influenced by many modern languages and aims to be **elegant**, **clean** and **simple to use**.
"""
logo = "img/logo.svg"
wave = "img/waves.svg"
# Single line of code shown in the band under the wave (optional).
banner_code = "import io"

[hero.primary]
label = "Latest release »"
href = "https://github.com/ArgonLang/Argon/releases/latest"

[hero.secondary]
label = "Source code"
href = "https://github.com/ArgonLang/Argon"

# ---------------------------------------------------------------------------
# Showcases: code sample + text, alternating sides
# ---------------------------------------------------------------------------
[[showcase]]
title = "Easy to use 🌟"
body = "Argon is inspired by the most used programming languages in the world, which makes it familiar to more experienced programmers and easy to learn if you are a beginner."
language = "js"
sample = '''
import "io"

io.print("Hello world!")
'''

[[showcase]]
title = "Beauty 💅"
body = "Code written in Argon is simple to understand and its syntax rewards cleanliness and clarity making it very easy to read."
language = "js"
sample = '''
import "enum"
import "io"

let NOBLE_GAS = ["Helium", "Neon", "Argon", "Krypton", "Xenon"]

var group_by_name_length = enum.group_by(len)

NOBLE_GAS
  |> group_by_name_length
  |> io.print
'''

[[showcase]]
title = "Paradigms 👾"
body = "Argon supports different programming paradigms, this allows developers to choose the style that best fits the needs of the project."
language = "js"
sample = '''
struct NameCounter {
  var name
  var counter

  pub func inc_counter(self) {
    self.counter ++
  }
}

var obj_counters = [
  NameCounter@("Alice", 0)
  NameCounter@("Bob", 0)
]

var itm
for itm of obj_counters {
  itm.inc_counter()
}

/* But also */

var obj_counters = [
  ["Alice", 0],
  ["Bob", 0]
]

obj_counters |> map((itm) => {
  itm[1] ++
})
'''

[[showcase]]
title = "Scalable 🚀"
body = "Thanks to its architecture it is possible to run a huge amount of tasks simultaneously, your programs can scale and stay lightning fast."
language = "js"
sample = '''
import "io"

func task(id) {
  spawn () => {
    "Hello from task %d" % id |> io.print
  }()
}

for var i = 0; i < 100000; i++ {
  task(i)
}
'''

# ---------------------------------------------------------------------------
# Feature grid
# ---------------------------------------------------------------------------
[[feature]]
title = "Run anywhere"
icon = "img/anywhere.svg"
# (markdown)
description = "The Argon interpreter is written in C++, does not require any dependencies and supports all major operating systems, it is possible to have a working environment wherever it is possible to compile C++ code."

[[feature]]
title = "Concurrent"
icon = "img/concurrent.svg"
description = "Lightweight concurrency is a key feature of Argon, the execution of a Argon program is based on lightweight fibers that can be automatically suspended and resumed as needed."

[[feature]]
title = "I/O Ready"
icon = "img/io.svg"
description = "Don't be afraid of I/O bound tasks, Argon automatically handles this situation by suspending the I/O blocked fiber and resuming execution only when ready, meanwhile the rest of your program will continue to run without interruption."

# ---------------------------------------------------------------------------
# Contribution call-to-action
# ---------------------------------------------------------------------------
[contribute]
title = "Contribute"
# (markdown)
text = "Argon is a work in progress. Found a bug, or have an idea for the language? Tell us about it."

[contribute.link]
label = "Open an issue"
href = "https://github.com/ArgonLang/Argon/issues"
"##
}
