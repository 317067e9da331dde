//! Page assembly: catalog + theme signal → [`PageTree`].
//!
//! Assembly is a single pass over an already-validated [`Catalog`]. It cannot
//! fail, does no I/O, and reads the theme signal exactly once, so two calls
//! with the same inputs produce equal trees. The tree is independent of how it
//! gets rendered; [`crate::generate`] turns it into HTML and the `tree`
//! command prints it as JSON.
//!
//! Section order is fixed:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ hero                         │  title, tagline, 2 links, logo, wave
//! ├──────────────────────────────┤
//! │ showcase 0   [code | text]   │
//! │ showcase 1   [text | code]   │  one panel per catalog showcase
//! │ ...                          │
//! ├──────────────────────────────┤
//! │ feature grid [f0][f1][f2]    │  rows of `columns` cells
//! │              [f3]...         │
//! ├──────────────────────────────┤
//! │ contribute                   │  link to the issue tracker
//! └──────────────────────────────┘
//! ```

use crate::assets::Asset;
use crate::catalog::{CallToAction, Catalog, FeatureItem, ShowcaseItem};
use crate::config::SiteConfig;
use crate::highlight::{Highlighter, PlainHighlighter};
use crate::layout::{self, LayoutSlot};
use crate::theme::{RenderColor, ThemeAdapter, ThemeSignal};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_FEATURE_COLUMNS: usize = 3;

/// The composed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTree {
    /// Signal the tree was assembled with.
    pub theme: ThemeSignal,
    pub hero: HeroSection,
    pub showcases: Vec<ShowcasePanel>,
    pub features: FeatureGrid,
    pub contribute: ContributeBlock,
}

/// An asset together with the color it is painted in for this render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemedGraphic {
    pub asset: Asset,
    pub color: RenderColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSection {
    pub title: String,
    /// Markdown.
    pub tagline: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
    pub logo: ThemedGraphic,
    pub wave: ThemedGraphic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcasePanel {
    /// Zero-based catalog position.
    pub index: usize,
    /// Fragment identifier, unique within the page.
    pub anchor: String,
    pub title: String,
    /// Markdown.
    pub body: String,
    pub slot: LayoutSlot,
    pub language_tag: String,
    /// Markup produced by the highlighter.
    pub code_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureGrid {
    pub columns: usize,
    pub cells: Vec<FeatureCell>,
}

impl FeatureGrid {
    /// Cells split into rows of `columns`; the last row may be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[FeatureCell]> {
        self.cells.chunks(self.columns.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCell {
    pub title: String,
    pub icon: ThemedGraphic,
    /// Markdown.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributeBlock {
    pub title: String,
    /// Markdown.
    pub text: String,
    pub link: CallToAction,
}

/// Composes a [`Catalog`] into a [`PageTree`].
///
/// Holds the collaborators assembly needs: the theme adapter, the code
/// highlighter, and the feature grid width.
pub struct Assembler {
    theme: ThemeAdapter,
    highlighter: Box<dyn Highlighter>,
    feature_columns: usize,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(
            ThemeAdapter::default(),
            Box::new(PlainHighlighter::default()),
            DEFAULT_FEATURE_COLUMNS,
        )
    }
}

impl Assembler {
    pub fn new(
        theme: ThemeAdapter,
        highlighter: Box<dyn Highlighter>,
        feature_columns: usize,
    ) -> Self {
        Self {
            theme,
            highlighter,
            feature_columns: feature_columns.max(1),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            ThemeAdapter::from_config(&config.graphics),
            Box::new(PlainHighlighter {
                line_numbers: config.layout.line_numbers,
            }),
            config.layout.feature_columns,
        )
    }

    pub fn assemble(&self, catalog: &Catalog, signal: ThemeSignal) -> PageTree {
        let color = self.theme.resolve(signal);

        let hero = catalog.hero();
        let hero = HeroSection {
            title: hero.title.clone(),
            tagline: hero.tagline.clone(),
            primary: hero.primary.clone(),
            secondary: hero.secondary.clone(),
            logo: themed(&hero.logo, &color),
            wave: themed(&hero.wave, &color),
            banner_code: hero.banner_code.clone(),
        };

        let showcases = self.showcase_panels(catalog.showcases());

        let features = FeatureGrid {
            columns: self.feature_columns,
            cells: catalog
                .features()
                .iter()
                .map(|item| feature_cell(item, &color))
                .collect(),
        };

        let contribute = catalog.contribute();
        let contribute = ContributeBlock {
            title: contribute.title.clone(),
            text: contribute.text.clone(),
            link: contribute.link.clone(),
        };

        PageTree {
            theme: signal,
            hero,
            showcases,
            features,
            contribute,
        }
    }

    fn showcase_panels(&self, items: &[ShowcaseItem]) -> Vec<ShowcasePanel> {
        let mut anchors = AnchorSet::default();
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ShowcasePanel {
                index,
                anchor: anchors.claim(&item.title),
                title: item.title.clone(),
                body: item.body.clone(),
                slot: layout::slot_for(index),
                language_tag: item.language_tag.clone(),
                code_html: self
                    .highlighter
                    .highlight(&item.sample, &item.language_tag)
                    .into_string(),
            })
            .collect()
    }
}

/// Assemble with the default theme colors, plain highlighter and three
/// feature columns.
pub fn assemble(catalog: &Catalog, signal: ThemeSignal) -> PageTree {
    Assembler::default().assemble(catalog, signal)
}

fn themed(asset: &Asset, color: &RenderColor) -> ThemedGraphic {
    ThemedGraphic {
        asset: asset.clone(),
        color: color.clone(),
    }
}

fn feature_cell(item: &FeatureItem, color: &RenderColor) -> FeatureCell {
    FeatureCell {
        title: item.title.clone(),
        icon: themed(&item.icon, color),
        description: item.description.clone(),
    }
}

/// Hands out unique anchors in claim order.
///
/// Suffixed anchors are tracked alongside plain slugs: `Fast`, `Fast`,
/// `Fast 2` yields `fast`, `fast-2`, `fast-2-2`.
#[derive(Default)]
struct AnchorSet {
    taken: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl AnchorSet {
    fn claim(&mut self, title: &str) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base = "showcase".to_string();
        }
        let mut candidate = base.clone();
        let suffix = self.next_suffix.entry(base.clone()).or_insert(1);
        while self.taken.contains(&candidate) {
            *suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Lowercase ASCII alphanumerics, runs of anything else collapsed to one dash.
///
/// - `"Easy to use 🌟"` → `"easy-to-use"`
/// - `"I/O Ready"` → `"i-o-ready"`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
