//! HTML site generation.
//!
//! Loads config and catalog from the content directory, assembles the
//! [`PageTree`] for the requested theme signal and renders it as a single
//! self-contained `index.html`. The assets directory is copied next to it so
//! raster images referenced by URL keep working.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The landing page (CSS inlined, SVG graphics inlined)
//! └── img/                # Copied from content/assets/
//!     ├── logo.svg
//!     └── ...
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating and
//! `pulldown-cmark` for the markdown fields of the catalog. Everything that
//! comes from the catalog as plain text (titles, labels, URLs, banner code) is
//! escaped by maud; markdown fields and inlined SVG are trusted author content.
//!
//! Panel orientation is expressed in document order: a `code-left` panel puts
//! the code block first, a `code-right` panel puts the text first.

use crate::assets::{AssetKind, DirResolver};
use crate::catalog::{self, CallToAction, Catalog};
use crate::config::{self, SiteConfig, SiteMeta};
use crate::page::{
    Assembler, ContributeBlock, FeatureGrid, HeroSection, PageTree, ShowcasePanel, ThemedGraphic,
};
use crate::theme::ThemeSignal;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Config and validated catalog for one content directory.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    /// Absolute or source-relative path of the assets directory.
    pub assets_root: PathBuf,
}

impl Site {
    pub fn assemble(&self, signal: ThemeSignal) -> PageTree {
        Assembler::from_config(&self.config).assemble(&self.catalog, signal)
    }
}

/// What [`generate`] wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    /// Copied asset paths, relative to the output directory.
    pub assets: Vec<String>,
    pub tree: PageTree,
}

/// Load `config.toml` and `site.toml` from the content directory.
///
/// Fails before anything is rendered if either is malformed or an asset
/// reference does not resolve.
pub fn load_site(source: &Path) -> Result<Site, GenerateError> {
    let config = config::load_config(source)?;
    let assets_root = source.join(&config.assets_dir);
    let resolver = DirResolver::new(&assets_root);
    let catalog = catalog::load_catalog(source, &resolver)?;
    Ok(Site {
        config,
        catalog,
        assets_root,
    })
}

pub fn generate(
    source: &Path,
    output_dir: &Path,
    signal: ThemeSignal,
) -> Result<GenerateReport, GenerateError> {
    let site = load_site(source)?;
    let tree = site.assemble(signal);
    let css = site_css(&site.config);
    let page = render_page(&tree, &site.config.site, &css);

    fs::create_dir_all(output_dir)?;
    let assets = copy_assets(&site.assets_root, output_dir)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, page.into_string())?;

    Ok(GenerateReport {
        index_path,
        assets,
        tree,
    })
}

/// Assembled tree for the content directory, as pretty-printed JSON.
pub fn tree_json(source: &Path, signal: ThemeSignal) -> Result<String, GenerateError> {
    let site = load_site(source)?;
    Ok(serde_json::to_string_pretty(&site.assemble(signal))?)
}

/// Generated color and layout variables followed by the static stylesheet.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_layout_css(&config.layout),
        CSS_STATIC
    )
}

/// Copy every non-hidden file of the assets directory into `output_dir`.
///
/// A missing assets directory copies nothing.
fn copy_assets(assets_root: &Path, output_dir: &Path) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::new();
    if !assets_root.is_dir() {
        return Ok(copied);
    }
    let walker = WalkDir::new(assets_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets_root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
///
/// The theme is recorded on `<html>` so the palette selectors in the
/// generated CSS cover the whole page, hero included.
fn base_document(meta: &SiteMeta, theme: ThemeSignal, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(meta.lang) data-theme=(theme.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                @if !meta.description.is_empty() {
                    meta name="description" content=(meta.description);
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Markdown fragment converted to HTML.
fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

/// Inline SVG painted with the themed color, or an `<img>` for raster assets.
///
/// `label: None` marks the graphic as decorative.
fn graphic(themed: &ThemedGraphic, class: &str, label: Option<&str>) -> Markup {
    let style = format!("color: {};", themed.color.as_str());
    match &themed.asset.kind {
        AssetKind::Svg { markup } => html! {
            @if let Some(label) = label {
                div class=(class) style=(style) role="img" aria-label=(label) {
                    (PreEscaped(markup))
                }
            } @else {
                div class=(class) style=(style) aria-hidden="true" {
                    (PreEscaped(markup))
                }
            }
        },
        AssetKind::Image => html! {
            img class=(class) src=(themed.asset.href) alt=(label.unwrap_or(""));
        },
    }
}

fn link_button(link: &CallToAction, variant: &str) -> Markup {
    html! {
        a class={ "button button-" (variant) } href=(link.href) target="_blank" rel="noopener" {
            (link.label)
        }
    }
}

// ============================================================================
// Page sections
// ============================================================================

fn render_hero(hero: &HeroSection) -> Markup {
    html! {
        header.hero {
            div.hero-inner {
                div.hero-text {
                    h1 { (hero.title) }
                    div.hero-tagline { (markdown(&hero.tagline)) }
                    div.hero-actions {
                        (link_button(&hero.primary, "primary"))
                        " "
                        (link_button(&hero.secondary, "secondary"))
                    }
                }
                (graphic(&hero.logo, "hero-logo", Some(&hero.title)))
            }
            (graphic(&hero.wave, "hero-wave", None))
            @if let Some(code) = &hero.banner_code {
                div.hero-band {
                    code { (code) }
                }
            }
        }
    }
}

fn render_showcase(panel: &ShowcasePanel) -> Markup {
    let code = html! {
        div.showcase-code { (PreEscaped(&panel.code_html)) }
    };
    let text = html! {
        div.showcase-text {
            h2 { (panel.title) }
            div.showcase-body { (markdown(&panel.body)) }
        }
    };
    html! {
        section class={ "showcase " (panel.slot.orientation.css_class()) } id=(panel.anchor) {
            @if panel.slot.orientation.is_code_left() {
                (code)
                (text)
            } @else {
                (text)
                (code)
            }
        }
    }
}

fn render_features(grid: &FeatureGrid) -> Markup {
    html! {
        section.features {
            @for row in grid.rows() {
                div.feature-row {
                    @for cell in row {
                        div.feature {
                            (graphic(&cell.icon, "feature-icon", Some(&cell.title)))
                            h3 { (cell.title) }
                            div.feature-description { (markdown(&cell.description)) }
                        }
                    }
                }
            }
        }
    }
}

fn render_contribute(block: &ContributeBlock) -> Markup {
    html! {
        section.contribute {
            h2 { (block.title) }
            div.contribute-text { (markdown(&block.text)) }
            a.button.button-primary href=(block.link.href) target="_blank" rel="noopener" {
                (block.link.label)
            }
        }
    }
}

/// Renders the full landing page: hero, showcases, feature grid, contribute.
pub fn render_page(tree: &PageTree, meta: &SiteMeta, css: &str) -> Markup {
    let content = html! {
        (render_hero(&tree.hero))
        main.landing {
            div.showcases {
                @for panel in &tree.showcases {
                    (render_showcase(panel))
                }
            }
            (render_features(&tree.features))
            (render_contribute(&tree.contribute))
        }
    };

    base_document(meta, tree.theme, css, content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::assemble;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn minimal_tree(signal: ThemeSignal) -> PageTree {
        let catalog = Catalog::from_toml_str(&minimal_catalog_toml(), &AcceptAll).unwrap();
        assemble(&catalog, signal)
    }

    fn render(tree: &PageTree) -> String {
        render_page(tree, &SiteMeta::default(), "").into_string()
    }

    #[test]
    fn base_document_includes_doctype_and_meta() {
        let meta = SiteMeta {
            title: "The Argon Language".to_string(),
            description: "Argon homepage".to_string(),
            lang: "en".to_string(),
        };
        let doc = base_document(&meta, ThemeSignal::Light, "body {}", html! { p { "test" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>The Argon Language</title>"));
        assert!(doc.contains(r#"<meta name="description" content="Argon homepage">"#));
        assert!(doc.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(doc.contains("<style>body {}</style>"));
    }

    #[test]
    fn base_document_omits_empty_description() {
        let doc = base_document(&SiteMeta::default(), ThemeSignal::Light, "", html! {}).into_string();
        assert!(!doc.contains(r#"name="description""#));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        let hero = html.find(r#"class="hero""#).unwrap();
        let showcase = html.find(r#"class="showcase "#).unwrap();
        let features = html.find(r#"class="features""#).unwrap();
        let contribute = html.find(r#"class="contribute""#).unwrap();
        assert!(hero < showcase);
        assert!(showcase < features);
        assert!(features < contribute);
    }

    #[test]
    fn hero_renders_links_and_tagline_markdown() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains("<h1>Tiny</h1>"));
        assert!(html.contains("<em>tiny</em>"));
        assert!(html.contains(r#"<a class="button button-primary" href="https://example.org/download" target="_blank" rel="noopener">Download</a>"#));
        assert!(html.contains(r#"<a class="button button-secondary" href="https://example.org/src" target="_blank" rel="noopener">Source code</a>"#));
    }

    #[test]
    fn wave_is_decorative_and_colored() {
        let html = render(&minimal_tree(ThemeSignal::Dark));
        assert!(html.contains(
            r#"<div class="hero-wave" style="color: #eceff4;" aria-hidden="true">"#
        ));
        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains(
            r#"<div class="hero-wave" style="color: currentColor;" aria-hidden="true">"#
        ));
    }

    #[test]
    fn svg_markup_is_inlined() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains(r#"<svg data-ref="img/anywhere.svg"></svg>"#));
        assert!(html.contains(r#"role="img" aria-label="Run anywhere""#));
    }

    #[test]
    fn raster_icon_renders_img() {
        let mut tree = minimal_tree(ThemeSignal::Light);
        tree.features.cells[0].icon.asset.kind = AssetKind::Image;
        tree.features.cells[0].icon.asset.href = "img/anywhere.png".to_string();
        let html = render(&tree);
        assert!(html.contains(
            r#"<img class="feature-icon" src="img/anywhere.png" alt="Run anywhere">"#
        ));
    }

    #[test]
    fn showcase_order_follows_orientation() {
        let catalog = catalog_with_showcases(&["First", "Second"]);
        let tree = assemble(&catalog, ThemeSignal::Light);

        let left = render_showcase(&tree.showcases[0]).into_string();
        assert!(left.starts_with(r#"<section class="showcase code-left" id="first">"#));
        assert!(left.find("showcase-code").unwrap() < left.find("showcase-text").unwrap());

        let right = render_showcase(&tree.showcases[1]).into_string();
        assert!(right.starts_with(r#"<section class="showcase code-right" id="second">"#));
        assert!(right.find("showcase-text").unwrap() < right.find("showcase-code").unwrap());
    }

    #[test]
    fn showcase_embeds_highlighted_code() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains(r#"<pre class="code-block language-js" data-language="js">"#));
        assert!(html.contains("io.print(&quot;Hello world!&quot;)"));
    }

    #[test]
    fn features_render_in_rows() {
        let catalog = catalog_with_features(&["a", "b", "c", "d"]);
        let tree = assemble(&catalog, ThemeSignal::Light);
        let html = render_features(&tree.features).into_string();
        assert_eq!(html.matches(r#"<div class="feature-row">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="feature">"#).count(), 4);
    }

    #[test]
    fn feature_cell_is_icon_title_description() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        let icon = html.find("feature-icon").unwrap();
        let title = html.find("<h3>Run anywhere</h3>").unwrap();
        let description = html.find("<p>No dependencies.</p>").unwrap();
        assert!(icon < title && title < description);
    }

    #[test]
    fn contribute_links_issue_tracker() {
        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains(r#"href="https://example.org/issues" target="_blank" rel="noopener">Open an issue</a>"#));
    }

    #[test]
    fn text_fields_are_escaped() {
        let mut tree = minimal_tree(ThemeSignal::Light);
        tree.hero.title = "<script>alert('xss')</script>".to_string();
        tree.features.cells[0].title = "a < b".to_string();
        let html = render(&tree);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<h3>a &lt; b</h3>"));
    }

    #[test]
    fn theme_is_recorded_on_document_root() {
        let html = render(&minimal_tree(ThemeSignal::Dark));
        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
        assert!(html.contains(r#"<main class="landing">"#));

        let html = render(&minimal_tree(ThemeSignal::Light));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
    }

    #[test]
    fn dark_render_switches_page_palette() {
        let config = SiteConfig::default();
        let css = site_css(&config);
        let html = render_page(&minimal_tree(ThemeSignal::Dark), &config.site, &css).into_string();
        assert!(html.contains(r#"data-theme="dark""#));
        let dark_block = html
            .split_once(r#":root[data-theme="dark"] {"#)
            .map(|(_, rest)| &rest[..rest.find('}').unwrap()])
            .unwrap();
        assert!(dark_block.contains("--color-bg: #1b1f27;"));
        assert!(dark_block.contains("--color-text: #eceff4;"));
    }

    #[test]
    fn site_css_combines_generated_and_static() {
        let css = site_css(&SiteConfig::default());
        assert!(css.contains("--color-bg: #ffffff;"));
        assert!(css.contains("--feature-columns: 3;"));
        assert!(css.contains(".showcase"));
    }

    // =========================================================================
    // generate() against a content directory
    // =========================================================================

    #[test]
    fn generate_writes_index_and_assets() {
        let content = setup_content();
        let out = TempDir::new().unwrap();
        let report = generate(content.path(), out.path(), ThemeSignal::Dark).unwrap();

        assert_eq!(report.index_path, out.path().join("index.html"));
        let html = fs::read_to_string(&report.index_path).unwrap();
        assert!(html.contains("<h1>Tiny</h1>"));
        assert!(html.contains(r#"style="color: #eceff4;""#));

        assert_eq!(
            report.assets,
            vec!["img/anywhere.svg", "img/logo.svg", "img/waves.svg"]
        );
        assert!(out.path().join("img/logo.svg").is_file());
        assert_eq!(report.tree.theme, ThemeSignal::Dark);
    }

    #[test]
    fn generate_skips_hidden_asset_files() {
        let content = setup_content();
        fs::write(content.path().join("assets/.DS_Store"), "junk").unwrap();
        let out = TempDir::new().unwrap();
        let report = generate(content.path(), out.path(), ThemeSignal::Light).unwrap();
        assert!(!report.assets.iter().any(|a| a.contains(".DS_Store")));
        assert!(!out.path().join(".DS_Store").exists());
    }

    #[test]
    fn generate_applies_config() {
        let content = setup_content();
        fs::write(
            content.path().join("config.toml"),
            "[site]\ntitle = \"Tiny Lang\"\n\n[layout]\nfeature_columns = 2\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        generate(content.path(), out.path(), ThemeSignal::Light).unwrap();
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains("<title>Tiny Lang</title>"));
        assert!(html.contains("--feature-columns: 2;"));
    }

    #[test]
    fn generate_fails_on_broken_catalog_without_writing() {
        let content = setup_content();
        let broken = minimal_catalog_toml().replace("title = \"Run anywhere\"", "title = \"\"");
        fs::write(content.path().join("site.toml"), broken).unwrap();
        let out = TempDir::new().unwrap();
        let target = out.path().join("dist");

        let result = generate(content.path(), &target, ThemeSignal::Light);
        assert!(matches!(result, Err(GenerateError::Catalog(_))));
        assert!(!target.exists());
    }

    #[test]
    fn generate_fails_on_invalid_config() {
        let content = setup_content();
        fs::write(content.path().join("config.toml"), "[layout]\nfeature_columns = 0\n").unwrap();
        let out = TempDir::new().unwrap();
        let result = generate(content.path(), out.path(), ThemeSignal::Light);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }

    #[test]
    fn tree_json_reflects_signal() {
        let content = setup_content();
        let json = tree_json(content.path(), ThemeSignal::Dark).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["showcases"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn load_site_uses_configured_assets_dir() {
        let content = setup_content();
        fs::rename(content.path().join("assets"), content.path().join("static")).unwrap();
        fs::write(content.path().join("config.toml"), "assets_dir = \"static\"\n").unwrap();
        let site = load_site(content.path()).unwrap();
        assert_eq!(site.assets_root, content.path().join("static"));
        assert_eq!(site.catalog.features().len(), 1);
    }
}
