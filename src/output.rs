//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is an inventory of the page content, not of files. Every entry
//! leads with its positional index and title; where it came from or how it
//! is laid out is shown on indented context lines underneath.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Hero
//!     The Argon Language
//!     Logo: img/logo.svg
//!     Wave: img/waves.svg
//!     Primary: Latest release » → https://github.com/ArgonLang/Argon/releases/latest
//!     Secondary: Source code → https://github.com/ArgonLang/Argon
//!
//! Showcases
//! 001 Easy to use 🌟
//!     Sample: js, 3 lines
//!     Layout: code-left
//!
//! Features
//! 001 Run anywhere
//!     Icon: img/anywhere.svg
//!
//! Contribute
//!     Open an issue → https://github.com/ArgonLang/Argon/issues
//!
//! Config
//!     config.toml
//!     site.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html (theme: dark)
//! 001 Easy to use 🌟 → index.html#easy-to-use
//!     Layout: code-left
//! 002 Beauty 💅 → index.html#beauty
//!     Layout: code-right
//!
//! Assets
//!     img/logo.svg
//!
//! Generated index.html: 4 showcases, 3 features, 5 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure and do no I/O.

use crate::catalog::{CATALOG_FILE, CallToAction};
use crate::generate::{GenerateReport, Site};
use crate::layout;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn format_link(link: &CallToAction) -> String {
    format!("{} \u{2192} {}", link.label, link.href)
}

/// Pluralize a count: `1 line`, `3 lines`.
fn count(n: usize, singular: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}s", n, singular)
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the content inventory of a loaded site.
pub fn format_check_output(site: &Site, source_root: &Path) -> Vec<String> {
    let catalog = &site.catalog;
    let mut lines = Vec::new();

    let hero = catalog.hero();
    lines.push("Hero".to_string());
    lines.push(format!("    {}", hero.title));
    lines.push(format!("    Logo: {}", hero.logo.reference));
    lines.push(format!("    Wave: {}", hero.wave.reference));
    lines.push(format!("    Primary: {}", format_link(&hero.primary)));
    lines.push(format!("    Secondary: {}", format_link(&hero.secondary)));
    if let Some(code) = &hero.banner_code {
        lines.push(format!("    Banner: {}", code));
    }

    lines.push(String::new());
    lines.push("Showcases".to_string());
    for (i, item) in catalog.showcases().iter().enumerate() {
        let line_count = item.sample.trim_end_matches(['\n', '\r']).lines().count();
        lines.push(format!("{} {}", format_index(i + 1), item.title));
        lines.push(format!(
            "    Sample: {}, {}",
            item.language_tag,
            count(line_count, "line")
        ));
        lines.push(format!(
            "    Layout: {}",
            layout::slot_for(i).orientation.css_class()
        ));
    }

    lines.push(String::new());
    lines.push("Features".to_string());
    for (i, item) in catalog.features().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), item.title));
        lines.push(format!("    Icon: {}", item.icon.reference));
    }

    lines.push(String::new());
    lines.push("Contribute".to_string());
    lines.push(format!("    {}", format_link(&catalog.contribute().link)));

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    lines.push(format!("    {}", CATALOG_FILE));
    if site.assets_root.is_dir() {
        lines.push(format!("    {}/", site.config.assets_dir));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &Site, source_root: &Path) {
    for line in format_check_output(site, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// generate
// ============================================================================

/// Format generate output: the page, its panels, and the copied assets.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let tree = &report.tree;
    let index_name = report
        .index_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.html".to_string());

    let mut lines = vec![format!(
        "Home \u{2192} {} (theme: {})",
        index_name, tree.theme
    )];

    for panel in &tree.showcases {
        lines.push(format!(
            "{} {} \u{2192} {}#{}",
            format_index(panel.index + 1),
            panel.title,
            index_name,
            panel.anchor
        ));
        lines.push(format!(
            "    Layout: {}",
            panel.slot.orientation.css_class()
        ));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("    {}", asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}: {}, {}, {}",
        index_name,
        count(tree.showcases.len(), "showcase"),
        count(tree.features.cells.len(), "feature"),
        count(report.assets.len(), "asset"),
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, load_site};
    use crate::test_helpers::*;
    use crate::theme::ThemeSignal;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn count_pluralizes() {
        assert_eq!(count(1, "line"), "1 line");
        assert_eq!(count(0, "line"), "0 lines");
        assert_eq!(count(3, "asset"), "3 assets");
    }

    #[test]
    fn check_output_lists_content() {
        let tmp = setup_content();
        let site = load_site(tmp.path()).unwrap();
        let lines = format_check_output(&site, tmp.path());

        assert_eq!(lines[0], "Hero");
        assert_eq!(lines[1], "    Tiny");
        assert!(lines.contains(&"    Logo: img/logo.svg".to_string()));
        assert!(lines.contains(&"001 Hello".to_string()));
        assert!(lines.contains(&"    Sample: js, 1 line".to_string()));
        assert!(lines.contains(&"    Layout: code-left".to_string()));
        assert!(lines.contains(&"001 Run anywhere".to_string()));
        assert!(lines.contains(&"    Icon: img/anywhere.svg".to_string()));
        assert!(lines.contains(
            &"    Open an issue \u{2192} https://example.org/issues".to_string()
        ));
    }

    #[test]
    fn check_output_config_section() {
        let tmp = setup_content();
        let site = load_site(tmp.path()).unwrap();
        let lines = format_check_output(&site, tmp.path());
        let config_at = lines.iter().position(|l| l == "Config").unwrap();
        assert_eq!(&lines[config_at + 1..], &["    site.toml", "    assets/"]);

        fs::write(tmp.path().join("config.toml"), "[layout]\nfeature_columns = 2\n").unwrap();
        let site = load_site(tmp.path()).unwrap();
        let lines = format_check_output(&site, tmp.path());
        assert!(lines.contains(&"    config.toml".to_string()));
    }

    #[test]
    fn generate_output_lists_panels_and_summary() {
        let content = setup_content();
        let out = TempDir::new().unwrap();
        let report = generate(content.path(), out.path(), ThemeSignal::Dark).unwrap();
        let lines = format_generate_output(&report);

        assert_eq!(lines[0], "Home \u{2192} index.html (theme: dark)");
        assert_eq!(lines[1], "001 Hello \u{2192} index.html#hello");
        assert_eq!(lines[2], "    Layout: code-left");
        assert!(lines.contains(&"    img/logo.svg".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated index.html: 1 showcase, 1 feature, 3 assets"
        );
    }
}
