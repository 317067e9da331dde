//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table, the user's file is merged on top key by key,
//! and the result is deserialized and validated.
//!
//! Configuration covers presentation only. The page content itself (hero,
//! showcases, features, contribution block) lives in `site.toml`, see
//! [`crate::catalog`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Icons, logo, wave; copied to the output root
//!
//! [site]
//! title = "Home"            # <title> of the generated page
//! description = ""          # <meta name="description">
//! lang = "en"               # <html lang>
//!
//! [layout]
//! feature_columns = 3       # Feature cells per grid row (1-6)
//! line_numbers = true       # Line numbers in showcase code samples
//!
//! [graphics]
//! light = "currentColor"    # Logo/wave/icon color for the light theme
//! dark = "#eceff4"          # Logo/wave/icon color for the dark theme
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1c1e21"
//! text_muted = "#606770"
//! border = "#dadde1"
//! link = "#2e3440"
//! link_hover = "#000000"
//! accent = "#d08770"        # Primary call-to-action, hero band
//!
//! [colors.dark]
//! background = "#1b1f27"
//! text = "#eceff4"
//! text_muted = "#a0a7b4"
//! border = "#3b4252"
//! link = "#88c0d0"
//! link_hover = "#ffffff"
//! accent = "#d08770"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [layout]
//! feature_columns = 2
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const MAX_FEATURE_COLUMNS: usize = 6;

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Assets directory, relative to the content root.
    pub assets_dir: String,
    /// Page metadata owned by the host document.
    pub site: SiteMeta,
    /// Presentation parameters for the composed page.
    pub layout: LayoutConfig,
    /// Colors for theme-sensitive graphics.
    pub graphics: GraphicsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteMeta::default(),
            layout: LayoutConfig::default(),
            graphics: GraphicsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.layout.feature_columns == 0 || self.layout.feature_columns > MAX_FEATURE_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "layout.feature_columns must be 1-{MAX_FEATURE_COLUMNS}"
            )));
        }
        if self.graphics.light.trim().is_empty() || self.graphics.dark.trim().is_empty() {
            return Err(ConfigError::Validation(
                "graphics.light and graphics.dark must not be empty".into(),
            ));
        }
        if self.graphics.light == self.graphics.dark {
            return Err(ConfigError::Validation(
                "graphics.light and graphics.dark must differ".into(),
            ));
        }
        Ok(())
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Document title.
    pub title: String,
    /// Meta description. Omitted from the page when empty.
    pub description: String,
    /// Document language.
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Home".to_string(),
            description: String::new(),
            lang: "en".to_string(),
        }
    }
}

/// Presentation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Number of feature cells per grid row.
    pub feature_columns: usize,
    /// Show line numbers in code samples.
    pub line_numbers: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            feature_columns: 3,
            line_numbers: true,
        }
    }
}

/// Fill colors for theme-sensitive graphics (logo, wave, icons).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphicsConfig {
    /// Color used when the theme signal is light.
    pub light: String,
    /// Color used when the theme signal is dark.
    pub dark: String,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            light: "currentColor".to_string(),
            dark: "#eceff4".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Palette for the light theme.
    pub light: ColorScheme,
    /// Palette for the dark theme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (feature descriptions, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
    /// Accent color (primary call-to-action, hero band).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1c1e21".to_string(),
            text_muted: "#606770".to_string(),
            border: "#dadde1".to_string(),
            link: "#2e3440".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#d08770".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1b1f27".to_string(),
            text: "#eceff4".to_string(),
            text_muted: "#a0a7b4".to_string(),
            border: "#3b4252".to_string(),
            link: "#88c0d0".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#d08770".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Landing Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Page content (hero, showcases, features, contribution block) lives in
# site.toml next to this file; run 'simple-landing gen-catalog' for a sample.
# Unknown keys will cause an error.

# Directory holding icons, logo and decorative graphics, relative to the
# content root. Copied as-is to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
# Document <title>.
title = "Home"

# <meta name="description">; omitted when empty.
description = ""

# <html lang>.
lang = "en"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Feature callouts per grid row (1-6).
feature_columns = 3

# Show line numbers in showcase code samples.
line_numbers = true

# ---------------------------------------------------------------------------
# Theme-sensitive graphics (logo, hero wave, feature icons)
# ---------------------------------------------------------------------------
[graphics]
# Color used with --theme light. "currentColor" follows the text color.
light = "currentColor"

# Color used with --theme dark. Must differ from the light color.
dark = "#eceff4"

# ---------------------------------------------------------------------------
# Colors - Light theme (--theme light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1c1e21"
text_muted = "#606770"    # Feature descriptions, footer
border = "#dadde1"
link = "#2e3440"
link_hover = "#000000"
accent = "#d08770"        # Primary call-to-action, hero band

# ---------------------------------------------------------------------------
# Colors - Dark theme (--theme dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#1b1f27"
text = "#eceff4"
text_muted = "#a0a7b4"
border = "#3b4252"
link = "#88c0d0"
link_hover = "#ffffff"
accent = "#d08770"
"##
}

/// Generate CSS custom properties from color config.
///
/// The light palette sits on `:root`; the dark palette applies when the
/// document root carries `data-theme="dark"`, so the page colors follow the
/// same theme signal as the graphics.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

:root[data-theme="dark"] {{
{dark}
}}"#,
        light = color_variables(&colors.light, "    "),
        dark = color_variables(&colors.dark, "    "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-link", &scheme.link),
        ("--color-link-hover", &scheme.link_hover),
        ("--color-accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from layout config.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --feature-columns: {columns};
}}"#,
        columns = layout.feature_columns,
    )
}
