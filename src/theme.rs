//! Light/dark theme resolution for theme-sensitive graphics.
//!
//! The logo, the decorative wave under the hero and the feature icons are
//! inlined SVG drawn with `currentColor`. Which color that ends up being
//! depends on the theme signal handed to the assembler:
//!
//! | Signal | Color |
//! |--------|-------|
//! | `Light` | `graphics.light` (default `currentColor`, follows the text) |
//! | `Dark`  | `graphics.dark` (default `#eceff4`, contrasts the dark background) |
//!
//! The signal is supplied by the caller; anything that is not recognizably
//! `light` or `dark` is treated as `Light`.

use crate::config::GraphicsConfig;
use serde::Serialize;
use std::fmt;

/// Current light/dark mode, as reported by whoever hosts the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSignal {
    #[default]
    Light,
    Dark,
}

impl ThemeSignal {
    /// Parse a raw signal value. Unrecognized input falls back to `Light`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => ThemeSignal::Dark,
            _ => ThemeSignal::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeSignal::Light => "light",
            ThemeSignal::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CSS color value used to paint a theme-sensitive graphic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RenderColor(String);

impl RenderColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a [`ThemeSignal`] to the color theme-sensitive graphics are drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAdapter {
    light: RenderColor,
    dark: RenderColor,
}

impl ThemeAdapter {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: RenderColor::new(light),
            dark: RenderColor::new(dark),
        }
    }

    pub fn from_config(graphics: &GraphicsConfig) -> Self {
        Self::new(graphics.light.clone(), graphics.dark.clone())
    }

    pub fn resolve(&self, signal: ThemeSignal) -> RenderColor {
        match signal {
            ThemeSignal::Light => self.light.clone(),
            ThemeSignal::Dark => self.dark.clone(),
        }
    }

    /// Resolve straight from a raw signal value, failing closed to light.
    pub fn resolve_raw(&self, raw: &str) -> RenderColor {
        self.resolve(ThemeSignal::from_raw(raw))
    }
}

impl Default for ThemeAdapter {
    fn default() -> Self {
        Self::from_config(&GraphicsConfig::default())
    }
}
