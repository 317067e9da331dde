//! # Simple Landing
//!
//! A minimal static site generator for programming-language landing pages.
//! You describe the page in two TOML files and an assets directory; the tool
//! validates the content and writes a single `index.html`.
//!
//! ```text
//! content/
//! ├── config.toml        # Presentation: colors, columns, page metadata (optional)
//! ├── site.toml          # Content: hero, showcases, features, contribute
//! └── assets/            # Icons, logo, wave; copied to the output root
//! ```
//!
//! # Architecture: Catalog → Tree → HTML
//!
//! ```text
//! 1. Catalog   site.toml + assets/    →  Catalog    (validated, immutable)
//! 2. Assemble  Catalog + ThemeSignal  →  PageTree   (pure, infallible)
//! 3. Render    PageTree + config      →  index.html (maud)
//! ```
//!
//! All validation happens in step 1. A catalog with an empty required field
//! or an asset reference that doesn't resolve never gets as far as step 2, so
//! a broken page is never written. Step 2 has no I/O and no state: the same
//! catalog and signal always yield an equal tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | `site.toml` schema, validation, the immutable [`catalog::Catalog`] |
//! | [`assets`] | Asset references → inlinable SVG or image URL |
//! | [`layout`] | Index-parity placement of showcase code (left/right) |
//! | [`theme`] | Light/dark signal → graphic color, failing closed to light |
//! | [`highlight`] | Code sample → markup, behind the [`highlight::Highlighter`] trait |
//! | [`page`] | Assembly of the [`page::PageTree`] |
//! | [`generate`] | HTML rendering with Maud, output writing |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Content as Validated Data
//!
//! Page content is data, not code. `site.toml` is deserialized with unknown
//! keys rejected, and every entry is checked before first use. Errors name
//! the entry and field (`feature[2]: required field `title` is empty`).
//!
//! ## Explicit Theme Signal
//!
//! The light/dark signal is an argument to assembly, never looked up from
//! ambient state. Unrecognized values are treated as light: a theme problem
//! never blocks rendering.
//!
//! ## Orientation as a Value
//!
//! Whether a panel's code sits left or right is a [`layout::LayoutSlot`]
//! computed from the panel's index, carried in the tree. The renderer reads
//! the slot; it never looks at the index.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed templates are build errors, interpolation is
//! auto-escaped, and there is no template directory to ship.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod generate;
pub mod highlight;
pub mod layout;
pub mod output;
pub mod page;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
