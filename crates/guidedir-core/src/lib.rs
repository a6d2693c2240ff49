//! Guide Directory Core Library
//!
//! Loads a plain-text list of guides, filters it by a live search query and
//! projects the result onto a list surface. Also generates the guide pages
//! the list links to.
//!
//! ## Overview
//!
//! - **Loader**: one fetch of `guides.txt`, parsed into [`GuideRecord`]s
//! - **Search filter**: case-insensitive substring match on guide names
//! - **Renderer**: full re-render of a [`ListSurface`] with empty-state text
//! - **Directory**: the [`GuideDirectory`] controller that owns the loaded list
//! - **Builder**: authoring of guide pages and registration in the list
//!
//! ## Quick Start
//!
//! ```ignore
//! use guidedir_core::{FileSource, GuideDirectory, Loader, MemorySurface, PageOrigin};
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = Loader::new(FileSource::new("site/guides.txt"));
//!     let mut directory = GuideDirectory::new(PageOrigin::Served);
//!     let mut surface = MemorySurface::new();
//!
//!     directory.finish_load(loader.load().await, &mut surface);
//!     directory.search("docker", &mut surface);
//!
//!     for entry in &surface.entries {
//!         println!("{}  {}", entry.href, entry.label);
//!     }
//! }
//! ```

pub mod builder;
pub mod config;
pub mod directory;
pub mod effects;
pub mod error;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;
pub mod transition;

// Re-exports
pub use builder::{publish, render_page, Block, Direction, GuideDraft, PublishReport};
pub use config::{GuideDirConfig, SiteConfig, CONFIG_FILE_NAME};
pub use directory::{GuideDirectory, FILE_ORIGIN_NOTE};
pub use effects::{guide_magnetic, Bounds, MagneticEffect, MagneticOffset};
pub use error::{GuideError, GuideResult, LoadError};
pub use filter::filter;
pub use loader::Loader;
pub use model::{GuideRecord, PageOrigin};
pub use parser::{parse_guides, MalformedLine, ParsedGuides};
pub use render::{render, GuideEntry, ListSurface, MemorySurface};
#[cfg(feature = "fs")]
pub use source::FileSource;
pub use source::{GuideSource, SourceResponse, DEFAULT_GUIDES_FILE};
