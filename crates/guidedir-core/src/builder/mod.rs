//! Guide page authoring.
//!
//! A [`GuideDraft`] is a title, a folder and an ordered list of [`Block`]s.
//! [`render_page`] turns it into a standalone HTML page and [`publish`]
//! writes that page to `<folder>/index.html` and appends the guide to the
//! guide list, where the directory page picks it up.

pub mod block;
pub mod html;
pub mod publish;

pub use block::{Block, Direction, GuideDraft};
pub use html::render_page;
pub use publish::{publish, PublishReport};
