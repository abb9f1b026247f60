//! Authored walkthroughs for the step visualization gallery
//!
//! This crate holds the concrete frame types, the constant step data for
//! every walkthrough, and the catalog that groups them by category. Each
//! walkthrough is handed to an `sv_core` navigator as an immutable
//! sequence; nothing here mutates frames or tracks a cursor.

pub mod catalog;
pub mod content;
pub mod frames;
pub mod view;

use thiserror::Error;

pub use catalog::{Category, Gallery, GalleryFrame, Variant, Visualization};
pub use view::{render_text, FrameView};

/// Errors that can occur when looking up gallery content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown visualization '{0}'")]
    UnknownVisualization(String),

    #[error("Visualization '{slug}' has no variant '{key}'")]
    UnknownVariant { slug: String, key: String },

    #[error(transparent)]
    Navigator(#[from] sv_core::NavigatorError),
}
