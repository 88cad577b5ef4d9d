//! Vitryn Core — shared errors and identifier utilities.
//!
//! Level-0 crate: the rest of the workspace depends on it and it depends
//! on nothing internal.
//!
//! # Modules
//!
//! - [`error`]: Error type and Result alias
//! - [`slug`]: Slug derivation for titles and file paths

pub mod error;
pub mod slug;

// Crate-root re-exports
pub use error::{Error, Result};
pub use slug::{slug_from_path, slugify};
