//! Folio Core Library
//!
//! Core types, configuration, and error handling for the Folio portfolio site generator.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;

pub use config::Config;
pub use content::{
    ExperienceData, HomepageData, ParsedPost, PostPath, PostRecord, load_document,
};
pub use error::{CoreError, Result};
pub use frontmatter::PostFrontmatter;
