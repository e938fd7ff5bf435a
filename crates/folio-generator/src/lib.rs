//! Folio Generator Library
//!
//! Page rendering and build orchestration for Folio.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`fragments`] - Navigation, footer and tag chip fragments shared by pages
//! - [`html`] - Page generator and the post page
//! - [`posts`] - Post discovery and compilation
//! - [`writing`] - Writing index
//! - [`home`] - Landing page
//! - [`experience`] - Experience page
//! - [`build`] - Build orchestration

pub mod build;
pub mod experience;
pub mod fragments;
pub mod home;
pub mod html;
pub mod posts;
pub mod template;
pub mod writing;

pub use build::{BuildError, BuildStats, Builder};
pub use fragments::ActivePage;
pub use html::HtmlGenerator;
pub use posts::{CompiledPost, compile_post, discover_posts};
pub use template::{Template, TemplateContext, TemplateRegistry};
