//! optref - Options reference regenerator.
//!
//! Rebuilds a Markdown options reference from two sources: the hand-written
//! prose already in the document, which is preserved verbatim, and the
//! configuration schema as extracted by an external tool, combined with the
//! default values actually in effect. Running it twice on unchanged inputs
//! produces identical output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use optref::{config::GeneratorConfig, docs::DocsGenerator};
//!
//! let generator = DocsGenerator::new(GeneratorConfig::default())?;
//! let path = generator.generate()?;
//! println!("Generated {}", path.display());
//! # Ok::<(), optref::OptrefError>(())
//! ```

/// Core error types and result aliases.
pub mod core;

/// Generator configuration and section layout.
pub mod config;

/// Document splitting, schema modelling and section rendering.
pub mod docs;

/// Command-line interface.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{OptrefError, Result};
