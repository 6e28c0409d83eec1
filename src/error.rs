//! Error types for Fresco operations.
//!
//! This module defines [`FrescoError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FrescoError` for pipeline errors that need distinct handling
//! - Use `anyhow::Error` (via `FrescoError::Other`) for unexpected errors
//! - Fetch errors always name the template so callers can tell which render
//!   request failed

use thiserror::Error;

/// Core error type for Fresco operations.
#[derive(Debug, Error)]
pub enum FrescoError {
    /// Fetching the template resource failed (transport error or
    /// non-success status).
    #[error("Failed to load template \"{name}\": {detail}")]
    TemplateFetch { name: String, detail: String },

    /// Fetching the behavior resource failed.
    #[error("Failed to load behavior for template \"{name}\": {detail}")]
    ScriptFetch { name: String, detail: String },

    /// The fetched template did not compile.
    #[error("Template \"{name}\" failed to compile")]
    TemplateCompile {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Rendering a compiled template failed.
    #[error("Template \"{name}\" failed to render")]
    RenderFailed {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// No behavior has been registered for the rendered name.
    #[error("No behavior registered for template \"{name}\"")]
    UnregisteredBehavior { name: String },

    /// A behavior transform rejected its input data.
    #[error("Behavior for template \"{name}\" failed: {detail}")]
    BehaviorFailed { name: String, detail: String },

    /// Include directives form a cycle.
    #[error("Circular include detected: {chain}")]
    CircularInclude { chain: String },

    /// IO error wrapper (sink publication).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Fresco operations.
pub type Result<T> = std::result::Result<T, FrescoError>;
