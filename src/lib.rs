//! Fresco - caching remote-template engine.
//!
//! Fresco fetches template text and a companion behavior resource over HTTP,
//! compiles the template, runs the behavior over caller-supplied data,
//! optionally publishes the rendered HTML to a sink, and returns the HTML.
//! Templates are compiled once per directory namespace and cached for the
//! life of the cache handle.
//!
//! # Modules
//!
//! - [`behavior`] - Behavior functions, script hosts, and registration
//! - [`cache`] - Compiled-template and behavior caching
//! - [`engine`] - The engine, its configuration, and the render pipeline
//! - [`error`] - Error types and result alias
//! - [`fetch`] - HTTP resource fetching
//! - [`sink`] - Render output sinks
//! - [`text`] - Stateless formatting helpers
//!
//! # Example
//!
//! ```no_run
//! use fresco::{Engine, EngineConfig, StaticScriptHost, PassthroughBehavior};
//! use serde_json::json;
//!
//! let config = EngineConfig::new()
//!     .template_dir("https://cdn.example/templates")
//!     .script_dir("https://cdn.example/templates");
//! let host = StaticScriptHost::new().behavior("welcome", PassthroughBehavior);
//!
//! let engine = Engine::new(config, host);
//! let html = engine.render("welcome", json!({ "user": "Ada" })).unwrap();
//! ```

pub mod behavior;
pub mod cache;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod sink;
pub mod text;

pub use behavior::{Behavior, BehaviorRegistry, PassthroughBehavior, ScriptHost, StaticScriptHost};
pub use cache::EngineCache;
pub use engine::{Engine, EngineConfig, RedirectTable};
pub use error::{FrescoError, Result};
pub use fetch::HttpFetcher;
pub use sink::{FileSink, MemorySink, RenderSink};
pub use text::{br2nl, nl2br};
