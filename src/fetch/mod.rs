//! Resource fetching.
//!
//! Template text and behavior resources are fetched over HTTP. Fetching is
//! synchronous and has no retry; a failed resource is simply re-requested
//! the next time its template is loaded.

mod http;

pub use http::HttpFetcher;
