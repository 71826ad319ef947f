//! HTTP helper component.
//!
//! Wraps a pooled `reqwest` client to perform GET/HEAD/POST/PUT/DELETE
//! requests. A 2xx response yields the raw or JSON-decoded body, 404 yields
//! `None`, and any other status becomes a typed error.
//!
//! ```no_run
//! use http_component::{ClientConfig, HttpComponent, Params};
//!
//! # async fn run() -> http_component::Result<()> {
//! let http = HttpComponent::new(ClientConfig::default())?;
//! let page = http
//!     .get("https://example.com/search", &Params::new().with("q", "rust"))
//!     .await?;
//! if let Some(body) = page {
//!     println!("{body}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod observability;

pub use config::ClientConfig;
pub use error::{HttpComponentError, Result};
pub use http::{create_url, HttpComponent, ParamValue, Params, RequestBody, Segment, Target};
