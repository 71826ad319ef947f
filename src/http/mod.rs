//! HTTP request subsystem.
//!
//! # Data Flow
//! ```text
//! Target + Params
//!     → target.rs (create_url)
//!     → client.rs (method, body, profile hooks, send)
//!     → response.rs (2xx → body, 404 → None, else → Status error)
//!     → optional JSON decode
//! ```

pub mod body;
pub mod client;
pub mod params;
pub mod response;
pub mod target;

pub use body::RequestBody;
pub use client::HttpComponent;
pub use params::{ParamValue, Params};
pub use response::decode_json;
pub use target::{create_url, Segment, Target};
