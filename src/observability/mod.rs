//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HttpComponent request:
//!     → profile.rs (trace event, profile key, timing)
//!     → metrics.rs (counters, histograms)
//!
//! Binary startup:
//!     → logging.rs (subscriber + env filter)
//! ```

pub mod logging;
pub mod metrics;
pub mod profile;

pub use profile::Profile;
