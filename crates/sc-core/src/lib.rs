//! sc-core: stable foundation for scorecast.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - subject (stable identifiers for the two tracked subjects)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod subject;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use subject::Subject;
