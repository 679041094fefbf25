//! Fetch live wait times for a park.
//!
//! The `WaitTimeProvider` trait abstracts the live feed so the recommender
//! can be driven by an HTTP client, a file on disk, or a test double.

mod error;
mod provider;

pub use error::WaitTimeError;
pub use provider::WaitTimeProvider;
