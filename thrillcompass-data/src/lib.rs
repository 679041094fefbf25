//! External data sources for the ThrillCompass recommender.
//!
//! Responsibilities:
//! - Decode the Queue-Times wait-time and park directory feeds.
//! - Provide an HTTP [`WaitTimeProvider`](thrillcompass_core::WaitTimeProvider).
//! - Throttle repeated refreshes of the same park.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `thrillcompass-core`).
//! - Keep blocking I/O off async executors.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod queue_times;

pub use queue_times::{
    DEFAULT_BASE_URL, HttpWaitTimeProvider, HttpWaitTimeProviderConfig, Park, ParkDirectory,
    ParkGroup, ProviderBuildError, QueueTimesError, QueueTimesResponse,
    ThrottledWaitTimeProvider, parse_queue_times,
};
