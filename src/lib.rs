//! sysdash: a one-process host dashboard.
//!
//! Serves a single page at `/` and a JSON snapshot of host metrics at `/data`.
//! Every snapshot is read fresh from OS counters; nothing is persisted.

pub mod error;
pub mod metrics;
pub mod page;
pub mod routes;
pub mod state;
pub mod types;

pub use error::ObservationError;
pub use state::AppState;
pub use types::Snapshot;
