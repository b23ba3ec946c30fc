use thiserror::Error;

/// Any failure to read OS counters while building a snapshot.
///
/// There is nothing to retry against: the fault is local to the host, so the
/// request boundary logs it and answers with a generic 500 body.
#[derive(Debug, Error)]
pub enum ObservationError {
    #[error("host did not report {0}")]
    CounterUnavailable(&'static str),

    #[error("no filesystem mounted at {0}")]
    RootDiskMissing(String),
}
