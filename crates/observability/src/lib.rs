//! Log setup for the `tindahan` binary.
//!
//! The menu owns stdout, so [`init`] sends structured logs to stderr. Cart
//! mutations and checkouts log at `debug`/`info`. Nothing shows below the
//! default `warn` filter unless `RUST_LOG` is set.

/// Install the global subscriber. A second call leaves the first one in place.
pub fn init() {
    tracing::init();
}

/// Subscriber construction (filter, formatter, writer).
pub mod tracing;
