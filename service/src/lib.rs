//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod query;

pub use self::query::Query;

/// Domain service resolving booking prices and availability.
///
/// Holds no mutable state and performs no I/O: every [`Query`] is a pure
/// function of its inputs plus the injected current date, so it is safe to
/// execute concurrently from any number of request handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Creates a new [`Service`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
