//! [`Query`] definition.

pub mod quote;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::quote::QuoteStay;
