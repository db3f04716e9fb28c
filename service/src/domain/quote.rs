//! [`Quote`] definitions.

use common::{Date, Money, Percent};

/// Itemized pricing result for one specific stay request.
///
/// Produced fresh per request and never persisted. Identical inputs always
/// produce an identical [`Quote`], so it may be cached or replayed when
/// investigating support tickets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights priced.
    pub nights: u32,

    /// Ordered per-night breakdown, one entry per priced night.
    pub per_night: Vec<NightRate>,

    /// Sum of the nightly rates before any discount or fee.
    pub subtotal: Money,

    /// Discount applied to the subtotal.
    pub discount_percent: Percent,

    /// Amount subtracted from the subtotal by the discount.
    pub discount: Money,

    /// One-time cleaning fee.
    pub cleaning_fee: Money,

    /// Service fee charged on the discounted subtotal.
    pub service_fee: Money,

    /// Final amount of the stay.
    pub total: Money,
}

/// Rate charged for one night of a [`Quote`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NightRate {
    /// Date of the night.
    pub date: Date,

    /// Nightly rate in effect on that date.
    pub rate: Money,
}
