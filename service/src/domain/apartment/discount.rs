//! [`DiscountRule`] definitions.

use common::Percent;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::apartment;
#[cfg(doc)]
use crate::domain::Apartment;

/// Stay-length discount tier configured for an [`Apartment`].
#[derive(Clone, Copy, Debug)]
pub struct DiscountRule {
    /// ID of this [`DiscountRule`].
    pub id: Id,

    /// ID of the [`Apartment`] this [`DiscountRule`] belongs to.
    pub apartment_id: apartment::Id,

    /// Minimum number of nights a stay must reach to unlock this
    /// [`DiscountRule`].
    pub min_nights: MinNights,

    /// Percentage subtracted from the subtotal once unlocked.
    pub percentage: Percent,

    /// Indicator whether this [`DiscountRule`] is in effect.
    pub is_active: bool,
}

/// Selects the discount applicable to a stay of the provided number of
/// `nights` among the provided `rules`.
///
/// Only active [`DiscountRule`]s whose [`MinNights`] the stay reaches
/// qualify; the highest qualifying tier (the largest [`MinNights`]) wins,
/// and ties at the same tier resolve to the highest percentage. Returns
/// [`Percent::ZERO`] when no rule qualifies.
#[must_use]
pub fn applicable(rules: &[DiscountRule], nights: u32) -> Percent {
    rules
        .iter()
        .filter(|r| r.is_active && r.min_nights <= nights)
        .max_by_key(|r| (r.min_nights, r.percentage))
        .map_or(Percent::ZERO, |r| r.percentage)
}

/// ID of a [`DiscountRule`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Minimum number of nights unlocking a [`DiscountRule`].
pub type MinNights = u32;
