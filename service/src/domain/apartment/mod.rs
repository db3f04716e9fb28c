//! [`Apartment`] definitions.

pub mod discount;
pub mod season;

use common::{Date, Money, Percent};
use derive_more::{Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::stay;

pub use self::{discount::DiscountRule, season::SeasonPrice};

/// Apartment listed for short-term rent.
///
/// Created and updated by administrative tooling; read-only to this crate.
#[derive(Clone, Debug)]
pub struct Apartment {
    /// ID of this [`Apartment`].
    pub id: Id,

    /// Nightly base rate of this [`Apartment`], charged for every night not
    /// covered by a [`SeasonPrice`].
    pub base_price: Money,

    /// One-time cleaning fee of this [`Apartment`], if any.
    pub cleaning_fee: Option<Money>,

    /// Percentage charged on top of the discounted subtotal.
    ///
    /// Zero means no service fee is applied.
    pub service_fee_percentage: Percent,

    /// Maximum number of days in advance a stay in this [`Apartment`] may
    /// be requested.
    ///
    /// [`None`] means unlimited advance booking.
    pub booking_horizon_days: Option<HorizonDays>,
}

impl Apartment {
    /// Returns the nightly rate of this [`Apartment`] in effect on the
    /// provided `night`.
    ///
    /// The rate is the price of the [`SeasonPrice`] covering the `night`
    /// (resolved by [`season::override_for`] when several overlap), or the
    /// base price when none covers it. Zero and negative season prices pass
    /// through untouched (promotional/free nights).
    #[must_use]
    pub fn nightly_rate(
        &self,
        seasons: &[SeasonPrice],
        night: Date,
    ) -> Money {
        season::override_for(seasons, night)
            .map_or(self.base_price, |s| s.price)
    }

    /// Checks whether a stay arriving on `check_in` may be booked on
    /// `today` under this [`Apartment`]'s advance-booking policy.
    ///
    /// `Ok(false)` means the stay is not yet bookable. It's a normal
    /// business outcome to be surfaced as "not yet available", not a
    /// malformed request.
    ///
    /// # Errors
    ///
    /// Returns a [`PastArrivalError`] if no horizon is configured and the
    /// `check_in` lies before `today`.
    pub fn is_bookable(
        &self,
        check_in: stay::ArrivalDate,
        today: Date,
    ) -> Result<bool, PastArrivalError> {
        let days_until = today.whole_days_until(check_in.coerce());

        match self.booking_horizon_days {
            None => {
                if days_until < 0 {
                    return Err(PastArrivalError { check_in, today });
                }
                Ok(true)
            }
            Some(horizon) => {
                Ok(days_until >= 0 && days_until <= i64::from(horizon))
            }
        }
    }
}

/// ID of an [`Apartment`].
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

/// Maximum number of days in advance a stay may be requested.
pub type HorizonDays = u16;

/// Error of requesting a stay arriving before the current date.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display(
    "`check_in` date {} lies before today {}",
    check_in.to_iso8601(),
    today.to_iso8601()
)]
pub struct PastArrivalError {
    /// Requested arrival date.
    pub check_in: stay::ArrivalDate,

    /// Current date the request was made on.
    pub today: Date,
}
