//! [`Query`] resolving a priced [`Quote`] for a requested stay.

use common::{Date, Money};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{
        apartment::{self, discount, PastArrivalError},
        quote::NightRate,
        stay::{self, InvalidDateRangeError, Stay},
        Apartment, Quote,
    },
    Service,
};
#[cfg(doc)]
use crate::domain::apartment::{DiscountRule, SeasonPrice};

use super::Query;

/// [`Query`] resolving a priced [`Quote`] for a stay requested in an
/// [`Apartment`].
///
/// The [`Apartment`], its [`SeasonPrice`]s and [`DiscountRule`]s are
/// immutable snapshots already fetched by the caller, and `today` is
/// injected rather than read from a system clock, so the resolution is
/// reproducible.
#[derive(Clone, Debug)]
pub struct QuoteStay {
    /// [`Apartment`] the stay is requested in.
    pub apartment: Apartment,

    /// [`SeasonPrice`]s of the [`Apartment`], in any order.
    pub seasons: Vec<apartment::SeasonPrice>,

    /// [`DiscountRule`]s of the [`Apartment`], active or not.
    pub rules: Vec<apartment::DiscountRule>,

    /// Arrival (check-in) [`Date`] of the requested stay.
    pub check_in: stay::ArrivalDate,

    /// Departure (check-out) [`Date`] of the requested stay.
    pub check_out: stay::DepartureDate,

    /// Current [`Date`] the request is made on.
    pub today: Date,
}

impl Query<QuoteStay> for Service {
    type Ok = Quote;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: QuoteStay) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let QuoteStay {
            apartment,
            seasons,
            rules,
            check_in,
            check_out,
            today,
        } = query;

        if !apartment
            .is_bookable(check_in, today)
            .map_err(|e| tracerr::new!(E::from(e)))?
        {
            return Err(tracerr::new!(E::OutsideBookingHorizon {
                apartment_id: apartment.id,
                check_in,
            }));
        }

        let stay = Stay::new(check_in, check_out)
            .map_err(|e| tracerr::new!(E::from(e)))?;

        let currency = apartment.base_price.currency;
        let per_night: Vec<NightRate> = stay
            .nights()
            .map(|date| NightRate {
                date,
                rate: apartment.nightly_rate(&seasons, date),
            })
            .collect();
        let subtotal: Decimal =
            per_night.iter().map(|n| n.rate.amount).sum();

        let nights = stay.num_nights();
        let discount_percent = discount::applicable(&rules, nights);
        let discount = Money::new(discount_percent.of(subtotal), currency)
            .rounded_to_minor_units();
        let discounted = subtotal - discount.amount;

        let service_fee = Money::new(
            apartment.service_fee_percentage.of(discounted),
            currency,
        )
        .rounded_to_minor_units();

        let cleaning_fee =
            apartment.cleaning_fee.unwrap_or(Money::zero(currency));
        let total = Money::new(
            discounted + service_fee.amount + cleaning_fee.amount,
            currency,
        );

        tracing::debug!(
            apartment_id = %apartment.id,
            nights,
            total = %total,
            "stay quoted",
        );

        Ok(Quote {
            nights,
            per_night,
            subtotal: Money::new(subtotal, currency),
            discount_percent,
            discount,
            cleaning_fee,
            service_fee,
            total,
        })
    }
}

/// Error of [`QuoteStay`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Requested stay dates don't form a valid range.
    #[display("invalid stay date range: {_0}")]
    #[from]
    InvalidDateRange(InvalidDateRangeError),

    /// Requested stay arrives in the past.
    #[display("stay arrives in the past: {_0}")]
    #[from]
    PastArrival(PastArrivalError),

    /// Requested stay falls outside the [`Apartment`]'s booking horizon.
    ///
    /// A normal business outcome, not a system fault: the stay is not yet
    /// bookable, and the caller may retry later with different dates.
    #[display(
        "stay arriving {} in `Apartment(id: {apartment_id})` is outside \
         the booking horizon",
        check_in.to_iso8601()
    )]
    OutsideBookingHorizon {
        /// ID of the [`Apartment`] the stay was requested in.
        apartment_id: apartment::Id,

        /// Requested arrival date.
        check_in: stay::ArrivalDate,
    },
}
