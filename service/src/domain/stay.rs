//! [`Stay`] definitions.

use std::iter;

use common::{unit, Date, DateOf};
use derive_more::{Display, Error};

/// Requested stay between an arrival and a departure date.
///
/// The departure date is the check-out date and is never priced, so a
/// zero-night [`Stay`] is unrepresentable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stay {
    /// Arrival (check-in) [`Date`] of this [`Stay`].
    check_in: ArrivalDate,

    /// Departure (check-out) [`Date`] of this [`Stay`].
    check_out: DepartureDate,
}

impl Stay {
    /// Creates a new [`Stay`] if the provided dates form a valid range.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDateRangeError`] if `check_out` doesn't lie
    /// strictly after `check_in`.
    pub fn new(
        check_in: ArrivalDate,
        check_out: DepartureDate,
    ) -> Result<Self, InvalidDateRangeError> {
        if check_out.coerce::<()>() <= check_in.coerce() {
            return Err(InvalidDateRangeError {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the [`ArrivalDate`] of this [`Stay`].
    #[must_use]
    pub fn check_in(&self) -> ArrivalDate {
        self.check_in
    }

    /// Returns the [`DepartureDate`] of this [`Stay`].
    #[must_use]
    pub fn check_out(&self) -> DepartureDate {
        self.check_out
    }

    /// Returns the ordered sequence of nights priced for this [`Stay`]:
    /// every [`Date`] from the check-in up to, but excluding, the
    /// check-out.
    pub fn nights(&self) -> impl Iterator<Item = Date> + '_ {
        let check_out: Date = self.check_out.coerce();
        iter::successors(Some(self.check_in.coerce()), |d: &Date| {
            d.next_day()
        })
        .take_while(move |d| *d < check_out)
    }

    /// Returns the number of nights of this [`Stay`].
    #[expect(clippy::missing_panics_doc, reason = "positive by construction")]
    #[must_use]
    pub fn num_nights(&self) -> u32 {
        u32::try_from(
            self.check_in
                .coerce::<()>()
                .whole_days_until(self.check_out.coerce()),
        )
        .expect("positive by construction")
    }
}

/// Arrival (check-in) [`Date`] of a [`Stay`].
pub type ArrivalDate = DateOf<(Stay, unit::Arrival)>;

/// Departure (check-out) [`Date`] of a [`Stay`].
pub type DepartureDate = DateOf<(Stay, unit::Departure)>;

/// Error of creating a [`Stay`] whose departure doesn't follow its arrival.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display(
    "`check_out` date {} must be after `check_in` date {}",
    check_out.to_iso8601(),
    check_in.to_iso8601()
)]
pub struct InvalidDateRangeError {
    /// Arrival date of the rejected request.
    pub check_in: ArrivalDate,

    /// Departure date of the rejected request.
    pub check_out: DepartureDate,
}
