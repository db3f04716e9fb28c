//! [`SeasonPrice`] definitions.

use std::{cmp, str::FromStr};

use common::{unit, Date, DateOf, Money};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::apartment;
#[cfg(doc)]
use crate::domain::Apartment;

/// Date-range-scoped nightly rate superseding an [`Apartment`]'s base price
/// for the nights it covers.
#[derive(Clone, Debug)]
pub struct SeasonPrice {
    /// ID of this [`SeasonPrice`].
    pub id: Id,

    /// ID of the [`Apartment`] this [`SeasonPrice`] belongs to.
    pub apartment_id: apartment::Id,

    /// [`Name`] of this [`SeasonPrice`].
    pub name: Name,

    /// First calendar date this [`SeasonPrice`] covers.
    pub start_date: StartDate,

    /// Last calendar date this [`SeasonPrice`] covers (inclusive).
    pub end_date: EndDate,

    /// Nightly rate in effect for the covered nights.
    pub price: Money,
}

impl SeasonPrice {
    /// Checks whether this [`SeasonPrice`] covers the provided `night`.
    #[must_use]
    pub fn covers(&self, night: Date) -> bool {
        self.start_date.coerce() <= night && night <= self.end_date.coerce()
    }

    /// Returns the span of this [`SeasonPrice`] in whole days
    /// (`0` for a single-date season).
    #[must_use]
    pub fn span_days(&self) -> i64 {
        self.start_date
            .coerce::<()>()
            .whole_days_until(self.end_date.coerce())
    }
}

/// Resolves which of the provided `seasons` overrides the nightly rate on
/// the provided `night`.
///
/// When several [`SeasonPrice`]s cover the `night`, the narrowest range
/// wins; ranges of an equal span resolve to the later [`StartDate`] (the
/// most recently defined exception takes precedence), and fully equal
/// ranges to the highest price. The resolution never depends on the order
/// the `seasons` are supplied in.
#[must_use]
pub fn override_for(
    seasons: &[SeasonPrice],
    night: Date,
) -> Option<&SeasonPrice> {
    seasons.iter().filter(|s| s.covers(night)).min_by_key(|s| {
        (
            s.span_days(),
            cmp::Reverse(s.start_date),
            cmp::Reverse(s.price.amount),
        )
    })
}

/// ID of a [`SeasonPrice`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
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

/// Name of a [`SeasonPrice`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// First [`Date`] covered by a [`SeasonPrice`].
pub type StartDate = DateOf<(SeasonPrice, unit::Start)>;

/// Last [`Date`] covered by a [`SeasonPrice`] (inclusive).
pub type EndDate = DateOf<(SeasonPrice, unit::End)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Date, Money};
    use time::macros::date;

    use crate::domain::apartment;

    use super::{override_for, Id, Name, SeasonPrice};

    fn season(
        name: &str,
        start: time::Date,
        end: time::Date,
        price: &str,
    ) -> SeasonPrice {
        SeasonPrice {
            id: Id::new(),
            apartment_id: apartment::Id::new(),
            name: Name::new(name).unwrap(),
            start_date: Date::from(start).coerce(),
            end_date: Date::from(end).coerce(),
            price: Money::from_str(price).unwrap(),
        }
    }

    #[test]
    fn covers_is_inclusive_on_both_bounds() {
        let s = season(
            "June",
            date!(2025 - 06 - 01),
            date!(2025 - 06 - 10),
            "250USD",
        );

        assert!(s.covers(Date::from(date!(2025 - 06 - 01))));
        assert!(s.covers(Date::from(date!(2025 - 06 - 10))));
        assert!(!s.covers(Date::from(date!(2025 - 05 - 31))));
        assert!(!s.covers(Date::from(date!(2025 - 06 - 11))));
    }

    #[test]
    fn narrower_range_wins_on_overlap() {
        let broad = season(
            "Summer",
            date!(2025 - 06 - 01),
            date!(2025 - 08 - 31),
            "220USD",
        );
        let narrow = season(
            "Midsummer week",
            date!(2025 - 06 - 20),
            date!(2025 - 06 - 27),
            "300USD",
        );

        let night = Date::from(date!(2025 - 06 - 22));
        let seasons = [broad.clone(), narrow.clone()];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, narrow.id);

        // Same outcome regardless of supply order.
        let seasons = [narrow.clone(), broad];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, narrow.id);
    }

    #[test]
    fn later_start_wins_on_equal_span() {
        let earlier = season(
            "Early June",
            date!(2025 - 06 - 01),
            date!(2025 - 06 - 14),
            "230USD",
        );
        let later = season(
            "Mid June",
            date!(2025 - 06 - 08),
            date!(2025 - 06 - 21),
            "260USD",
        );

        let night = Date::from(date!(2025 - 06 - 10));
        let seasons = [earlier.clone(), later.clone()];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, later.id);

        let seasons = [later.clone(), earlier];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, later.id);
    }

    #[test]
    fn highest_price_wins_on_identical_ranges() {
        let cheap = season(
            "Promo",
            date!(2025 - 06 - 01),
            date!(2025 - 06 - 10),
            "180USD",
        );
        let pricey = season(
            "Festival",
            date!(2025 - 06 - 01),
            date!(2025 - 06 - 10),
            "280USD",
        );

        let night = Date::from(date!(2025 - 06 - 05));
        let seasons = [cheap.clone(), pricey.clone()];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, pricey.id);

        let seasons = [pricey.clone(), cheap];
        let resolved = override_for(&seasons, night).unwrap();
        assert_eq!(resolved.id, pricey.id);
    }

    #[test]
    fn no_covering_season_resolves_to_none() {
        let s = season(
            "June",
            date!(2025 - 06 - 01),
            date!(2025 - 06 - 10),
            "250USD",
        );

        assert!(override_for(
            std::slice::from_ref(&s),
            Date::from(date!(2025 - 07 - 01)),
        )
        .is_none());
        assert!(override_for(&[], Date::from(date!(2025 - 06 - 05)))
            .is_none());
    }
}
