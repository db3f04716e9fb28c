//! Calendar date utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::format_description::well_known::Iso8601;

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without a time-of-day component.
///
/// The `Of` type parameter distinguishes dates of different meaning
/// (e.g. an arrival date from a departure date) at compile time.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided [ISO 8601] string
    /// (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] calendar
    /// date.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, &Iso8601::DEFAULT)
            .map(Self::from)
            .map_err(ParseError)
    }

    /// Returns the [`Date`] as an [ISO 8601] string (`YYYY-MM-DD`).
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.inner.to_string()
    }

    /// Returns the [`Date`] following this one.
    ///
    /// [`None`] is returned if the following date is unrepresentable.
    #[must_use]
    pub fn next_day(self) -> Option<Self> {
        self.inner.next_day().map(Self::from)
    }

    /// Returns the number of whole days from this [`Date`] until the
    /// `other` one.
    ///
    /// Negative if the `other` [`Date`] lies before this one.
    #[must_use]
    pub fn whole_days_until(self, other: Self) -> i64 {
        (other.inner - self.inner).whole_days()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(date: time::Date) -> Self {
        Self {
            inner: date,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::DateOf;

    pub mod iso8601 {
        //! Module providing serialization and deserialization of [`DateOf`]
        //! as an ISO 8601 string.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::DateOf;

        /// Serializes the [`DateOf`] as an ISO 8601 string.
        ///
        /// # Errors
        ///
        /// Returns an error if the date cannot be serialized.
        pub fn serialize<Of, S>(
            date: &DateOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&date.to_iso8601())
        }

        /// Deserializes an ISO 8601 string into a [`DateOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid calendar date.
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            DateOf::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use time::macros::date;

    use super::Date;

    #[test]
    fn parses_and_formats_iso8601() {
        let parsed = Date::from_iso8601("2025-06-05").unwrap();
        assert_eq!(parsed, Date::from(date!(2025 - 06 - 05)));
        assert_eq!(parsed.to_iso8601(), "2025-06-05");

        assert!(Date::from_iso8601("2025-13-05").is_err());
        assert!(Date::from_iso8601("not a date").is_err());
    }

    #[test]
    fn next_day_crosses_month_and_year() {
        let d = Date::from(date!(2025 - 01 - 31));
        assert_eq!(d.next_day(), Some(Date::from(date!(2025 - 02 - 01))));

        let d = Date::from(date!(2024 - 12 - 31));
        assert_eq!(d.next_day(), Some(Date::from(date!(2025 - 01 - 01))));
    }

    #[test]
    fn whole_days_until_is_signed() {
        let jan1 = Date::from(date!(2025 - 01 - 01));
        let jan31 = Date::from(date!(2025 - 01 - 31));

        assert_eq!(jan1.whole_days_until(jan31), 30);
        assert_eq!(jan31.whole_days_until(jan1), -30);
        assert_eq!(jan1.whole_days_until(jan1), 0);
    }
}
