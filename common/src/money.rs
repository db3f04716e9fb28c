//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Rounds this [`Money`] to the minor units of its [`Currency`],
    /// resolving midpoints to the nearest even digit (banker's rounding),
    /// so repeated rounding introduces no systematic bias.
    #[must_use]
    pub fn rounded_to_minor_units(self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.minor_units(),
                RoundingStrategy::MidpointNearestEven,
            ),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Russian Ruble."]
        Rub = 3,
    }
}

impl Currency {
    /// Returns the number of decimal places of this [`Currency`]'s minor
    /// unit (e.g. `2` for cents).
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Usd | Self::Eur | Self::Rub => 2,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Eur,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Us").is_err());
        assert!(Money::from_str("123.45Usdollar").is_err());

        assert!(Money::from_str("123.00USD").is_ok());
        assert!(Money::from_str("123USD").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            }
            .to_string(),
            "123.45USD",
        );

        assert_eq!(
            Money {
                amount: decimal("123.00"),
                currency: Currency::Rub,
            }
            .to_string(),
            "123RUB",
        );
    }

    #[test]
    fn rounds_midpoints_to_even() {
        let usd = |s: &str| Money::new(decimal(s), Currency::Usd);

        assert_eq!(usd("10.005").rounded_to_minor_units(), usd("10.00"));
        assert_eq!(usd("10.015").rounded_to_minor_units(), usd("10.02"));
        assert_eq!(usd("10.025").rounded_to_minor_units(), usd("10.02"));
        assert_eq!(usd("10.035").rounded_to_minor_units(), usd("10.04"));
    }

    #[test]
    fn rounding_preserves_exact_amounts() {
        let eur = |s: &str| Money::new(decimal(s), Currency::Eur);

        assert_eq!(eur("168.75").rounded_to_minor_units(), eur("168.75"));
        assert_eq!(eur("-3.115").rounded_to_minor_units(), eur("-3.12"));
        assert_eq!(eur("0").rounded_to_minor_units(), eur("0"));
    }
}
