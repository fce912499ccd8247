use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use serde::{Deserialize, Serialize};

/// Unit rate in pence per kilowatt-hour, VAT inclusive.
///
/// Negative on plunge-pricing days, when the grid pays for consumption.
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct KilowattHourRate(pub f64);

impl KilowattHourRate {
    pub const ZERO: Self = Self(0.0);
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} p/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p/kWh", self.0)
    }
}

impl Div<f64> for KilowattHourRate {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
