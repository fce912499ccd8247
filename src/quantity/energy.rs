use std::{
    fmt::{Display, Formatter},
    ops::{Div, Mul},
};

use chrono::TimeDelta;

use crate::quantity::{cost::Cost, power::Kilowatts, rate::KilowattHourRate};

/// Energy in kilowatt-hours.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct KilowattHours(pub f64);

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);
}

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}

impl Div<Kilowatts> for KilowattHours {
    type Output = TimeDelta;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        let hours = self.0 / rhs.0;

        #[allow(clippy::cast_possible_truncation)]
        TimeDelta::seconds((hours * 3600.0) as i64)
    }
}
