use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::energy::KilowattHours;

/// Power in kilowatts.
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
pub struct Kilowatts(pub f64);

impl Kilowatts {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kW", self.0)
    }
}

impl Mul<TimeDelta> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        KilowattHours(self.0 * rhs.as_seconds_f64() / 3600.0)
    }
}
