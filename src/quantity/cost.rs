use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

/// Monetary cost in pounds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Neg,
    derive_more::Sub,
)]
pub struct Cost(pub f64);

impl Cost {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_sign_negative() {
            write!(f, "-£{:.2}", -self.0)
        } else {
            write!(f, "£{:.2}", self.0)
        }
    }
}

impl Mul<f64> for Cost {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
