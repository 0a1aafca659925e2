use std::f64::consts::TAU;
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

/// An azimuthal angle wrapped into [0, 2π).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BoundedAngle {
    radians: f64,
}

impl BoundedAngle {
    pub(crate) fn new(angle: impl Into<Angle>) -> Self {
        Self {
            radians: Self::into_bounds(angle.into()),
        }
    }

    /// Returns the angle in [0°, 360°) in radians.
    pub(crate) fn get_bounded(self) -> f64 {
        self.radians
    }

    pub(crate) fn to_angle(self) -> Angle {
        Angle::new::<radian>(self.radians)
    }

    /// Returns true if `angle` is already in [0°, 360°), ie, if bounding it is a no-op.
    pub(crate) fn is_bounded(angle: Angle) -> bool {
        (0.0..TAU).contains(&angle.get::<radian>())
    }

    fn into_bounds(angle: Angle) -> f64 {
        let out_of_bounds: f64 = angle.get::<radian>();
        let bounded = out_of_bounds.rem_euclid(TAU);
        // rem_euclid of a tiny negative value rounds up to exactly 2π
        if bounded >= TAU {
            0.
        } else {
            bounded
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for BoundedAngle {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        // this is very accurate in radians
        0.000_000_001
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let min = f64::min(self.radians, other.radians);
        let max = f64::max(self.radians, other.radians);

        f64::abs_diff_eq(&min, &max, epsilon) || f64::abs_diff_eq(&(min + TAU), &max, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for BoundedAngle {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let min = f64::min(self.radians, other.radians);
        let max = f64::max(self.radians, other.radians);

        f64::relative_eq(&min, &max, epsilon, max_relative)
            || f64::relative_eq(&(min + TAU), &max, epsilon, max_relative)
    }
}
