//! Cylindrical (ρ, φ, z) coordinates.

use crate::coordinate_systems::CoordinateSystem;
use crate::scalar::{InvalidDimension, Scalar};
use crate::util::BoundedAngle;
use std::fmt;
use std::fmt::{Display, Formatter};
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point given by its distance ρ (rho) from the Z axis, its azimuth φ (phi) from the positive
/// X axis, and its height z along the Z axis.
///
/// The canonical form has ρ ≥ 0 and φ in [0°, 360°). Construction does not enforce this, since
/// intermediate values (eg, from [`Cylindrical::lerp`]) may legitimately fall outside it; use
/// [`Cylindrical::is_canonical`] and [`Cylindrical::canonicalize`] where it matters. The
/// [`CoordinateSystem`] projections always operate on the canonical form.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use unitful_coordinate_systems::{CoordinateSystem, Cylindrical};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let c = Cylindrical::new(
///     Length::new::<meter>(2.),
///     Angle::new::<degree>(90.),
///     Length::new::<meter>(0.),
/// );
/// assert_relative_eq!(c.x().get::<meter>(), 0., epsilon = 1e-12);
/// assert_relative_eq!(c.y().get::<meter>(), 2.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cylindrical {
    rho: Length,
    phi: Angle,
    z: Length,
}

impl Cylindrical {
    /// Constructs a coordinate at the given (ρ, φ, z).
    pub fn new(rho: impl Into<Length>, phi: impl Into<Angle>, z: impl Into<Length>) -> Self {
        Self {
            rho: rho.into(),
            phi: phi.into(),
            z: z.into(),
        }
    }

    /// Constructs a coordinate from named components.
    pub fn build(Components { rho, phi, z }: Components) -> Self {
        Self { rho, phi, z }
    }

    /// Constructs a coordinate from values whose dimension is only known at runtime.
    ///
    /// `rho` and `z` must be lengths and `phi` must be an angle. If not, returns
    /// [`InvalidDimension`] for the first mismatched component in (ρ, φ, z) order.
    pub fn try_from_scalars(
        rho: impl Into<Scalar>,
        phi: impl Into<Scalar>,
        z: impl Into<Scalar>,
    ) -> Result<Self, InvalidDimension> {
        Ok(Self {
            rho: InvalidDimension::check_length("Cylindrical", "rho", rho)?,
            phi: InvalidDimension::check_angle("Cylindrical", "phi", phi)?,
            z: InvalidDimension::check_length("Cylindrical", "z", z)?,
        })
    }

    /// Constructs a coordinate at the origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            rho: Length::ZERO,
            phi: Angle::ZERO,
            z: Length::ZERO,
        }
    }

    /// Returns the stored components, which are not necessarily canonical.
    #[must_use]
    pub fn components(&self) -> Components {
        Components {
            rho: self.rho,
            phi: self.phi,
            z: self.z,
        }
    }

    /// Returns true if ρ ≥ 0 and φ is in [0°, 360°).
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.rho >= Length::ZERO && BoundedAngle::is_bounded(self.phi) && !self.z.is_nan()
    }

    /// Returns the canonical representation of the same point.
    ///
    /// A negative ρ is flipped to the opposite side of the Z axis (ie, φ is turned by 180°), and
    /// φ is wrapped into [0°, 360°). Points on the Z axis get φ = 0.
    ///
    /// Canonicalizing a canonical coordinate off the Z axis returns it unchanged.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use unitful_coordinate_systems::Cylindrical;
    /// use uom::si::f64::{Angle, Length};
    /// use uom::si::{angle::degree, length::meter};
    ///
    /// let c = Cylindrical::new(
    ///     Length::new::<meter>(-1.),
    ///     Angle::new::<degree>(-90.),
    ///     Length::new::<meter>(3.),
    /// );
    /// assert!(!c.is_canonical());
    /// let canonical = c.canonicalize();
    /// assert!(canonical.is_canonical());
    /// assert_relative_eq!(
    ///     canonical,
    ///     Cylindrical::new(
    ///         Length::new::<meter>(1.),
    ///         Angle::new::<degree>(90.),
    ///         Length::new::<meter>(3.),
    ///     ),
    /// );
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let Self { mut rho, mut phi, z } = *self;

        if rho < Length::ZERO {
            rho = -rho;
            phi += Angle::HALF_TURN;
        }

        let phi = if rho == Length::ZERO {
            Angle::ZERO
        } else {
            BoundedAngle::new(phi).to_angle()
        };

        let canonical = Self { rho, phi, z };
        if canonical != *self {
            log::trace!("canonicalized cylindrical coordinate {} to {}", self, canonical);
        }
        canonical
    }

    /// Linearly interpolate between the components of this coordinate and another coordinate.
    ///
    /// Each of ρ, φ, and z is blended independently as `self * (1.0 - t) + rhs * t`, so the
    /// path traced out is a helix segment rather than a straight line. Angles are interpolated
    /// as given, without taking the shorter way around.
    ///
    /// The value for `t` is not restricted to the range [0, 1], and the result is not
    /// canonicalized.
    #[must_use]
    pub fn lerp(&self, rhs: &Self, t: f64) -> Self {
        Self {
            rho: self.rho * (1. - t) + rhs.rho * t,
            phi: self.phi * (1. - t) + rhs.phi * t,
            z: self.z * (1. - t) + rhs.z * t,
        }
    }
}

impl Default for Cylindrical {
    fn default() -> Self {
        Self::origin()
    }
}

impl CoordinateSystem for Cylindrical {
    fn x(&self) -> Length {
        let c = self.canonicalize();
        c.rho * c.phi.cos().value
    }

    fn y(&self) -> Length {
        let c = self.canonicalize();
        c.rho * c.phi.sin().value
    }

    fn z(&self) -> Length {
        self.z
    }

    fn r(&self) -> Length {
        self.rho.hypot(self.z)
    }

    fn rho(&self) -> Length {
        self.rho.abs()
    }

    fn phi(&self) -> Angle {
        self.canonicalize().phi
    }

    fn theta(&self) -> Angle {
        let rho = self.rho.abs();
        if rho == Length::ZERO && self.z == Length::ZERO {
            log::trace!("polar angle of the origin is undefined; using 0");
            return Angle::ZERO;
        }
        rho.atan2(self.z)
    }
}

/// Argument type for [`Cylindrical::build`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[must_use]
pub struct Components {
    /// The distance from the Z axis.
    pub rho: Length,
    /// The azimuthal angle from the positive X axis towards the positive Y axis.
    pub phi: Angle,
    /// The height along the Z axis.
    pub z: Length,
}

impl TryFrom<[Scalar; 3]> for Cylindrical {
    type Error = InvalidDimension;

    fn try_from([rho, phi, z]: [Scalar; 3]) -> Result<Self, Self::Error> {
        Self::try_from_scalars(rho, phi, z)
    }
}

impl Display for Cylindrical {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ρ = {} m, φ = {} rad, z = {} m",
            self.rho.get::<meter>(),
            self.phi.get::<radian>(),
            self.z.get::<meter>()
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Cylindrical {
    /// Tolerance in meters for lengths and radians for angles.
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rho
            .get::<meter>()
            .abs_diff_eq(&other.rho.get::<meter>(), epsilon)
            && BoundedAngle::new(self.phi).abs_diff_eq(&BoundedAngle::new(other.phi), epsilon)
            && self
                .z
                .get::<meter>()
                .abs_diff_eq(&other.z.get::<meter>(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Cylindrical {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.rho
            .get::<meter>()
            .relative_eq(&other.rho.get::<meter>(), epsilon, max_relative)
            && BoundedAngle::new(self.phi).relative_eq(
                &BoundedAngle::new(other.phi),
                epsilon,
                max_relative,
            )
            && self
                .z
                .get::<meter>()
                .relative_eq(&other.z.get::<meter>(), epsilon, max_relative)
    }
}
